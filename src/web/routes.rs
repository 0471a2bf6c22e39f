use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::public::index))
        .route("/services/:slug", get(handlers::public::service_detail))
        .route("/training/:slug", get(handlers::public::training_detail))
        .route("/verify", get(handlers::public::verify))
        .route("/contact", get(handlers::public::contact_form))
        .route("/contact", post(handlers::public::submit_contact))
        .route("/sitemap.xml", get(handlers::public::sitemap))
        .route("/robots.txt", get(handlers::public::robots))
        .route("/health", get(handlers::public::health))
        .route("/static/style.css", get(handlers::public::stylesheet))
}

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/services", get(handlers::api::list_services))
        .route("/services/:slug", get(handlers::api::get_service))
        .route("/training", get(handlers::api::list_programs))
        .route("/training/:slug", get(handlers::api::get_program))
        .route("/certificates/:number", get(handlers::api::verify_certificate))
        .route("/site", get(handlers::api::site_info))
}
