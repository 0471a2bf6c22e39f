use crate::models::ListingStatus;
use crate::services::slug::validate_slug;
use crate::services::{catalog, certificates};
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PaginationParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn paginate(
    page: Option<usize>,
    per_page: Option<usize>,
    default_size: usize,
    max_size: usize,
) -> (usize, usize, usize) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(default_size).min(max_size).max(1);
    let offset = (page - 1) * per_page;
    (page, per_page, offset)
}

fn json_envelope(
    data: serde_json::Value,
    total: i64,
    page: usize,
    per_page: usize,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": data,
        "meta": {
            "total": total,
            "page": page,
            "per_page": per_page,
        }
    }))
}

fn json_single(data: serde_json::Value) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": data,
    }))
}

fn not_found(msg: &str) -> Response {
    let body = serde_json::json!({
        "error": "Not Found",
        "message": msg,
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

fn bad_request(msg: &str) -> Response {
    let body = serde_json::json!({
        "error": "Bad Request",
        "message": msg,
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": "Internal server error"})),
    )
        .into_response()
}

/// GET /api/v1/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Response {
    let api = &state.config.api;
    let (page, per_page, offset) =
        paginate(params.page, params.per_page, api.default_page_size, api.max_page_size);

    let total = catalog::count_published_services(&state.db).unwrap_or(0);
    match catalog::list_published_services(&state.db, per_page, offset) {
        Ok(services) => json_envelope(
            serde_json::to_value(&services).unwrap_or_default(),
            total,
            page,
            per_page,
        )
        .into_response(),
        Err(e) => {
            tracing::error!("API list_services error: {}", e);
            internal_error()
        }
    }
}

/// GET /api/v1/services/:slug
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    if !validate_slug(&slug) {
        return bad_request("Not a well-formed slug");
    }

    match catalog::get_service_by_slug(&state.db, &slug) {
        Ok(Some(service)) if service.status == ListingStatus::Published => {
            json_single(serde_json::to_value(&service).unwrap_or_default()).into_response()
        }
        Ok(_) => not_found("Service not found"),
        Err(e) => {
            tracing::error!("API get_service error: {}", e);
            internal_error()
        }
    }
}

/// GET /api/v1/training
pub async fn list_programs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Response {
    let api = &state.config.api;
    let (page, per_page, offset) =
        paginate(params.page, params.per_page, api.default_page_size, api.max_page_size);

    let total = catalog::count_published_programs(&state.db).unwrap_or(0);
    match catalog::list_published_programs(&state.db, per_page, offset) {
        Ok(programs) => json_envelope(
            serde_json::to_value(&programs).unwrap_or_default(),
            total,
            page,
            per_page,
        )
        .into_response(),
        Err(e) => {
            tracing::error!("API list_programs error: {}", e);
            internal_error()
        }
    }
}

/// GET /api/v1/training/:slug
pub async fn get_program(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    if !validate_slug(&slug) {
        return bad_request("Not a well-formed slug");
    }

    match catalog::get_program_by_slug(&state.db, &slug) {
        Ok(Some(program)) if program.status == ListingStatus::Published => {
            json_single(serde_json::to_value(&program).unwrap_or_default()).into_response()
        }
        Ok(_) => not_found("Training program not found"),
        Err(e) => {
            tracing::error!("API get_program error: {}", e);
            internal_error()
        }
    }
}

/// GET /api/v1/certificates/:number
pub async fn verify_certificate(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Response {
    match certificates::verify(&state.db, &number) {
        Ok(Some(verification)) => {
            json_single(serde_json::to_value(&verification).unwrap_or_default()).into_response()
        }
        Ok(None) => not_found("Certificate not found"),
        Err(e) => {
            tracing::error!("API verify_certificate error: {}", e);
            internal_error()
        }
    }
}

/// GET /api/v1/site
pub async fn site_info(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.config.site;
    let data = serde_json::json!({
        "title": site.title,
        "description": site.description,
        "url": site.url,
        "language": site.language,
        "version": env!("CARGO_PKG_VERSION"),
    });
    json_single(data).into_response()
}
