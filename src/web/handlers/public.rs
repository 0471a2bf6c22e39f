use crate::models::{ListingStatus, NewContactMessage};
use crate::services::seo::PageMeta;
use crate::services::slug::validate_slug;
use crate::services::{catalog, certificates, contact};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

fn make_context(state: &AppState, meta: &PageMeta) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx.insert("contact_info", &state.config.contact);
    ctx.insert("meta", meta);
    ctx
}

fn render_not_found(state: &AppState) -> AppResult<Response> {
    let meta = PageMeta::page(
        &state.config.site,
        "Page not found",
        &state.config.site.description,
        "/",
    );
    let ctx = make_context(state, &meta);
    let html = state.templates.render("public/404.html", &ctx)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let services = catalog::list_published_services(&state.db, 100, 0)?;
    let programs = catalog::list_published_programs(&state.db, 100, 0)?;

    let meta = PageMeta::home(&state.config.site);
    let mut ctx = make_context(&state, &meta);
    ctx.insert("homepage", &state.config.homepage);
    ctx.insert("sections", &state.config.homepage.get_sections_order());
    ctx.insert("services", &services);
    ctx.insert("programs", &programs);

    let html = state.templates.render("public/index.html", &ctx)?;
    Ok(Html(html))
}

pub async fn service_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    // Malformed path parameters never reach the store.
    if !validate_slug(&slug) {
        return render_not_found(&state);
    }

    match catalog::get_service_by_slug(&state.db, &slug)? {
        Some(service) if service.status == ListingStatus::Published => {
            let meta = PageMeta::page(
                &state.config.site,
                &service.title,
                &service.summary,
                &format!("/services/{}", service.slug),
            );
            let mut ctx = make_context(&state, &meta);
            ctx.insert("service", &service);

            let html = state.templates.render("public/service.html", &ctx)?;
            Ok(Html(html).into_response())
        }
        _ => render_not_found(&state),
    }
}

pub async fn training_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    if !validate_slug(&slug) {
        return render_not_found(&state);
    }

    match catalog::get_program_by_slug(&state.db, &slug)? {
        Some(program) if program.status == ListingStatus::Published => {
            let meta = PageMeta::page(
                &state.config.site,
                &program.title,
                &program.summary,
                &format!("/training/{}", program.slug),
            );
            let mut ctx = make_context(&state, &meta);
            ctx.insert("program", &program);

            let html = state.templates.render("public/training.html", &ctx)?;
            Ok(Html(html).into_response())
        }
        _ => render_not_found(&state),
    }
}

#[derive(Deserialize)]
pub struct VerifyQuery {
    number: Option<String>,
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyQuery>,
) -> AppResult<Html<String>> {
    let meta = PageMeta::page(
        &state.config.site,
        "Verify a certificate",
        "Check the standing of a Ridgeline Advisory training certificate.",
        "/verify",
    );
    let mut ctx = make_context(&state, &meta);

    match query.number.as_deref().map(str::trim) {
        Some(number) if !number.is_empty() => {
            let verification = certificates::verify(&state.db, number)?;
            ctx.insert("checked", &true);
            ctx.insert("query_number", &certificates::normalize_number(number));
            ctx.insert("verification", &verification);
        }
        _ => {
            ctx.insert("checked", &false);
        }
    }

    let html = state.templates.render("public/verify.html", &ctx)?;
    Ok(Html(html))
}

pub async fn contact_form(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let meta = PageMeta::page(
        &state.config.site,
        "Contact",
        "Get in touch with Ridgeline Advisory.",
        "/contact",
    );
    let mut ctx = make_context(&state, &meta);
    ctx.insert("form", &NewContactMessage::default());

    let html = state.templates.render("public/contact.html", &ctx)?;
    Ok(Html(html))
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<NewContactMessage>,
) -> AppResult<Response> {
    if let Err(rejection) = contact::validate(&form) {
        let meta = PageMeta::page(
            &state.config.site,
            "Contact",
            "Get in touch with Ridgeline Advisory.",
            "/contact",
        );
        let mut ctx = make_context(&state, &meta);
        ctx.insert("form", &form);
        ctx.insert("error", &rejection.to_string());

        let html = state.templates.render("public/contact.html", &ctx)?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    contact::submit_message(&state.db, &form)?;
    tracing::info!("Contact message received from {}", form.email.trim());

    let meta = PageMeta::page(
        &state.config.site,
        "Message sent",
        "Thanks for getting in touch.",
        "/contact",
    );
    let ctx = make_context(&state, &meta);
    let html = state.templates.render("public/message_sent.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let services = catalog::list_published_services(&state.db, 1000, 0)?;
    let programs = catalog::list_published_programs(&state.db, 1000, 0)?;
    let site = &state.config.site;

    let mut urls = String::new();

    urls.push_str(&format!(
        r#"  <url>
    <loc>{}</loc>
    <changefreq>weekly</changefreq>
    <priority>1.0</priority>
  </url>
"#,
        site.url
    ));

    for service in services {
        urls.push_str(&format!(
            r#"  <url>
    <loc>{}/services/{}</loc>
    <lastmod>{}</lastmod>
    <changefreq>monthly</changefreq>
    <priority>0.8</priority>
  </url>
"#,
            site.url,
            service.slug,
            service
                .updated_at
                .split(' ')
                .next()
                .unwrap_or(&service.updated_at)
        ));
    }

    for program in programs {
        urls.push_str(&format!(
            r#"  <url>
    <loc>{}/training/{}</loc>
    <lastmod>{}</lastmod>
    <changefreq>monthly</changefreq>
    <priority>0.8</priority>
  </url>
"#,
            site.url,
            program.slug,
            program
                .updated_at
                .split(' ')
                .next()
                .unwrap_or(&program.updated_at)
        ));
    }

    for path in ["/verify", "/contact"] {
        urls.push_str(&format!(
            r#"  <url>
    <loc>{}{}</loc>
    <changefreq>yearly</changefreq>
    <priority>0.5</priority>
  </url>
"#,
            site.url, path
        ));
    }

    let sitemap = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}</urlset>"#,
        urls
    );

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap,
    )
        .into_response())
}

pub async fn robots(State(state): State<Arc<AppState>>) -> Response {
    let body = format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        state.config.site.url.trim_end_matches('/')
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn stylesheet(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let css = state.templates.render("css/style.css", &Context::new())?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response())
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    render_not_found(&state)
}
