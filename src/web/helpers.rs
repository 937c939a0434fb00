use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use sqlx::PgPool;
use uuid::Uuid;

use aix::db;
use aix::models::Profile;

pub const SESSION_COOKIE: &str = "aix_session";

pub fn session_token(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok())
}

/// The single source of truth for authenticated-vs-public rendering: a live
/// session lookup. Screens never carry a per-route authenticated flag.
pub async fn current_profile(pool: &PgPool, req: &HttpRequest) -> Option<Profile> {
    let token = session_token(req)?;

    match db::get_session_profile(pool, token).await {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("Session lookup failed: {}", e);
            None
        }
    }
}

pub async fn require_profile(pool: &PgPool, req: &HttpRequest) -> Result<Profile, HttpResponse> {
    match current_profile(pool, req).await {
        Some(profile) => Ok(profile),
        None => Err(redirect("/login")),
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
