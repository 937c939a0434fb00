use actix_web::{HttpRequest, Responder, get, web};

use aix::db;
use aix::models::PostQuery;

use crate::web::helpers::{current_profile, render};
use crate::web::state::AppState;
use crate::web::templates::TagTemplate;

#[get("/tags/{tag}")]
pub async fn tag_posts(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let tag = path.into_inner();
    let logged_in = current_profile(&state.pool, &req).await.is_some();

    let query = PostQuery {
        tag: Some(tag.clone()),
        ..Default::default()
    };

    let posts = match db::query_posts(&state.pool, &query).await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Failed to query posts for tag '{}': {}", tag, e);
            Vec::new()
        }
    };

    render(TagTemplate {
        logged_in,
        tag,
        posts,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(tag_posts);
}
