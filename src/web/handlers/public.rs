use actix_web::{HttpRequest, Responder, get, web};

use crate::web::helpers::{current_profile, render};
use crate::web::state::AppState;
use crate::web::templates::IndexTemplate;

#[get("/")]
pub async fn index(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let logged_in = current_profile(&state.pool, &req).await.is_some();

    let posts = match state.posts.list_all().await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Failed to list posts: {}", e);
            Vec::new()
        }
    };

    render(IndexTemplate { logged_in, posts })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
