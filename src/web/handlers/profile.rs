use actix_web::{HttpRequest, Responder, get, post, web};

use aix::db;

use crate::web::forms::ProfileEditForm;
use crate::web::helpers::{render, require_profile};
use crate::web::state::AppState;
use crate::web::templates::{ProfileEditTemplate, ProfileTemplate};

#[get("/profile")]
pub async fn profile_page(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    // The session id is handed to the posts service as a string, the same
    // shape it arrives in from the auth layer everywhere else.
    let posts = match state.posts.list_by_user(&profile.id.to_string()).await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Failed to list posts for user {}: {}", profile.id, e);
            Vec::new()
        }
    };

    render(ProfileTemplate {
        logged_in: true,
        profile,
        posts,
    })
}

#[get("/edit-profile")]
pub async fn edit_profile_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    render(ProfileEditTemplate {
        logged_in: true,
        profile,
        error: None,
        success: None,
    })
}

#[post("/edit-profile")]
pub async fn edit_profile_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProfileEditForm>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    let update = form.to_update();
    if update.is_empty() {
        return render(ProfileEditTemplate {
            logged_in: true,
            profile,
            error: Some("変更内容がありません".to_string()),
            success: None,
        });
    }

    match db::update_profile(&state.pool, profile.id, &update).await {
        Ok(Some(updated)) => render(ProfileEditTemplate {
            logged_in: true,
            profile: updated,
            error: None,
            success: Some("プロフィールを更新しました".to_string()),
        }),
        Ok(None) => render(ProfileEditTemplate {
            logged_in: true,
            profile,
            error: Some("プロフィールが見つかりません".to_string()),
            success: None,
        }),
        Err(e) => {
            log::error!("Profile update error: {}", e);
            render(ProfileEditTemplate {
                logged_in: true,
                profile,
                error: Some("プロフィールの更新に失敗しました".to_string()),
                success: None,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(profile_page)
        .service(edit_profile_form)
        .service(edit_profile_submit);
}
