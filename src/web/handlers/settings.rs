use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use aix::db;
use aix::models::Profile;
use aix::services::passwords;

use crate::web::forms::{EmailChangeForm, PasswordChangeForm, SettingsForm};
use crate::web::helpers::{
    SESSION_COOKIE, is_unique_violation, render, require_profile,
};
use crate::web::state::AppState;
use crate::web::templates::SettingsTemplate;

fn render_settings(profile: Profile, error: Option<String>, success: Option<String>) -> HttpResponse {
    render(SettingsTemplate {
        logged_in: true,
        profile,
        error,
        success,
    })
}

#[get("/settings")]
pub async fn settings_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    render_settings(profile, None, None)
}

#[post("/settings")]
pub async fn settings_save(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SettingsForm>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    if let Err(e) = form.validate() {
        return render_settings(profile, Some(e.to_string()), None);
    }

    match db::update_profile_settings(&state.pool, profile.id, &form.to_settings()).await {
        Ok(Some(updated)) => {
            render_settings(updated, None, Some("設定を保存しました".to_string()))
        }
        Ok(None) => render_settings(
            profile,
            Some("プロフィールが見つかりません".to_string()),
            None,
        ),
        Err(e) => {
            log::error!("Settings update error: {}", e);
            render_settings(profile, Some("設定の保存に失敗しました。".to_string()), None)
        }
    }
}

#[post("/settings/password")]
pub async fn settings_password(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<PasswordChangeForm>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    if let Err(e) = form.validate() {
        return render_settings(profile, Some(e.to_string()), None);
    }

    let current_ok = match passwords::verify(&form.current_password, &profile.password_hash) {
        Ok(ok) => ok,
        Err(e) => {
            log::error!("Password verification error: {}", e);
            return render_settings(
                profile,
                Some("エラーが発生しました。もう一度お試しください。".to_string()),
                None,
            );
        }
    };

    if !current_ok {
        return render_settings(
            profile,
            Some("現在のパスワードが正しくありません".to_string()),
            None,
        );
    }

    let new_hash = match passwords::hash(&form.new_password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return render_settings(
                profile,
                Some("エラーが発生しました。もう一度お試しください。".to_string()),
                None,
            );
        }
    };

    match db::update_profile_password(&state.pool, profile.id, &new_hash).await {
        Ok(()) => render_settings(profile, None, Some("パスワードを変更しました".to_string())),
        Err(e) => {
            log::error!("Password update error: {}", e);
            render_settings(
                profile,
                Some("パスワードの変更に失敗しました".to_string()),
                None,
            )
        }
    }
}

#[post("/settings/email")]
pub async fn settings_email(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<EmailChangeForm>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    let email = form.email.trim().to_string();
    if email.is_empty() {
        return render_settings(
            profile,
            Some("メールアドレスを入力してください".to_string()),
            None,
        );
    }

    match db::update_profile_email(&state.pool, profile.id, &email).await {
        Ok(()) => render_settings(
            Profile { email, ..profile },
            None,
            Some("メールアドレスを変更しました".to_string()),
        ),
        Err(e) => {
            let msg = if is_unique_violation(&e) {
                "このメールアドレスは既に使用されています".to_string()
            } else {
                log::error!("Email update error: {}", e);
                "メールアドレスの変更に失敗しました".to_string()
            };
            render_settings(profile, Some(msg), None)
        }
    }
}

#[post("/settings/delete-account")]
pub async fn delete_account(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    // Posts, likes, comments and sessions cascade with the profile row.
    match db::delete_profile(&state.pool, profile.id).await {
        Ok(_) => {
            let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
            cookie.make_removal();

            HttpResponse::SeeOther()
                .cookie(cookie)
                .insert_header(("Location", "/"))
                .finish()
        }
        Err(e) => {
            log::error!("Account deletion error: {}", e);
            render_settings(
                profile,
                Some("アカウントの削除に失敗しました。".to_string()),
                None,
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(settings_form)
        .service(settings_save)
        .service(settings_password)
        .service(settings_email)
        .service(delete_account);
}
