use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use std::time::Duration;

use aix::db;
use aix::models::{ProfileCreate, ProfileIden};
use aix::services::passwords;

use crate::web::forms::{AuthQuery, LoginForm, RegisterForm};
use crate::web::helpers::{
    SESSION_COOKIE, current_profile, redirect, render, session_token,
};
use crate::web::state::AppState;
use crate::web::templates::{LoginTemplate, RegisterTemplate};

fn login_error_message(code: &str) -> String {
    match code {
        "missing" => "メールアドレスとパスワードを入力してください".to_string(),
        "invalid" => "メールアドレスまたはパスワードが正しくありません".to_string(),
        "rate_limit" => {
            "ログイン試行回数が多すぎます。しばらくしてからお試しください。".to_string()
        }
        "internal" => "エラーが発生しました。もう一度お試しください。".to_string(),
        other => other.to_string(),
    }
}

fn login_notice_message(code: &str) -> String {
    match code {
        "registered" => "アカウントが作成されました。ログインしてください。".to_string(),
        "auth_required" => {
            "ログインが必要です。この機能を使用するにはログインしてください。".to_string()
        }
        other => other.to_string(),
    }
}

fn register_error_message(code: &str) -> String {
    match code {
        "exists" => "このメールアドレスは既に登録されています".to_string(),
        "rate_limit" => "登録試行回数が多すぎます。しばらくしてからお試しください。".to_string(),
        "internal" => "エラーが発生しました。もう一度お試しください。".to_string(),
        other => other.to_string(),
    }
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(7))
        .finish()
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    // An already-authenticated visitor goes straight to the home feed.
    if current_profile(&state.pool, &req).await.is_some() {
        return redirect("/home");
    }

    render(LoginTemplate {
        logged_in: false,
        error: query.error.as_deref().map(login_error_message),
        notice: query.notice.as_deref().map(login_notice_message),
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check_rate_limit(
        &format!("login:{}", client_ip),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return redirect("/login?error=rate_limit");
    }

    if form.validate().is_err() {
        return redirect("/login?error=missing");
    }

    let email = form.email.trim().to_string();

    let profile = match db::get_profile(&state.pool, &ProfileIden::Email(email)).await {
        Ok(p) => p,
        Err(e) => {
            log::error!("Database error during login: {}", e);
            return redirect("/login?error=internal");
        }
    };

    // Always verify against some hash so a missing account takes as long
    // as a wrong password.
    let stored_hash = match &profile {
        Some(p) => p.password_hash.clone(),
        None => passwords::hash("dummy_password_for_timing").unwrap_or_else(|e| {
            log::error!("Failed to generate dummy hash: {}", e);
            "$argon2id$v=19$m=65536,t=3,p=4$dW5rbm93bl9zYWx0X2R1bW15$E2LvWPx3FxvDaJxEMpLLBfWbLkPXfYHrF8z9CGCX3eI".to_string()
        }),
    };

    let password_valid = passwords::verify(&form.password, &stored_hash).unwrap_or(false);

    let Some(profile) = profile.filter(|_| password_valid) else {
        // Stay on the login screen with the friendly credentials message.
        return redirect("/login?error=invalid");
    };

    let session = match db::create_session(&state.pool, profile.id).await {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            return redirect("/login?error=internal");
        }
    };

    HttpResponse::SeeOther()
        .cookie(session_cookie(&session.token.to_string()))
        .insert_header(("Location", "/home"))
        .finish()
}

#[get("/register")]
pub async fn register_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    if current_profile(&state.pool, &req).await.is_some() {
        return redirect("/home");
    }

    render(RegisterTemplate {
        logged_in: false,
        error: query.error.as_deref().map(register_error_message),
    })
}

#[post("/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    // Validate first: a password mismatch never reaches the database.
    if let Err(e) = form.validate() {
        return redirect(&format!("/register?error={}", urlencoding::encode(e)));
    }

    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check_rate_limit(
        &format!("register:{}", client_ip),
        3,                         // 3 attempts
        Duration::from_secs(3600), // per hour
    ) {
        return redirect("/register?error=rate_limit");
    }

    let password_hash = match passwords::hash(&form.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return redirect("/register?error=internal");
        }
    };

    let data = ProfileCreate {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password_hash,
    };

    match db::create_profile(&state.pool, &data).await {
        Ok(Some(_)) => redirect("/login?notice=registered"),
        Ok(None) => redirect("/register?error=exists"),
        Err(e) => {
            log::error!("Database error during registration: {}", e);
            redirect("/register?error=internal")
        }
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = session_token(&req) {
        if let Err(e) = db::delete_session(&state.pool, token).await {
            log::error!("Failed to delete session: {}", e);
        }
    }

    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header(("Location", "/"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_form)
        .service(register_submit)
        .service(logout);
}
