use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use aix::db;
use aix::log_err;
use aix::models::{CommentCreate, Profile, ProfileIden};

use crate::web::forms::{CommentForm, NoticeQuery, PostEditForm, PostForm};
use crate::web::helpers::{current_profile, redirect, render, require_profile};
use crate::web::state::AppState;
use crate::web::templates::{HomeTemplate, PostDetailTemplate, PostEditTemplate, PostNewTemplate};

fn home_notice_message(code: &str) -> String {
    match code {
        "created" => "投稿を作成しました".to_string(),
        "deleted" => "投稿を削除しました".to_string(),
        other => other.to_string(),
    }
}

fn detail_notice_message(code: &str) -> String {
    match code {
        "updated" => "投稿を更新しました".to_string(),
        "liked" => "いいねしました".to_string(),
        "unliked" => "いいねを取り消しました".to_string(),
        "commented" => "コメントを投稿しました".to_string(),
        "comment_missing" => "コメントを入力してください".to_string(),
        "delete_failed" => "投稿の削除に失敗しました".to_string(),
        other => other.to_string(),
    }
}

#[get("/home")]
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    if let Err(resp) = require_profile(&state.pool, &req).await {
        return resp;
    }

    let posts = match state.posts.list_all().await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Failed to list posts: {}", e);
            Vec::new()
        }
    };

    render(HomeTemplate {
        logged_in: true,
        posts,
        notice: query.notice.as_deref().map(home_notice_message),
    })
}

async fn render_detail(
    state: &AppState,
    viewer: Option<Profile>,
    post_id: i64,
    notice: Option<String>,
) -> HttpResponse {
    let post = match state.posts.get(post_id).await {
        Ok(post) => post,
        Err(e) => {
            log::error!("Failed to load post {}: {}", post_id, e);
            return HttpResponse::NotFound().body("投稿が見つかりません");
        }
    };

    let author = match db::get_profile(&state.pool, &ProfileIden::Id(post.user_id)).await {
        Ok(Some(author)) => author,
        Ok(None) => return HttpResponse::NotFound().body("投稿が見つかりません"),
        Err(e) => {
            log::error!("Failed to load author for post {}: {}", post_id, e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let likes_count = db::count_likes(&state.pool, post_id).await.unwrap_or(0);
    let comments = db::list_comments_for_post(&state.pool, post_id)
        .await
        .unwrap_or_default();

    let viewer_has_liked = match &viewer {
        Some(v) => db::has_liked(&state.pool, v.id, post_id)
            .await
            .unwrap_or(false),
        None => false,
    };
    let is_owner = viewer.as_ref().is_some_and(|v| v.id == post.user_id);

    render(PostDetailTemplate {
        logged_in: viewer.is_some(),
        post,
        author,
        likes_count,
        comments_count: comments.len() as i64,
        viewer_has_liked,
        is_owner,
        comments,
        notice,
    })
}

#[get("/posts/{id}")]
pub async fn post_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    let viewer = current_profile(&state.pool, &req).await;
    let notice = query.notice.as_deref().map(detail_notice_message);

    render_detail(&state, viewer, path.into_inner(), notice).await
}

/// Legacy route kept from the original navigation; the rendered view is
/// driven by the live session, not by which path was taken.
#[get("/authenticated/posts/{id}")]
pub async fn authenticated_post_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    let viewer = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };
    let notice = query.notice.as_deref().map(detail_notice_message);

    render_detail(&state, Some(viewer), path.into_inner(), notice).await
}

#[get("/create-post")]
pub async fn create_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_profile(&state.pool, &req).await {
        return resp;
    }

    render(PostNewTemplate {
        logged_in: true,
        error: None,
        form: PostForm::default(),
    })
}

#[post("/create-post")]
pub async fn create_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<PostForm>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };

    let form = form.into_inner();

    if let Err(e) = form.validate() {
        return render(PostNewTemplate {
            logged_in: true,
            error: Some(e.to_string()),
            form,
        });
    }

    // The session exposes the identifier as an opaque string; the service
    // validates it is numeric before inserting.
    match state
        .posts
        .create(&profile.id.to_string(), &form.to_create())
        .await
    {
        Ok(_) => redirect("/home?notice=created"),
        Err(e) => {
            log::error!("Post creation error: {}", e);
            log_err!(&state.pool, form.to_create());
            render(PostNewTemplate {
                logged_in: true,
                error: Some("投稿の作成に失敗しました".to_string()),
                form,
            })
        }
    }
}

#[get("/posts/{id}/edit")]
pub async fn edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };
    let post_id = path.into_inner();

    let post = match state.posts.get(post_id).await {
        Ok(post) => post,
        Err(e) => {
            log::error!("Failed to load post {}: {}", post_id, e);
            return HttpResponse::NotFound().body("投稿が見つかりません");
        }
    };

    // Only the owner may edit; everyone else lands back on the detail view.
    if post.user_id != profile.id {
        return redirect(&format!("/posts/{}", post_id));
    }

    render(PostEditTemplate {
        logged_in: true,
        post,
        error: None,
    })
}

#[post("/posts/{id}/edit")]
pub async fn edit_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<PostEditForm>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };
    let post_id = path.into_inner();

    let post = match state.posts.get(post_id).await {
        Ok(post) => post,
        Err(e) => {
            log::error!("Failed to load post {}: {}", post_id, e);
            return HttpResponse::NotFound().body("投稿が見つかりません");
        }
    };

    if post.user_id != profile.id {
        return redirect(&format!("/posts/{}", post_id));
    }

    let update = form.to_update();
    if update.is_empty() {
        return render(PostEditTemplate {
            logged_in: true,
            post,
            error: Some("変更内容がありません".to_string()),
        });
    }

    match state.posts.update(post_id, &update).await {
        Ok(_) => redirect(&format!("/posts/{}?notice=updated", post_id)),
        Err(e) => {
            log::error!("Post update error: {}", e);
            log_err!(&state.pool, update);
            render(PostEditTemplate {
                logged_in: true,
                post,
                error: Some("投稿の更新に失敗しました".to_string()),
            })
        }
    }
}

#[post("/posts/{id}/delete")]
pub async fn delete_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let profile = match require_profile(&state.pool, &req).await {
        Ok(profile) => profile,
        Err(resp) => return resp,
    };
    let post_id = path.into_inner();

    let post = match state.posts.get(post_id).await {
        Ok(post) => post,
        Err(e) => {
            log::error!("Failed to load post {}: {}", post_id, e);
            return HttpResponse::NotFound().body("投稿が見つかりません");
        }
    };

    if post.user_id != profile.id {
        return redirect(&format!("/posts/{}", post_id));
    }

    match state.posts.delete(post_id).await {
        Ok(()) => redirect("/home?notice=deleted"),
        Err(e) => {
            log::error!("Post deletion error: {}", e);
            redirect(&format!("/posts/{}?notice=delete_failed", post_id))
        }
    }
}

#[post("/posts/{id}/like")]
pub async fn like_toggle(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let profile = match current_profile(&state.pool, &req).await {
        Some(profile) => profile,
        None => return redirect("/login?notice=auth_required"),
    };
    let post_id = path.into_inner();

    match db::toggle_like(&state.pool, profile.id, post_id).await {
        Ok(true) => redirect(&format!("/posts/{}?notice=liked", post_id)),
        Ok(false) => redirect(&format!("/posts/{}?notice=unliked", post_id)),
        Err(e) => {
            log::error!("Like toggle error: {}", e);
            redirect(&format!("/posts/{}", post_id))
        }
    }
}

#[post("/posts/{id}/comments")]
pub async fn comment_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<CommentForm>,
) -> impl Responder {
    let profile = match current_profile(&state.pool, &req).await {
        Some(profile) => profile,
        None => return redirect("/login?notice=auth_required"),
    };
    let post_id = path.into_inner();

    if form.validate().is_err() {
        return redirect(&format!("/posts/{}?notice=comment_missing", post_id));
    }

    let data = CommentCreate {
        user_id: profile.id,
        post_id,
        content: form.content.trim().to_string(),
    };

    match db::create_comment(&state.pool, &data).await {
        Ok(_) => redirect(&format!("/posts/{}?notice=commented", post_id)),
        Err(e) => {
            log::error!("Comment creation error: {}", e);
            redirect(&format!("/posts/{}", post_id))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(create_form)
        .service(create_submit)
        .service(post_detail)
        .service(authenticated_post_detail)
        .service(edit_form)
        .service(edit_submit)
        .service(delete_submit)
        .service(like_toggle)
        .service(comment_create);
}
