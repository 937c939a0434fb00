use askama::Template;

use aix::models::{CommentWithAuthor, Post, PostWithCounts, Profile};

use crate::web::forms::PostForm;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub logged_in: bool,
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub logged_in: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub logged_in: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logged_in: bool,
    pub posts: Vec<Post>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate {
    pub logged_in: bool,
    pub post: Post,
    pub author: Profile,
    pub likes_count: i64,
    pub comments_count: i64,
    pub viewer_has_liked: bool,
    pub is_owner: bool,
    pub comments: Vec<CommentWithAuthor>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "post_new.html")]
pub struct PostNewTemplate {
    pub logged_in: bool,
    pub error: Option<String>,
    pub form: PostForm,
}

#[derive(Template)]
#[template(path = "post_edit.html")]
pub struct PostEditTemplate {
    pub logged_in: bool,
    pub post: Post,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub logged_in: bool,
    pub profile: Profile,
    pub posts: Vec<PostWithCounts>,
}

#[derive(Template)]
#[template(path = "profile_edit.html")]
pub struct ProfileEditTemplate {
    pub logged_in: bool,
    pub profile: Profile,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub logged_in: bool,
    pub profile: Profile,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Template)]
#[template(path = "tag_posts.html")]
pub struct TagTemplate {
    pub logged_in: bool,
    pub tag: String,
    pub posts: Vec<Post>,
}
