use serde::Deserialize;

use aix::models::{PostCreate, PostUpdate, ProfileSettings, ProfileUpdate};

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("メールアドレスとパスワードを入力してください");
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Required-field checks plus password-confirmation equality. Runs
    /// before any database call.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("すべての項目を入力してください");
        }

        if self.password != self.confirm_password {
            return Err("パスワードが一致しません");
        }

        Ok(())
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub summary: String,
    pub ai_tools: String,
    pub tags: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub results: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("タイトルを入力してください");
        }
        if self.summary.trim().is_empty() {
            return Err("概要を入力してください");
        }
        if self.ai_tools.trim().is_empty() {
            return Err("AIツール名を入力してください");
        }
        if self.tags.trim().is_empty() {
            return Err("タグを入力してください");
        }
        Ok(())
    }

    pub fn to_create(&self) -> PostCreate {
        PostCreate {
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            ai_tools: self.ai_tools.trim().to_string(),
            purpose: non_empty(&self.purpose),
            method: non_empty(&self.method),
            results: non_empty(&self.results),
            tags: non_empty(&self.tags),
        }
    }
}

#[derive(Deserialize)]
pub struct PostEditForm {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub ai_tools: Option<String>,
    pub tags: Option<String>,
    pub purpose: Option<String>,
    pub method: Option<String>,
    pub results: Option<String>,
}

impl PostEditForm {
    /// Blank fields mean "leave unchanged"; the update applies only the
    /// fields that carry text.
    pub fn to_update(&self) -> PostUpdate {
        PostUpdate {
            title: self.title.as_deref().and_then(non_empty),
            summary: self.summary.as_deref().and_then(non_empty),
            ai_tools: self.ai_tools.as_deref().and_then(non_empty),
            purpose: self.purpose.as_deref().and_then(non_empty),
            method: self.method.as_deref().and_then(non_empty),
            results: self.results.as_deref().and_then(non_empty),
            tags: self.tags.as_deref().and_then(non_empty),
        }
    }
}

#[derive(Deserialize)]
pub struct CommentForm {
    pub content: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.content.trim().is_empty() {
            return Err("コメントを入力してください");
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct ProfileEditForm {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileEditForm {
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: self.username.as_deref().and_then(non_empty),
            bio: self.bio.as_deref().and_then(non_empty),
            avatar_url: self.avatar_url.as_deref().and_then(non_empty),
        }
    }
}

#[derive(Deserialize)]
pub struct SettingsForm {
    pub username: String,
    #[serde(default)]
    pub bio: String,
    // Checkboxes post a value only when checked.
    pub notification_likes: Option<String>,
    pub notification_comments: Option<String>,
    pub notification_follows: Option<String>,
    pub email_frequency: String,
    pub profile_visibility: String,
    pub timezone: String,
    pub language: String,
    pub theme: String,
}

impl SettingsForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("ユーザー名を入力してください");
        }
        Ok(())
    }

    pub fn to_settings(&self) -> ProfileSettings {
        ProfileSettings {
            username: self.username.trim().to_string(),
            bio: non_empty(&self.bio),
            notification_likes: self.notification_likes.is_some(),
            notification_comments: self.notification_comments.is_some(),
            notification_follows: self.notification_follows.is_some(),
            email_frequency: self.email_frequency.clone(),
            profile_visibility: self.profile_visibility.clone(),
            timezone: self.timezone.clone(),
            language: self.language.clone(),
            theme: self.theme.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("すべての項目を入力してください");
        }

        if self.new_password != self.confirm_password {
            return Err("新しいパスワードが一致しません");
        }

        Ok(())
    }
}

#[derive(Deserialize)]
pub struct EmailChangeForm {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: "tanaka".to_string(),
            email: "tanaka@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_register_validate_success() {
        assert!(register_form("secret123", "secret123").validate().is_ok());
    }

    #[test]
    fn test_register_validate_fails_on_password_mismatch() {
        let err = register_form("secret123", "secret124")
            .validate()
            .unwrap_err();
        assert_eq!(err, "パスワードが一致しません");
    }

    #[test]
    fn test_register_validate_fails_on_missing_fields() {
        let mut form = register_form("secret123", "secret123");
        form.email = " ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_post_form_requires_all_required_fields() {
        let form = PostForm {
            title: "ChatGPTで議事録を要約".to_string(),
            summary: "会議の議事録を自動で要約した".to_string(),
            ai_tools: "ChatGPT".to_string(),
            tags: "要約, 効率化".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        let missing = PostForm {
            tags: String::new(),
            ..form
        };
        assert_eq!(missing.validate().unwrap_err(), "タグを入力してください");
    }

    #[test]
    fn test_post_form_optional_fields_become_none_when_blank() {
        let form = PostForm {
            title: "t".to_string(),
            summary: "s".to_string(),
            ai_tools: "a".to_string(),
            tags: "x".to_string(),
            purpose: "  ".to_string(),
            method: "手順をまとめた".to_string(),
            results: String::new(),
        };

        let create = form.to_create();
        assert_eq!(create.purpose, None);
        assert_eq!(create.method.as_deref(), Some("手順をまとめた"));
        assert_eq!(create.results, None);
    }

    #[test]
    fn test_post_edit_form_blank_means_unchanged() {
        let form = PostEditForm {
            title: Some("新しいタイトル".to_string()),
            summary: Some(String::new()),
            ai_tools: None,
            tags: None,
            purpose: None,
            method: None,
            results: None,
        };

        let update = form.to_update();
        assert_eq!(update.title.as_deref(), Some("新しいタイトル"));
        assert_eq!(update.summary, None);
        assert!(!update.is_empty());
    }

    #[test]
    fn test_password_change_requires_matching_confirmation() {
        let form = PasswordChangeForm {
            current_password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
            confirm_password: "other".to_string(),
        };
        assert_eq!(
            form.validate().unwrap_err(),
            "新しいパスワードが一致しません"
        );
    }
}
