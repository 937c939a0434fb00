use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub notification_likes: bool,
    pub notification_comments: bool,
    pub notification_follows: bool,
    pub email_frequency: String,
    pub profile_visibility: String,
    pub timezone: String,
    pub language: String,
    pub theme: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ProfileCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update for the edit-profile screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Full settings payload saved from the settings tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub username: String,
    pub bio: Option<String>,
    pub notification_likes: bool,
    pub notification_comments: bool,
    pub notification_follows: bool,
    pub email_frequency: String,
    pub profile_visibility: String,
    pub timezone: String,
    pub language: String,
    pub theme: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ProfileIden {
    Id(i64),
    Email(String),
}

impl Profile {
    pub fn display_bio(&self) -> &str {
        self.bio.as_deref().unwrap_or("自己紹介文がありません")
    }
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.bio.is_none() && self.avatar_url.is_none()
    }
}

impl fmt::Display for ProfileIden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileIden::Id(id) => write!(f, "ID {}", id),
            ProfileIden::Email(email) => write!(f, "email '{}'", email),
        }
    }
}

impl From<i64> for ProfileIden {
    fn from(id: i64) -> Self {
        ProfileIden::Id(id)
    }
}

impl From<&str> for ProfileIden {
    fn from(email: &str) -> Self {
        ProfileIden::Email(email.to_string())
    }
}
