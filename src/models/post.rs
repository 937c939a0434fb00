use chrono::{DateTime, Utc};
use field_names::FieldNames;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub ai_tools: String,
    pub purpose: Option<String>,
    pub method: Option<String>,
    pub results: Option<String>,
    pub tags: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub summary: String,
    pub ai_tools: String,
    pub purpose: Option<String>,
    pub method: Option<String>,
    pub results: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub ai_tools: Option<String>,
    pub purpose: Option<String>,
    pub method: Option<String>,
    pub results: Option<String>,
    pub tags: Option<String>,
}

/// A post joined with its aggregated like and comment counts, as shown on
/// the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PostWithCounts {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub ai_tools: String,
    pub purpose: Option<String>,
    pub method: Option<String>,
    pub results: Option<String>,
    pub tags: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes_count: i64,
    pub comments_count: i64,
}

#[derive(Debug, FieldNames, Default)]
#[field_names(vis = "pub")]
pub struct PostQuery {
    pub user_id: Option<i64>,
    pub tag: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    //------------------------------------
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<Vec<Option<bool>>>,
}

/// Tags are stored as a comma-joined free-form string with no uniqueness or
/// normalization guarantee.
fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

impl Post {
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(self.tags.as_deref())
    }
}

impl PostWithCounts {
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(self.tags.as_deref())
    }
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                title: None,
                summary: None,
                ai_tools: None,
                purpose: None,
                method: None,
                results: None,
                tags: None,
            }
        )
    }
}

impl PostQuery {
    pub fn fields() -> &'static [&'static str] {
        &Self::FIELDS
    }

    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                user_id: None,
                tag: None,
                created_at: None,
                ..
            }
        )
    }
}

impl From<PostWithCounts> for Post {
    fn from(
        PostWithCounts {
            id,
            title,
            summary,
            ai_tools,
            purpose,
            method,
            results,
            tags,
            user_id,
            created_at,
            updated_at,
            ..
        }: PostWithCounts,
    ) -> Self {
        Post {
            id,
            title,
            summary,
            ai_tools,
            purpose,
            method,
            results,
            tags,
            user_id,
            created_at,
            updated_at,
        }
    }
}
