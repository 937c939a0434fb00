use sqlx::PgPool;

use std::sync::Arc;

use crate::common::PostError;
use crate::db;
use crate::models::{Post, PostCreate, PostUpdate, PostWithCounts};
use crate::services::cache::{CacheKey, QueryCache};

/// Post operations behind the keyed query cache.
///
/// Every mutation is a single best-effort call: no optimistic update, no
/// rollback, no retry. Dependent screens see stale data until the mutation
/// invalidates the relevant cache key and their next read re-fetches.
#[derive(Clone)]
pub struct PostService {
    pool: PgPool,
    cache: Arc<QueryCache>,
}

/// Identifiers arrive from the auth layer as opaque strings and must parse
/// as numeric profile ids before any storage call.
pub fn parse_user_id(raw: &str) -> Result<i64, PostError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| PostError::InvalidUserId(raw.to_string()))
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cache: Arc::new(QueryCache::new()),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// All posts ordered by creation time, descending.
    pub async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        if let Some(posts) = self.cache.get::<Vec<Post>>(&CacheKey::Posts) {
            return Ok(posts);
        }

        let posts = db::list_posts(&self.pool).await?;
        self.cache.put(CacheKey::Posts, &posts);

        Ok(posts)
    }

    /// One user's posts with like/comment counts. Fails with a validation
    /// error, before any database call, when the identifier is not numeric.
    pub async fn list_by_user(&self, raw_user_id: &str) -> Result<Vec<PostWithCounts>, PostError> {
        let user_id = parse_user_id(raw_user_id)?;

        let key = CacheKey::UserPosts(user_id);
        if let Some(posts) = self.cache.get::<Vec<PostWithCounts>>(&key) {
            return Ok(posts);
        }

        let posts = db::list_posts_by_user(&self.pool, user_id).await?;
        self.cache.put(key, &posts);

        Ok(posts)
    }

    pub async fn get(&self, post_id: i64) -> Result<Post, PostError> {
        let key = CacheKey::Post(post_id);
        if let Some(post) = self.cache.get::<Post>(&key) {
            return Ok(post);
        }

        let post = db::get_post_by_id(&self.pool, post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;
        self.cache.put(key, &post);

        Ok(post)
    }

    /// Inserts a new post owned by the session user and invalidates the
    /// "list all" entry.
    pub async fn create(&self, raw_user_id: &str, input: &PostCreate) -> Result<Post, PostError> {
        let user_id = parse_user_id(raw_user_id)?;

        let post = db::create_post(&self.pool, user_id, input).await?;
        self.cache.invalidate(&CacheKey::Posts);

        Ok(post)
    }

    /// Applies a partial field set and invalidates the cached single-post
    /// entry for that id.
    pub async fn update(&self, post_id: i64, input: &PostUpdate) -> Result<Post, PostError> {
        if input.is_empty() {
            return Err(PostError::InvalidRequest("No fields provided".into()));
        }

        let post = db::update_post(&self.pool, post_id, input)
            .await?
            .ok_or(PostError::NotFound(post_id))?;
        self.cache.invalidate(&CacheKey::Post(post_id));

        Ok(post)
    }

    /// Removes the post and invalidates the "list all" entry.
    pub async fn delete(&self, post_id: i64) -> Result<(), PostError> {
        if !db::delete_post(&self.pool, post_id).await? {
            return Err(PostError::NotFound(post_id));
        }

        self.cache.invalidate(&CacheKey::Posts);

        Ok(())
    }
}
