use sqlx::PgPool;
use std::sync::Arc;

use aix::services::PostService;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub posts: PostService,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostService::new(pool.clone()),
            pool,
            rate_limiter: Arc::new(RateLimiter::new()),
        }
    }
}
