pub mod cache;
pub mod passwords;
pub mod posts;

pub use cache::{CacheKey, QueryCache};
pub use posts::PostService;
