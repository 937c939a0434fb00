pub use comments::*;
pub use db::*;
pub use likes::*;
pub use posts::*;
pub use profiles::*;
pub use sessions::*;

mod comments;
mod db;
mod likes;
mod posts;
mod profiles;
mod sessions;
