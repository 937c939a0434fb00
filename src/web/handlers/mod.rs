pub mod auth;
pub mod posts;
pub mod profile;
pub mod public;
pub mod settings;
pub mod tags;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    posts::configure(cfg);
    profile::configure(cfg);
    settings::configure(cfg);
    tags::configure(cfg);
}
