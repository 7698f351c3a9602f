pub mod auth;
pub mod cache;
pub mod db;
pub mod gallery;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod validation;

pub use db::create_pool;
