//! Content module - post models and loading

pub mod loader;
mod post;

pub use loader::PostStore;
pub use post::{Author, Media, Post};
