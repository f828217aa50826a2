//! Configuration module

mod view;

pub use view::MissingAuthorPolicy;
pub use view::ViewConfig;
