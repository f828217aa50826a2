//! Formatting helpers shared by the renderers, the CLI and the server

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
