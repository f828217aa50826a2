//! URL helper functions

use percent_encoding::{AsciiSet, CONTROLS};

use crate::config::ViewConfig;

/// Characters that must be escaped in a query-string value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%')
    .add(b'?');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/post/") // -> "/app/post/" when root is "/app/"
/// ```
pub fn url_for(config: &ViewConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Percent-encode a post id for use in a query string
pub fn encode_id(id: &str) -> String {
    percent_encoding::utf8_percent_encode(id, QUERY_VALUE).to_string()
}

/// URL of the single-post view page for a post id
pub fn view_url(config: &ViewConfig, id: &str) -> String {
    format!("{}?id={}", url_for(config, &config.view_path), encode_id(id))
}

/// URL of the edit page for a post id
pub fn edit_url(config: &ViewConfig, id: &str) -> String {
    format!("{}?id={}", url_for(config, &config.edit_path), encode_id(id))
}
