//! HTML helper functions

use crate::config::ViewConfig;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Wrap rendered container markup into a complete HTML document
pub fn wrap_page(config: &ViewConfig, page_title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
.post-card {{ border: 1px solid #ddd; border-radius: 4px; padding: 1rem; margin: 1rem 0; }}
.post-title {{ margin: 0 0 .5rem; }}
.post-image {{ max-width: 100%; }}
.post-date, .post-tags {{ color: #666; font-size: .85rem; }}
</style>
</head>
<body>
{content}
</body>
</html>
"#,
        lang = config.language,
        title = html_escape(page_title),
        content = content,
    )
}
