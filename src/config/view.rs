//! View configuration (postview.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// How renderers treat a post without an author.
///
/// The same policy applies to the list view and the detail view, so the
/// two can never disagree about the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingAuthorPolicy {
    /// Render the configured fallback name
    #[default]
    Fallback,
    /// Refuse to render the post and report an error
    Reject,
}

/// Main view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    // Site
    pub title: String,
    pub language: String,

    // URL
    pub root: String,
    /// Route of the single-post page; the post id is appended as `?id=`
    pub view_path: String,
    /// Route of the edit page; the post id is appended as `?id=`
    pub edit_path: String,

    // Containers
    /// Container id the list renderer targets
    pub list_container: String,
    /// Container id the detail renderer targets
    pub detail_container: String,

    // Session storage
    /// Storage key the selected post id is written under
    pub storage_key: String,

    // Rendering
    /// Moment.js-style date format for displayed creation dates
    pub date_format: String,
    /// Maximum character count for the body excerpt on list cards
    pub excerpt_length: usize,
    /// Clear a container before rendering into it; when false, repeated
    /// renders accumulate and the caller owns clearing
    pub clear_containers: bool,
    pub missing_author: MissingAuthorPolicy,
    /// Name rendered in place of a missing author under the fallback policy
    pub author_fallback: String,

    // Data
    /// Default posts file for the CLI and preview server
    pub posts_file: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Postview".to_string(),
            language: "en".to_string(),

            root: "/".to_string(),
            view_path: "/post/".to_string(),
            edit_path: "/post/edit/".to_string(),

            list_container: "postsContainer".to_string(),
            detail_container: "postContainer".to_string(),

            storage_key: "postId".to_string(),

            date_format: "MM/DD/YYYY".to_string(),
            excerpt_length: 150,
            clear_containers: false,
            missing_author: MissingAuthorPolicy::Fallback,
            author_fallback: "Unknown Author".to_string(),

            posts_file: "posts.json".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl ViewConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {:?}", path))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config in {:?}", path))?;
        Ok(config)
    }
}
