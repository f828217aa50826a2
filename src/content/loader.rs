//! Post loading - local stand-in for the external post-read service

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::Post;

/// Loads post records from JSON files on disk
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// Load posts from a single JSON file.
    ///
    /// Accepts a bare array of posts, a single post object, or the API
    /// response envelope with a top-level `data` field wrapping either.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read posts from {:?}", path))?;
        let posts =
            parse_posts(&content).with_context(|| format!("invalid post data in {:?}", path))?;

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), path);
        Ok(Self { posts })
    }

    /// Load every `.json` file under a directory
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut posts = Vec::new();

        if !dir.exists() {
            return Ok(Self { posts });
        }

        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_json_file(path) {
                let loaded = fs::read_to_string(path)
                    .map_err(anyhow::Error::from)
                    .and_then(|content| parse_posts(&content));

                match loaded {
                    Ok(mut batch) => posts.append(&mut batch),
                    Err(e) => {
                        tracing::warn!("Failed to load posts from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), dir);
        Ok(Self { posts })
    }

    /// All loaded posts, in file order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of loaded posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Find a single post by id
    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }
}

/// Parse a JSON document into a list of posts
fn parse_posts(content: &str) -> Result<Vec<Post>> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    // Unwrap the `{"data": ...}` response envelope if present
    let value = match value {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    };

    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        _ => anyhow::bail!("expected a post object or an array of posts"),
    }
}

/// Check if a file is a JSON file
fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "json")
        .unwrap_or(false)
}
