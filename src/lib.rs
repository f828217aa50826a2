//! postview-rs: a headless post feed renderer for blogging clients
//!
//! This crate projects post records into element trees on an abstract
//! rendering surface and wires up the view/edit/delete interactions as
//! inspectable actions. The CLI and the preview server drive the same
//! two renderers the tests do.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod render;
pub mod server;
pub mod surface;

use anyhow::Result;
use std::path::Path;

/// The main Postview application
#[derive(Clone)]
pub struct Postview {
    /// View configuration
    pub config: config::ViewConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts data file or directory
    pub posts_path: std::path::PathBuf,
}

impl Postview {
    /// Create a new Postview instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("postview.yml");

        let config = if config_path.exists() {
            config::ViewConfig::load(&config_path)?
        } else {
            config::ViewConfig::default()
        };

        let posts_path = base_dir.join(&config.posts_file);

        Ok(Self {
            config,
            base_dir,
            posts_path,
        })
    }

    /// Load the post store from the configured posts path
    pub fn store(&self) -> Result<content::PostStore> {
        if self.posts_path.is_dir() {
            content::PostStore::load_dir(&self.posts_path)
        } else {
            content::PostStore::load_file(&self.posts_path)
        }
    }

    /// Render the feed page for a viewer
    pub fn feed(&self, viewer: &str) -> Result<String> {
        commands::feed::run(self, viewer)
    }

    /// Render a single post page
    pub fn post(&self, id: &str) -> Result<String> {
        commands::post::run(self, id)
    }

    /// Print the post inventory
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
