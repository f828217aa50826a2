//! Render a single post page

use anyhow::{Context, Result};

use crate::helpers::wrap_page;
use crate::render::render_post_detail;
use crate::surface::MemorySurface;
use crate::Postview;

/// Render the detail page for a post id into a complete HTML page
pub fn run(app: &Postview, id: &str) -> Result<String> {
    let store = app.store()?;
    let post = store
        .find(id)
        .with_context(|| format!("no post with id '{}'", id))?;

    let mut surface = MemorySurface::new();
    let container = surface.add_container(&app.config.detail_container);

    render_post_detail(&mut surface, post, &app.config)?;

    Ok(wrap_page(
        &app.config,
        &post.title,
        &surface.to_html(container),
    ))
}
