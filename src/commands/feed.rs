//! Render the post feed page

use anyhow::Result;

use crate::helpers::wrap_page;
use crate::render::render_post_list;
use crate::surface::MemorySurface;
use crate::Postview;

/// Render the feed for a viewer into a complete HTML page
pub fn run(app: &Postview, viewer: &str) -> Result<String> {
    let store = app.store()?;

    let mut surface = MemorySurface::new();
    let container = surface.add_container(&app.config.list_container);

    render_post_list(&mut surface, store.posts(), viewer, &app.config)?;
    tracing::info!("Rendered {} posts for {}", store.len(), viewer);

    Ok(wrap_page(
        &app.config,
        &app.config.title,
        &surface.to_html(container),
    ))
}
