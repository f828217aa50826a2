//! The two rendering entry points: post list and post detail
//!
//! Both renderers are synchronous, stateless and run to completion once
//! invoked. They construct elements on an injected [`Surface`] and never
//! fetch data themselves; the detail page's asynchronous bootstrap is
//! the thin [`bootstrap_detail`] wrapper around an external fetch.

mod detail;
mod list;

pub use detail::render_post_detail;
pub use list::render_post_list;

use anyhow::Result;
use std::future::Future;
use thiserror::Error;

use crate::config::ViewConfig;
use crate::content::Post;
use crate::surface::Surface;

/// Errors a renderer can report.
///
/// A missing container is not among them: that case is logged and the
/// call returns without side effects.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The post has no author and the configured policy is `reject`
    #[error("post '{0}' has no author")]
    MissingAuthor(String),
}

/// Detail page bootstrap: await the external post fetch, then hand the
/// record to the synchronous detail renderer.
pub async fn bootstrap_detail<S, F>(surface: &mut S, fetch: F, config: &ViewConfig) -> Result<()>
where
    S: Surface,
    F: Future<Output = Result<Post>>,
{
    let post = fetch.await?;
    render_post_detail(surface, &post, config)?;
    Ok(())
}
