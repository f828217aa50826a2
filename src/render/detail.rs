//! Single-post detail rendering

use crate::config::{MissingAuthorPolicy, ViewConfig};
use crate::content::Post;
use crate::helpers::{edit_url, format_date};
use crate::surface::{Action, Surface};

use super::RenderError;

/// Render a full post with its action controls into the detail
/// container.
///
/// The body is not truncated. The author name and the formatted creation
/// date are appended as plain text, not wrapped in elements of their
/// own; the current layout leaves them unlabeled. Activating "Delete"
/// invokes the surface's external delete handler with no arguments;
/// activating "Edit" redirects to the edit page for the post.
pub fn render_post_detail<S: Surface>(
    surface: &mut S,
    post: &Post,
    config: &ViewConfig,
) -> Result<(), RenderError> {
    let Some(container) = surface.find_container(&config.detail_container) else {
        tracing::error!("No container with the id '{}' found", config.detail_container);
        return Ok(());
    };

    // Resolve the author before any element exists, so a rejection
    // leaves the surface untouched.
    let author_name = match post.author_name() {
        Some(name) => name.to_string(),
        None => match config.missing_author {
            MissingAuthorPolicy::Fallback => config.author_fallback.clone(),
            MissingAuthorPolicy::Reject => {
                return Err(RenderError::MissingAuthor(post.id.clone()))
            }
        },
    };

    if config.clear_containers {
        surface.clear(container);
    }

    let wrapper = surface.create_element("div");
    surface.set_class(wrapper, "post-detail");

    if let Some(media) = &post.media {
        let image = surface.create_element("img");
        surface.set_class(image, "post-image");
        surface.set_attr(image, "src", &media.url);
        surface.set_attr(image, "alt", media.alt.as_deref().unwrap_or(&media.url));
        surface.append(wrapper, image);
    }

    let title = surface.create_element("h2");
    surface.set_class(title, "post-title");
    surface.set_text(title, &post.title);
    surface.append(wrapper, title);

    let body = surface.create_element("p");
    surface.set_class(body, "post-body");
    surface.set_text(body, &post.body);
    surface.append(wrapper, body);

    surface.append_text(wrapper, &author_name);
    surface.append_text(wrapper, &format_date(&post.created, &config.date_format));

    let delete = surface.create_element("button");
    surface.set_class(delete, "delete-button");
    surface.set_text(delete, "Delete");
    surface.set_action(delete, Action::InvokeDelete);
    surface.append(wrapper, delete);

    let edit = surface.create_element("button");
    surface.set_class(edit, "edit-button");
    surface.set_text(edit, "Edit");
    surface.set_action(
        edit,
        Action::Navigate {
            url: edit_url(config, &post.id),
        },
    );
    surface.append(wrapper, edit);

    surface.append(container, wrapper);

    Ok(())
}
