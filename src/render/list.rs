//! Post list rendering

use crate::config::{MissingAuthorPolicy, ViewConfig};
use crate::content::Post;
use crate::helpers::{format_date, truncate, view_url};
use crate::surface::{Action, Surface};

use super::RenderError;

/// Render one summary card per post into the list container.
///
/// Cards appear in input order; no sorting or filtering happens here.
/// When the container is missing, the call logs one error and leaves the
/// surface untouched. Under the `reject` author policy the whole input
/// is validated first, so a failed call appends nothing.
pub fn render_post_list<S: Surface>(
    surface: &mut S,
    posts: &[Post],
    viewer_name: &str,
    config: &ViewConfig,
) -> Result<(), RenderError> {
    let Some(container) = surface.find_container(&config.list_container) else {
        tracing::error!("No container with the id '{}' found", config.list_container);
        return Ok(());
    };

    if config.missing_author == MissingAuthorPolicy::Reject {
        if let Some(post) = posts.iter().find(|p| p.author.is_none()) {
            return Err(RenderError::MissingAuthor(post.id.clone()));
        }
    }

    if config.clear_containers {
        surface.clear(container);
    }

    for post in posts {
        let author_name = post
            .author_name()
            .unwrap_or(&config.author_fallback)
            .to_string();

        tracing::debug!("Logged in user: {}, post author: {}", viewer_name, author_name);

        let card = surface.create_element("div");
        surface.set_class(card, "post-card");

        if let Some(media) = &post.media {
            let image = surface.create_element("img");
            surface.set_class(image, "post-image");
            surface.set_attr(image, "src", &media.url);
            surface.set_attr(image, "alt", media.alt.as_deref().unwrap_or(&media.url));
            surface.append(card, image);
        }

        let title = surface.create_element("h2");
        surface.set_class(title, "post-title");
        surface.set_text(title, &post.title);
        surface.append(card, title);

        let author = surface.create_element("p");
        surface.set_class(author, "post-author");
        surface.set_text(author, &author_name);
        surface.append(card, author);

        let body = surface.create_element("p");
        surface.set_class(body, "post-body");
        surface.set_text(body, &truncate(&post.body, config.excerpt_length, None));
        surface.append(card, body);

        let tags = surface.create_element("p");
        surface.set_class(tags, "post-tags");
        surface.set_text(tags, &post.tag_line());
        surface.append(card, tags);

        let date = surface.create_element("p");
        surface.set_class(date, "post-date");
        surface.set_text(date, &format_date(&post.created, &config.date_format));
        surface.append(card, date);

        let view = surface.create_element("button");
        surface.set_class(view, "view-post-button");
        surface.set_text(view, "View Post");
        surface.set_action(view, view_action(config, &post.id));
        surface.append(card, view);

        surface.append(container, card);
    }

    Ok(())
}

/// The "View Post" behavior: persist the serialized post id under the
/// session storage key, then redirect to the detail page.
fn view_action(config: &ViewConfig, id: &str) -> Action {
    Action::StoreAndNavigate {
        key: config.storage_key.clone(),
        value: serde_json::Value::String(id.to_string()).to_string(),
        url: view_url(config, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, Media};
    use crate::surface::MemorySurface;
    use chrono::{TimeZone, Utc};

    fn post(id: &str, title: &str) -> Post {
        let mut post = Post::new(id, title, "body text");
        post.author = Some(Author::named("Ada"));
        post.created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        post
    }

    fn surface_with_container() -> (MemorySurface, crate::surface::NodeId) {
        let mut surface = MemorySurface::new();
        let container = surface.add_container("postsContainer");
        (surface, container)
    }

    #[test]
    fn test_one_card_per_post_in_input_order() {
        let (mut surface, container) = surface_with_container();
        let posts = vec![post("1", "First"), post("2", "Second"), post("3", "Third")];

        render_post_list(&mut surface, &posts, "viewer", &ViewConfig::default()).unwrap();

        let cards = surface.element_children(container);
        assert_eq!(cards.len(), 3);

        let titles: Vec<_> = cards
            .iter()
            .map(|card| {
                let title = surface.element_children(*card)[0];
                surface.node(title).text.clone()
            })
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_author_renders_fallback() {
        let (mut surface, container) = surface_with_container();
        let mut anonymous = post("1", "No author");
        anonymous.author = None;

        render_post_list(&mut surface, &[anonymous], "viewer", &ViewConfig::default()).unwrap();

        let card = surface.element_children(container)[0];
        let author = surface.element_children(card)[1];
        assert_eq!(surface.node(author).text, "Unknown Author");
    }

    #[test]
    fn test_tags_joined_and_absent_tags_empty() {
        let (mut surface, container) = surface_with_container();
        let mut tagged = post("1", "Tagged");
        tagged.tags = vec!["a".to_string(), "b".to_string()];
        let untagged = post("2", "Untagged");

        render_post_list(
            &mut surface,
            &[tagged, untagged],
            "viewer",
            &ViewConfig::default(),
        )
        .unwrap();

        let cards = surface.element_children(container);
        let tag_text = |card| {
            let tags = surface.element_children(card)[3];
            surface.node(tags).text.clone()
        };
        assert_eq!(tag_text(cards[0]), "a, b");
        assert_eq!(tag_text(cards[1]), "");
    }

    #[test]
    fn test_media_renders_image_with_url_as_src_and_alt() {
        let (mut surface, container) = surface_with_container();
        let mut with_media = post("1", "Pic");
        with_media.media = Some(Media {
            url: "http://x/y.png".to_string(),
            alt: None,
        });
        let without_media = post("2", "No pic");

        render_post_list(
            &mut surface,
            &[with_media, without_media],
            "viewer",
            &ViewConfig::default(),
        )
        .unwrap();

        let cards = surface.element_children(container);

        let image = surface.element_children(cards[0])[0];
        assert_eq!(surface.node(image).tag, "img");
        assert_eq!(
            surface.node(image).attrs.get("src").map(String::as_str),
            Some("http://x/y.png")
        );
        assert_eq!(
            surface.node(image).attrs.get("alt").map(String::as_str),
            Some("http://x/y.png")
        );

        // Without media, the first child is the title and no img exists
        let children = surface.element_children(cards[1]);
        assert!(children.iter().all(|c| surface.node(*c).tag != "img"));
    }

    #[test]
    fn test_view_button_stores_id_and_navigates() {
        let (mut surface, container) = surface_with_container();

        render_post_list(
            &mut surface,
            &[post("42", "Target")],
            "viewer",
            &ViewConfig::default(),
        )
        .unwrap();

        let card = surface.element_children(container)[0];
        let button = *surface.element_children(card).last().unwrap();
        assert_eq!(surface.node(button).text, "View Post");

        surface.activate(button);
        assert_eq!(surface.stored("postId"), Some("\"42\""));
        assert_eq!(surface.location(), Some("/post/?id=42"));
    }

    #[test]
    fn test_date_is_localized() {
        let (mut surface, container) = surface_with_container();

        render_post_list(
            &mut surface,
            &[post("1", "Dated")],
            "viewer",
            &ViewConfig::default(),
        )
        .unwrap();

        let card = surface.element_children(container)[0];
        let date = surface.element_children(card)[4];
        assert_eq!(surface.node(date).text, "01/15/2024");
    }

    #[test]
    fn test_missing_container_mutates_nothing() {
        let mut surface = MemorySurface::new();
        let before = surface.node_count();

        let result = render_post_list(
            &mut surface,
            &[post("1", "Lost")],
            "viewer",
            &ViewConfig::default(),
        );

        assert!(result.is_ok());
        assert_eq!(surface.node_count(), before);
    }

    #[test]
    fn test_append_only_by_default() {
        let (mut surface, container) = surface_with_container();
        let posts = vec![post("1", "One")];
        let config = ViewConfig::default();

        render_post_list(&mut surface, &posts, "viewer", &config).unwrap();
        render_post_list(&mut surface, &posts, "viewer", &config).unwrap();

        assert_eq!(surface.element_children(container).len(), 2);
    }

    #[test]
    fn test_clear_containers_makes_rerender_idempotent() {
        let (mut surface, container) = surface_with_container();
        let posts = vec![post("1", "One"), post("2", "Two")];
        let mut config = ViewConfig::default();
        config.clear_containers = true;

        render_post_list(&mut surface, &posts, "viewer", &config).unwrap();
        render_post_list(&mut surface, &posts, "viewer", &config).unwrap();

        assert_eq!(surface.element_children(container).len(), 2);
    }

    #[test]
    fn test_reject_policy_fails_without_partial_output() {
        let (mut surface, container) = surface_with_container();
        let mut anonymous = post("2", "No author");
        anonymous.author = None;
        let posts = vec![post("1", "Fine"), anonymous];

        let mut config = ViewConfig::default();
        config.missing_author = MissingAuthorPolicy::Reject;

        let result = render_post_list(&mut surface, &posts, "viewer", &config);
        assert!(matches!(result, Err(RenderError::MissingAuthor(ref id)) if id == "2"));
        assert!(surface.element_children(container).is_empty());
    }

    #[test]
    fn test_empty_input_renders_no_cards() {
        let (mut surface, container) = surface_with_container();
        render_post_list(&mut surface, &[], "viewer", &ViewConfig::default()).unwrap();
        assert!(surface.element_children(container).is_empty());
    }
}
