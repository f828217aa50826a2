//! In-memory rendering surface with HTML projection

use indexmap::IndexMap;

use super::{Action, NodeId, Surface};
use crate::helpers::html_escape;

/// A child slot of a node: a nested element or bare text
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(NodeId),
    Text(String),
}

/// A single element node
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub tag: String,
    pub text: String,
    pub classes: Vec<String>,
    pub attrs: IndexMap<String, String>,
    pub action: Option<Action>,
    pub children: Vec<Child>,
}

/// DOM stand-in: an arena of nodes plus the browser-owned resources the
/// renderers touch (named containers, session storage, location)
#[derive(Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    containers: IndexMap<String, NodeId>,
    storage: IndexMap<String, String>,
    location: Option<String>,
    on_delete: Option<Box<dyn FnMut()>>,
}

impl MemorySurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container div with the given id and register it for
    /// lookup
    pub fn add_container(&mut self, id: &str) -> NodeId {
        let node = self.create_element("div");
        self.set_attr(node, "id", id);
        self.containers.insert(id.to_string(), node);
        node
    }

    /// Register the external delete handler
    pub fn on_delete<F: FnMut() + 'static>(&mut self, handler: F) {
        self.on_delete = Some(Box::new(handler));
    }

    /// Dispatch the action attached to a node, as a user activating the
    /// control would
    pub fn activate(&mut self, node: NodeId) {
        let Some(action) = self.nodes[node.0].action.clone() else {
            return;
        };

        match action {
            Action::Navigate { url } => self.navigate(&url),
            Action::StoreAndNavigate { key, value, url } => {
                // Storage write happens before the redirect
                self.persist(&key, &value);
                self.navigate(&url);
            }
            Action::InvokeDelete => match self.on_delete.as_mut() {
                Some(handler) => handler(),
                None => tracing::warn!("Delete activated but no delete handler is registered"),
            },
        }
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes the surface owns
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Child element ids of a node, skipping bare text
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Element(id) => Some(*id),
                Child::Text(_) => None,
            })
            .collect()
    }

    /// Value stored under a session storage key
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(|v| v.as_str())
    }

    /// Current location, if any navigation happened
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Project a node subtree to HTML text
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];

        out.push('<');
        out.push_str(&node.tag);

        if !node.classes.is_empty() {
            out.push_str(&format!(
                r#" class="{}""#,
                html_escape(&node.classes.join(" "))
            ));
        }

        for (name, value) in &node.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
        }

        if let Some(action) = &node.action {
            out.push_str(&format!(
                r#" onclick="{}""#,
                html_escape(&onclick_js(action))
            ));
        }

        out.push('>');

        if is_void_tag(&node.tag) {
            return;
        }

        if !node.text.is_empty() {
            out.push_str(&html_escape(&node.text));
        }

        for child in &node.children {
            match child {
                Child::Element(id) => self.write_html(*id, out),
                Child::Text(text) => out.push_str(&html_escape(text)),
            }
        }

        out.push_str(&format!("</{}>", node.tag));
    }
}

impl Surface for MemorySurface {
    fn find_container(&self, id: &str) -> Option<NodeId> {
        self.containers.get(id).copied()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }

    fn set_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes = class.split_whitespace().map(String::from).collect();
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn set_action(&mut self, node: NodeId, action: Action) {
        self.nodes[node.0].action = Some(action);
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(Child::Element(child));
    }

    fn append_text(&mut self, parent: NodeId, text: &str) {
        self.nodes[parent.0].children.push(Child::Text(text.to_string()));
    }

    fn clear(&mut self, node: NodeId) {
        self.nodes[node.0].children.clear();
    }

    fn navigate(&mut self, url: &str) {
        tracing::debug!("Navigating to {}", url);
        self.location = Some(url.to_string());
    }

    fn persist(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_string(), value.to_string());
    }
}

/// Inline handler a control's action projects to in HTML output
fn onclick_js(action: &Action) -> String {
    match action {
        Action::Navigate { url } => {
            format!("window.location.href='{}'", escape_js(url))
        }
        Action::StoreAndNavigate { key, value, url } => format!(
            "localStorage.setItem('{}', '{}');window.location.href='{}'",
            escape_js(key),
            escape_js(value),
            escape_js(url)
        ),
        // The embedding page supplies the handler
        Action::InvokeDelete => "onDeletePost()".to_string(),
    }
}

/// Escape a value for a single-quoted JavaScript string literal
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Tags that never carry children or a closing tag
fn is_void_tag(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_container_lookup() {
        let mut surface = MemorySurface::new();
        let container = surface.add_container("postsContainer");
        assert_eq!(surface.find_container("postsContainer"), Some(container));
        assert_eq!(surface.find_container("missing"), None);
    }

    #[test]
    fn test_append_and_clear() {
        let mut surface = MemorySurface::new();
        let parent = surface.create_element("div");
        let child = surface.create_element("p");
        surface.append(parent, child);
        surface.append_text(parent, "plain");
        assert_eq!(surface.node(parent).children.len(), 2);

        surface.clear(parent);
        assert!(surface.node(parent).children.is_empty());
    }

    #[test]
    fn test_activate_store_and_navigate() {
        let mut surface = MemorySurface::new();
        let button = surface.create_element("button");
        surface.set_action(
            button,
            Action::StoreAndNavigate {
                key: "postId".to_string(),
                value: "\"42\"".to_string(),
                url: "/post/?id=42".to_string(),
            },
        );

        surface.activate(button);
        assert_eq!(surface.stored("postId"), Some("\"42\""));
        assert_eq!(surface.location(), Some("/post/?id=42"));
    }

    #[test]
    fn test_activate_delete_invokes_handler() {
        let mut surface = MemorySurface::new();
        let deleted = Rc::new(Cell::new(false));
        let flag = deleted.clone();
        surface.on_delete(move || flag.set(true));

        let button = surface.create_element("button");
        surface.set_action(button, Action::InvokeDelete);
        surface.activate(button);
        assert!(deleted.get());
    }

    #[test]
    fn test_activate_without_action_is_noop() {
        let mut surface = MemorySurface::new();
        let node = surface.create_element("p");
        surface.activate(node);
        assert!(surface.location().is_none());
    }

    #[test]
    fn test_to_html_escapes_text_and_attrs() {
        let mut surface = MemorySurface::new();
        let p = surface.create_element("p");
        surface.set_class(p, "post-body");
        surface.set_text(p, "a < b & \"c\"");
        assert_eq!(
            surface.to_html(p),
            r#"<p class="post-body">a &lt; b &amp; &quot;c&quot;</p>"#
        );
    }

    #[test]
    fn test_to_html_void_tag_and_onclick() {
        let mut surface = MemorySurface::new();
        let img = surface.create_element("img");
        surface.set_attr(img, "src", "http://x/y.png");
        assert_eq!(surface.to_html(img), r#"<img src="http://x/y.png">"#);

        let button = surface.create_element("button");
        surface.set_text(button, "Go");
        surface.set_action(
            button,
            Action::Navigate {
                url: "/post/?id=1".to_string(),
            },
        );
        let html = surface.to_html(button);
        assert!(html.contains("onclick=\"window.location.href=&#39;/post/?id=1&#39;\""));
    }
}
