//! Rendering surface abstraction
//!
//! The renderers never touch a real DOM. Container lookup, element
//! construction, navigation and durable per-session storage are all
//! operations of the [`Surface`] capability, so a renderer is a pure
//! function over whatever surface it is handed. [`MemorySurface`] is the
//! built-in implementation backing the CLI, the preview server and the
//! tests.

mod memory;

pub use memory::{Child, MemorySurface, Node};

/// Handle to a node owned by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Behavior attached to a control, dispatched when the control is
/// activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Redirect the browsing surface to a URL
    Navigate { url: String },

    /// Persist a serialized value into per-session storage, then redirect
    StoreAndNavigate {
        key: String,
        value: String,
        url: String,
    },

    /// Invoke the externally supplied delete handler with no arguments
    InvokeDelete,
}

/// The capability the renderers require from their display medium
pub trait Surface {
    /// Look up a pre-existing container by its well-known id
    fn find_container(&self, id: &str) -> Option<NodeId>;

    /// Create a new detached element
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Set the text content of an element
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Set the class list of an element
    fn set_class(&mut self, node: NodeId, class: &str);

    /// Set an attribute on an element
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);

    /// Attach an action to an element
    fn set_action(&mut self, node: NodeId, action: Action);

    /// Append a child element to a parent
    fn append(&mut self, parent: NodeId, child: NodeId);

    /// Append a bare text node to a parent
    fn append_text(&mut self, parent: NodeId, text: &str);

    /// Remove all children from a node
    fn clear(&mut self, node: NodeId);

    /// Redirect the browsing surface to a URL
    fn navigate(&mut self, url: &str);

    /// Write a value into durable per-session storage
    fn persist(&mut self, key: &str, value: &str);
}
