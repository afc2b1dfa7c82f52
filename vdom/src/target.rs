//! The live render target a virtual tree is realized into.

use crate::event::Callback;

/// A host tree that the renderer and reconciler mutate.
///
/// Handles are cheap copies; the target owns the nodes. Index arguments are
/// positions in a parent's child list. Passing an index that does not exist
/// is a caller error; implementations may panic on it.
pub trait RenderTarget {
    type Node: Copy + Eq + std::fmt::Debug;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn create_text(&mut self, text: &str) -> Self::Node;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    fn add_listener(&mut self, node: Self::Node, event: &str, callback: Callback);

    /// Unregister `callback` for `event`. Callbacks match by identity.
    fn remove_listener(&mut self, node: Self::Node, event: &str, callback: &Callback);

    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    fn insert_child(&mut self, parent: Self::Node, index: usize, child: Self::Node);

    /// Detach and return the child at `index`.
    fn remove_child(&mut self, parent: Self::Node, index: usize) -> Self::Node;

    /// Put `child` at `index`, returning the detached previous occupant.
    /// An attached `child` is moved; the occupant is the node at `index`
    /// before the call.
    fn replace_child(&mut self, parent: Self::Node, index: usize, child: Self::Node) -> Self::Node;

    fn child(&self, parent: Self::Node, index: usize) -> Option<Self::Node>;

    fn child_count(&self, parent: Self::Node) -> usize;

    fn set_text(&mut self, node: Self::Node, text: &str);

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Position of `child` among `parent`'s children.
    fn index_of(&self, parent: Self::Node, child: Self::Node) -> Option<usize> {
        (0..self.child_count(parent)).find(|&i| self.child(parent, i) == Some(child))
    }
}
