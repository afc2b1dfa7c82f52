//! Identity-addressed edits. Every edit returns a new tree and leaves the
//! receiver untouched, so a reconcile always compares two snapshots.

use super::attr::{AttrValue, CLASS_ALIAS};
use super::child::Child;
use super::node::{Identity, Node};

/// Replacement text and/or class for a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub text: Option<String>,
    pub class: Option<String>,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Node {
    /// Copy of this tree with `child` appended to the root's children.
    pub fn with_child(&self, child: impl Into<Child>) -> Node {
        self.clone().child(child)
    }

    /// Copy of this tree with `update` applied to the node carrying
    /// `identity`. Returns an unchanged copy when no node matches.
    ///
    /// On a text node the text is replaced. On an element the first text
    /// child is rewritten (or a text child appended) and a non-empty class
    /// replaces the current one. Empty strings leave the field alone.
    pub fn with_update(&self, identity: Identity, update: &Update) -> Node {
        let mut tree = self.clone();
        if let Some(node) = find_mut(&mut tree, identity) {
            apply_update(node, update);
        }
        tree
    }

    /// Copy of this tree without the descendant carrying `identity`.
    /// The root itself is never removed.
    pub fn without(&self, identity: Identity) -> Node {
        let mut tree = self.clone();
        remove_descendant(&mut tree, identity);
        tree
    }
}

fn find_mut(node: &mut Node, identity: Identity) -> Option<&mut Node> {
    if node.identity() == Some(identity) {
        return Some(node);
    }

    match node {
        Node::Element(el) => el
            .children
            .iter_mut()
            .find_map(|child| find_mut(child, identity)),
        Node::Text(_) => None,
    }
}

fn apply_update(node: &mut Node, update: &Update) {
    let text = update.text.as_deref().filter(|t| !t.is_empty());
    let class = update.class.as_deref().filter(|c| !c.is_empty());

    match node {
        Node::Text(leaf) => {
            if let Some(text) = text {
                leaf.value = text.to_string();
            }
        }
        Node::Element(el) => {
            if let Some(text) = text {
                match el.children.iter_mut().find(|c| c.is_text()) {
                    Some(Node::Text(leaf)) => leaf.value = text.to_string(),
                    _ => {
                        // Keep tracking consistent with the rest of the tree.
                        let mut leaf = Node::text(text);
                        if el.identity.is_some() {
                            leaf.set_identity(Some(Identity::new()));
                        }
                        el.children.push(leaf);
                    }
                }
            }

            if let Some(class) = class {
                let key = if el.attributes.contains("class") {
                    "class"
                } else {
                    CLASS_ALIAS
                };
                el.attributes
                    .insert(key, AttrValue::Static(class.to_string()));
            }
        }
    }
}

fn remove_descendant(node: &mut Node, identity: Identity) -> bool {
    let Node::Element(el) = node else {
        return false;
    };

    if let Some(pos) = el
        .children
        .iter()
        .position(|child| child.identity() == Some(identity))
    {
        el.children.remove(pos);
        return true;
    }

    el.children
        .iter_mut()
        .any(|child| remove_descendant(child, identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Attributes, Builder};

    fn sample() -> (Builder, Node) {
        let b = Builder::tracked();
        let tree = b.build(
            "div",
            Attributes::new().set("id", "app-root"),
            vec![
                b.build("p", Attributes::new().set("className", "note"), "hello"),
                b.build("span", Attributes::new(), Vec::<Node>::new()),
            ],
        );
        (b, tree)
    }

    #[test]
    fn test_with_child_leaves_source_untouched() {
        let (b, tree) = sample();
        let next = tree.with_child(b.build("h2", Attributes::new(), "new"));
        assert_eq!(tree.children().len(), 2);
        assert_eq!(next.children().len(), 3);
        assert_eq!(next.children()[2].tag(), Some("h2"));
    }

    #[test]
    fn test_update_element_text_and_class() {
        let (_, tree) = sample();
        let p = tree.children()[0].identity().unwrap();

        let next = tree.with_update(p, &Update::new().text("bye").class("warn"));
        let updated = next.find(p).unwrap();
        assert_eq!(updated.children()[0].text_value(), Some("bye"));
        assert_eq!(updated.attributes().unwrap().class(), Some("warn"));

        // source unchanged
        let original = tree.find(p).unwrap();
        assert_eq!(original.children()[0].text_value(), Some("hello"));
        assert_eq!(original.attributes().unwrap().class(), Some("note"));
    }

    #[test]
    fn test_update_appends_text_child_when_missing() {
        let (_, tree) = sample();
        let span = tree.children()[1].identity().unwrap();

        let next = tree.with_update(span, &Update::new().text("filled"));
        let updated = next.find(span).unwrap();
        assert_eq!(updated.children().len(), 1);
        assert_eq!(updated.children()[0].text_value(), Some("filled"));
        assert!(updated.children()[0].identity().is_some());
    }

    #[test]
    fn test_update_text_node_and_empty_fields() {
        let (_, tree) = sample();
        let leaf = tree.children()[0].children()[0].identity().unwrap();

        let next = tree.with_update(leaf, &Update::new().text(""));
        assert_eq!(next, tree);

        let next = tree.with_update(leaf, &Update::new().text("changed"));
        assert_eq!(next.find(leaf).unwrap().text_value(), Some("changed"));
    }

    #[test]
    fn test_without_removes_descendant_only() {
        let (_, tree) = sample();
        let leaf = tree.children()[0].children()[0].identity().unwrap();
        let root = tree.identity().unwrap();

        let next = tree.without(leaf);
        assert!(next.find(leaf).is_none());
        assert!(next.children()[0].children().is_empty());

        assert_eq!(tree.without(root), tree);
    }
}
