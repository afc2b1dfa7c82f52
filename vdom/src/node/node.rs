use std::fmt;

use uuid::Uuid;

use super::attr::{AttrValue, Attributes};
use super::child::Child;
use crate::event::Callback;

/// Opaque token correlating a node across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(Uuid);

impl Identity {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Type discriminator used to decide between update and replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind<'a> {
    Element(&'a str),
    Text,
}

/// An element node: tag, attributes and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    pub identity: Option<Identity>,
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub identity: Option<Identity>,
}

/// One node of a virtual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    /// An empty element with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            identity: None,
        })
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text {
            value: value.into(),
            identity: None,
        })
    }

    pub fn kind(&self) -> Kind<'_> {
        match self {
            Self::Element(el) => Kind::Element(&el.tag),
            Self::Text(_) => Kind::Text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(el) => Some(&el.tag),
            Self::Text(_) => None,
        }
    }

    /// Text payload; only text nodes carry one.
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(&text.value),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Element(el) => Some(&el.attributes),
            Self::Text(_) => None,
        }
    }

    /// Children in order. Always empty for text nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(el) => &el.children,
            Self::Text(_) => &[],
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Element(el) => el.identity,
            Self::Text(text) => text.identity,
        }
    }

    pub fn set_identity(&mut self, identity: Option<Identity>) {
        match self {
            Self::Element(el) => el.identity = identity,
            Self::Text(text) => text.identity = identity,
        }
    }

    // Builder-style methods. They are no-ops on text nodes.

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.set_identity(Some(identity));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element(el) = &mut self {
            el.attributes.insert(name, AttrValue::Static(value.into()));
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn on(mut self, name: impl Into<String>, callback: impl Into<Callback>) -> Self {
        if let Self::Element(el) = &mut self {
            el.attributes = std::mem::take(&mut el.attributes).on(name, callback);
        }
        self
    }

    pub fn attributes_from(mut self, attributes: Attributes) -> Self {
        if let Self::Element(el) = &mut self {
            el.attributes = attributes;
        }
        self
    }

    /// Append a child, flattening lists and wrapping plain values as text.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        if let Self::Element(el) = &mut self {
            child.into().flatten_into(&mut el.children, &mut |_| {});
        }
        self
    }

    pub fn children_from<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}
