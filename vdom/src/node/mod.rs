mod attr;
mod child;
mod edit;
mod node;
mod print;

pub use attr::{live_name, AttrValue, Attributes, EventHandler, CLASS_ALIAS};
pub use child::Child;
pub use edit::Update;
pub use node::{Element, Identity, Kind, Node, Text};

use crate::config::Config;

/// Build an element node from a tag, its attributes and a (possibly nested)
/// child list. Nested lists are flattened, `None` entries dropped and plain
/// values wrapped with [`text_node`].
pub fn build(tag: impl Into<String>, attributes: Attributes, children: impl Into<Child>) -> Node {
    let mut flat = Vec::new();
    children.into().flatten_into(&mut flat, &mut |_| {});
    Node::Element(Element {
        tag: tag.into(),
        attributes,
        children: flat,
        identity: None,
    })
}

/// Wrap a value as a text node.
pub fn text_node(value: impl ToString) -> Node {
    Node::text(value.to_string())
}

/// Tree builder carrying a [`Config`].
///
/// With identity tracking enabled every node it creates, including text
/// nodes wrapped from plain child values, gets a fresh [`Identity`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// A builder that assigns identities.
    pub fn tracked() -> Self {
        Self::new(Config::default().track_identity(true))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn build(&self, tag: impl Into<String>, attributes: Attributes, children: impl Into<Child>) -> Node {
        let track = self.config.track_identity;
        let mut flat = Vec::new();
        children.into().flatten_into(&mut flat, &mut |node| {
            if track {
                node.set_identity(Some(Identity::new()));
            }
        });
        let node = Node::Element(Element {
            tag: tag.into(),
            attributes,
            children: flat,
            identity: None,
        });
        self.assign(node)
    }

    pub fn text(&self, value: impl ToString) -> Node {
        self.assign(text_node(value))
    }

    fn assign(&self, node: Node) -> Node {
        if self.config.track_identity {
            node.with_identity(Identity::new())
        } else {
            node
        }
    }
}

impl Node {
    /// Find the node carrying `identity` in this subtree (depth first).
    pub fn find(&self, identity: Identity) -> Option<&Node> {
        if self.identity() == Some(identity) {
            return Some(self);
        }

        self.children().iter().find_map(|child| child.find(identity))
    }

    /// All identities in this subtree, in document order.
    pub fn identities(&self) -> Vec<Identity> {
        let mut out = Vec::new();
        collect_identities(self, &mut out);
        out
    }
}

fn collect_identities(node: &Node, out: &mut Vec<Identity>) {
    if let Some(id) = node.identity() {
        out.push(id);
    }
    for child in node.children() {
        collect_identities(child, out);
    }
}
