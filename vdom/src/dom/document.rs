use std::collections::BTreeMap;

use super::{LiveId, Mutation};
use crate::event::{Callback, Event};
use crate::target::RenderTarget;
use crate::text::{escape_attr, escape_text};

#[derive(Debug, Clone)]
enum LiveData {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        listeners: Vec<(String, Callback)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct LiveNode {
    data: LiveData,
    parent: Option<LiveId>,
    children: Vec<LiveId>,
}

/// In-memory live document.
///
/// Nodes live in an arena and are never freed; detached nodes simply have no
/// parent. Every mutation made through [`RenderTarget`] is appended to a
/// journal which callers can inspect or drain.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<LiveNode>,
    root: LiveId,
    journal: Vec<Mutation>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with an empty `body` root.
    pub fn new() -> Self {
        Self::with_root("body")
    }

    pub fn with_root(tag: &str) -> Self {
        let root = LiveNode {
            data: LiveData::Element {
                tag: tag.to_string(),
                attributes: BTreeMap::new(),
                listeners: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: LiveId(0),
            journal: Vec::new(),
        }
    }

    pub fn root(&self) -> LiveId {
        self.root
    }

    /// Number of nodes ever created, including detached ones.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn tag(&self, node: LiveId) -> Option<&str> {
        match &self.node(node).data {
            LiveData::Element { tag, .. } => Some(tag),
            LiveData::Text(_) => None,
        }
    }

    /// Payload of a text node.
    pub fn text(&self, node: LiveId) -> Option<&str> {
        match &self.node(node).data {
            LiveData::Element { .. } => None,
            LiveData::Text(text) => Some(text),
        }
    }

    pub fn is_text(&self, node: LiveId) -> bool {
        matches!(self.node(node).data, LiveData::Text(_))
    }

    pub fn attributes(&self, node: LiveId) -> Vec<(&str, &str)> {
        match &self.node(node).data {
            LiveData::Element { attributes, .. } => attributes
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
            LiveData::Text(_) => Vec::new(),
        }
    }

    pub fn children(&self, node: LiveId) -> &[LiveId] {
        &self.node(node).children
    }

    pub fn listener_count(&self, node: LiveId, event: &str) -> usize {
        match &self.node(node).data {
            LiveData::Element { listeners, .. } => {
                listeners.iter().filter(|(name, _)| name == event).count()
            }
            LiveData::Text(_) => 0,
        }
    }

    /// Invoke every listener registered on `node` for `event`, in
    /// registration order. Returns how many ran. Events do not bubble.
    pub fn dispatch(&self, node: LiveId, event: impl Into<Event>) -> usize {
        let event = event.into();
        let callbacks: Vec<Callback> = match &self.node(node).data {
            LiveData::Element { listeners, .. } => listeners
                .iter()
                .filter(|(name, _)| *name == event.name)
                .map(|(_, cb)| cb.clone())
                .collect(),
            LiveData::Text(_) => Vec::new(),
        };

        for callback in &callbacks {
            callback.call(&event);
        }
        callbacks.len()
    }

    /// Concatenated text of all text nodes under `node`.
    pub fn text_content(&self, node: LiveId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: LiveId, out: &mut String) {
        match &self.node(node).data {
            LiveData::Text(text) => out.push_str(text),
            LiveData::Element { .. } => {
                for &child in &self.node(node).children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Serialize `node` and its subtree as HTML. Attributes are sorted by
    /// name; listeners are not serialized.
    pub fn to_html(&self, node: LiveId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serialize only the children of `node`.
    pub fn inner_html(&self, node: LiveId) -> String {
        let mut out = String::new();
        for &child in &self.node(node).children {
            self.write_html(child, &mut out);
        }
        out
    }

    fn write_html(&self, node: LiveId, out: &mut String) {
        match &self.node(node).data {
            LiveData::Text(text) => out.push_str(&escape_text(text)),
            LiveData::Element {
                tag, attributes, ..
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
                }
                out.push('>');
                for &child in &self.node(node).children {
                    self.write_html(child, out);
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
    }

    pub fn journal(&self) -> &[Mutation] {
        &self.journal
    }

    /// Drain the journal, e.g. between a mount and the patch under test.
    pub fn take_journal(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    fn node(&self, id: LiveId) -> &LiveNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: LiveId) -> &mut LiveNode {
        &mut self.nodes[id.0]
    }

    fn alloc(&mut self, data: LiveData) -> LiveId {
        let id = LiveId(self.nodes.len());
        self.nodes.push(LiveNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn record(&mut self, mutation: Mutation) {
        log::trace!("[dom] {mutation:?}");
        self.journal.push(mutation);
    }

    /// Remove `child` from its current parent's child list, if any.
    fn detach(&mut self, child: LiveId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != child);
        }
    }
}

impl RenderTarget for Document {
    type Node = LiveId;

    fn create_element(&mut self, tag: &str) -> LiveId {
        let node = self.alloc(LiveData::Element {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            listeners: Vec::new(),
        });
        self.record(Mutation::CreateElement {
            node,
            tag: tag.to_string(),
        });
        node
    }

    fn create_text(&mut self, text: &str) -> LiveId {
        let node = self.alloc(LiveData::Text(text.to_string()));
        self.record(Mutation::CreateText {
            node,
            text: text.to_string(),
        });
        node
    }

    fn attribute(&self, node: LiveId, name: &str) -> Option<String> {
        match &self.node(node).data {
            LiveData::Element { attributes, .. } => attributes.get(name).cloned(),
            LiveData::Text(_) => None,
        }
    }

    fn set_attribute(&mut self, node: LiveId, name: &str, value: &str) {
        if let LiveData::Element { attributes, .. } = &mut self.node_mut(node).data {
            attributes.insert(name.to_string(), value.to_string());
        }
        self.record(Mutation::SetAttribute {
            node,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn remove_attribute(&mut self, node: LiveId, name: &str) {
        if let LiveData::Element { attributes, .. } = &mut self.node_mut(node).data {
            attributes.remove(name);
        }
        self.record(Mutation::RemoveAttribute {
            node,
            name: name.to_string(),
        });
    }

    fn add_listener(&mut self, node: LiveId, event: &str, callback: Callback) {
        if let LiveData::Element { listeners, .. } = &mut self.node_mut(node).data {
            // same callback for the same event registers once
            if !listeners
                .iter()
                .any(|(name, cb)| name == event && cb.ptr_eq(&callback))
            {
                listeners.push((event.to_string(), callback));
            }
        }
        self.record(Mutation::AddListener {
            node,
            event: event.to_string(),
        });
    }

    fn remove_listener(&mut self, node: LiveId, event: &str, callback: &Callback) {
        if let LiveData::Element { listeners, .. } = &mut self.node_mut(node).data {
            listeners.retain(|(name, cb)| !(name == event && cb.ptr_eq(callback)));
        }
        self.record(Mutation::RemoveListener {
            node,
            event: event.to_string(),
        });
    }

    fn append_child(&mut self, parent: LiveId, child: LiveId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        self.record(Mutation::AppendChild { parent, child });
    }

    fn insert_child(&mut self, parent: LiveId, index: usize, child: LiveId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(index, child);
        self.record(Mutation::InsertChild {
            parent,
            index,
            child,
        });
    }

    fn remove_child(&mut self, parent: LiveId, index: usize) -> LiveId {
        let child = self.node_mut(parent).children.remove(index);
        self.node_mut(child).parent = None;
        self.record(Mutation::RemoveChild {
            parent,
            index,
            child,
        });
        child
    }

    fn replace_child(&mut self, parent: LiveId, index: usize, child: LiveId) -> LiveId {
        let old = self.node(parent).children[index];
        if old == child {
            return old;
        }

        // Detaching an earlier sibling shifts `old` to the left.
        self.detach(child);
        let index = self
            .node(parent)
            .children
            .iter()
            .position(|&c| c == old)
            .unwrap_or(index);
        self.node_mut(parent).children[index] = child;
        self.node_mut(old).parent = None;
        self.node_mut(child).parent = Some(parent);
        self.record(Mutation::ReplaceChild {
            parent,
            index,
            old,
            new: child,
        });
        old
    }

    fn child(&self, parent: LiveId, index: usize) -> Option<LiveId> {
        self.node(parent).children.get(index).copied()
    }

    fn child_count(&self, parent: LiveId) -> usize {
        self.node(parent).children.len()
    }

    fn set_text(&mut self, node: LiveId, text: &str) {
        if let LiveData::Text(value) = &mut self.node_mut(node).data {
            *value = text.to_string();
        }
        self.record(Mutation::SetText {
            node,
            text: text.to_string(),
        });
    }

    fn parent(&self, node: LiveId) -> Option<LiveId> {
        self.node(node).parent
    }

    fn index_of(&self, parent: LiveId, child: LiveId) -> Option<usize> {
        self.node(parent).children.iter().position(|&c| c == child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_build_and_serialize() {
        let mut doc = Document::new();
        let root = doc.root();
        let div = doc.create_element("div");
        doc.set_attribute(div, "class", "a \"b\"");
        let text = doc.create_text("x < y");
        doc.append_child(div, text);
        doc.append_child(root, div);

        assert_eq!(
            doc.to_html(root),
            "<body><div class=\"a &quot;b&quot;\">x &lt; y</div></body>"
        );
        assert_eq!(doc.inner_html(root), "<div class=\"a &quot;b&quot;\">x &lt; y</div>");
        assert_eq!(doc.parent(text), Some(div));
        assert_eq!(doc.journal().len(), 5);
    }

    #[test]
    fn test_remove_and_replace_detach() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        let c = doc.create_element("c");
        doc.append_child(root, a);
        doc.append_child(root, b);

        let old = doc.replace_child(root, 0, c);
        assert_eq!(old, a);
        assert_eq!(doc.parent(a), None);
        assert_eq!(doc.children(root), &[c, b]);

        let removed = doc.remove_child(root, 1);
        assert_eq!(removed, b);
        assert_eq!(doc.children(root), &[c]);

        doc.insert_child(root, 0, a);
        assert_eq!(doc.children(root), &[a, c]);
        assert_eq!(doc.index_of(root, c), Some(1));
    }

    #[test]
    fn test_replace_with_attached_sibling() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        let c = doc.create_element("c");
        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.append_child(root, c);

        let old = doc.replace_child(root, 2, a);
        assert_eq!(old, c);
        assert_eq!(doc.parent(c), None);
        assert_eq!(doc.children(root), &[b, a]);
        assert!(matches!(
            doc.journal().last(),
            Some(Mutation::ReplaceChild { index: 1, .. })
        ));

        assert_eq!(doc.replace_child(root, 1, a), a);
        assert_eq!(doc.children(root), &[b, a]);
    }

    #[test]
    fn test_append_moves_attached_node() {
        let mut doc = Document::new();
        let root = doc.root();
        let list = doc.create_element("ul");
        let item = doc.create_element("li");
        doc.append_child(root, item);
        doc.append_child(root, list);
        doc.append_child(list, item);

        assert_eq!(doc.children(root), &[list]);
        assert_eq!(doc.children(list), &[item]);
    }

    #[test]
    fn test_listeners_dispatch_and_remove() {
        let mut doc = Document::new();
        let button = doc.create_element("button");
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let cb = Callback::new(move |_| counter.set(counter.get() + 1));

        doc.add_listener(button, "click", cb.clone());
        doc.add_listener(button, "click", cb.clone());
        assert_eq!(doc.listener_count(button, "click"), 1);

        assert_eq!(doc.dispatch(button, "click"), 1);
        assert_eq!(doc.dispatch(button, "input"), 0);
        assert_eq!(hits.get(), 1);

        doc.remove_listener(button, "click", &Callback::new(|_| {}));
        assert_eq!(doc.listener_count(button, "click"), 1);
        doc.remove_listener(button, "click", &cb);
        assert_eq!(doc.listener_count(button, "click"), 0);
    }

    #[test]
    fn test_text_content_and_take_journal() {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.create_element("p");
        let t1 = doc.create_text("Hello, ");
        let t2 = doc.create_text("world");
        doc.append_child(p, t1);
        doc.append_child(p, t2);
        doc.append_child(root, p);
        doc.set_text(t2, "there");

        assert_eq!(doc.text_content(root), "Hello, there");
        assert_eq!(doc.take_journal().len(), 7);
        assert!(doc.journal().is_empty());
    }
}
