use crate::node::{live_name, AttrValue, Node};
use crate::target::RenderTarget;

/// Create a live subtree for `node`. The result is detached; the caller
/// decides where it goes.
pub fn materialize<T: RenderTarget>(target: &mut T, node: &Node) -> T::Node {
    let live = create(target, node);
    log::debug!(
        "[render] materialized {} ({} nodes) as {:?}",
        node.label(),
        node.node_count(),
        live
    );
    live
}

fn create<T: RenderTarget>(target: &mut T, node: &Node) -> T::Node {
    match node {
        Node::Text(text) => {
            log::trace!("[render] text {:?}", text.value);
            target.create_text(&text.value)
        }
        Node::Element(el) => {
            log::trace!("[render] <{}>", el.tag);
            let live = target.create_element(&el.tag);
            for (name, value) in el.attributes.iter() {
                apply_attribute(target, live, name, value);
            }
            for child in &el.children {
                let child = create(target, child);
                target.append_child(live, child);
            }
            live
        }
    }
}

/// Write one attribute entry to a live element.
pub(crate) fn apply_attribute<T: RenderTarget>(
    target: &mut T,
    live: T::Node,
    name: &str,
    value: &AttrValue,
) {
    match value {
        AttrValue::Static(value) => target.set_attribute(live, live_name(name), value),
        AttrValue::Event(handler) => {
            target.add_listener(live, &handler.event, handler.callback.clone())
        }
    }
}

/// Undo [`apply_attribute`] for an entry.
pub(crate) fn clear_attribute<T: RenderTarget>(
    target: &mut T,
    live: T::Node,
    name: &str,
    value: &AttrValue,
) {
    match value {
        AttrValue::Static(_) => target.remove_attribute(live, live_name(name)),
        AttrValue::Event(handler) => {
            target.remove_listener(live, &handler.event, &handler.callback)
        }
    }
}
