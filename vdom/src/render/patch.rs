use super::materialize::{apply_attribute, clear_attribute, materialize};
use crate::node::{live_name, AttrValue, Attributes, Node};
use crate::target::RenderTarget;

/// Bring the live child of `parent` at `index` from `old` to `new`.
///
/// Rules, first match wins:
/// 1. only `new`: materialize it and append to `parent` (never inserted at
///    `index`);
/// 2. only `old`: remove the child at `index`;
/// 3. different kind or tag: materialize `new` and replace the child;
/// 4. same element tag: diff attributes, then patch children by position;
/// 5. both text: rewrite the text when it differs.
///
/// Rules 4 and 5 keep the live node. Children are matched by index only, so
/// a reorder or a removal before the tail cascades into the following
/// positions.
///
/// A missing live child at `index` means the live tree no longer matches
/// `old`; it is logged and the call does nothing.
pub fn patch<T: RenderTarget>(
    target: &mut T,
    parent: T::Node,
    new: Option<&Node>,
    old: Option<&Node>,
    index: usize,
) {
    let (new, old) = match (new, old) {
        (None, None) => return,
        (Some(new), None) => {
            let live = materialize(target, new);
            target.append_child(parent, live);
            log::debug!("[patch] append {} to {:?}", new.label(), parent);
            return;
        }
        (None, Some(old)) => {
            if index >= target.child_count(parent) {
                log::error!("[patch] no live child {} under {:?} to remove", index, parent);
                return;
            }
            target.remove_child(parent, index);
            log::debug!("[patch] remove {} at {} from {:?}", old.label(), index, parent);
            return;
        }
        (Some(new), Some(old)) => (new, old),
    };

    let Some(live) = target.child(parent, index) else {
        log::error!("[patch] no live child {} under {:?} for {}", index, parent, old.label());
        return;
    };

    match (new, old) {
        (Node::Element(new_el), Node::Element(old_el)) if new_el.tag == old_el.tag => {
            diff_attributes(target, live, &new_el.attributes, &old_el.attributes);
            patch_children(target, live, &new_el.children, &old_el.children);
        }
        (Node::Text(new_text), Node::Text(old_text)) => {
            if new_text.value != old_text.value {
                target.set_text(live, &new_text.value);
                log::debug!(
                    "[patch] text {:?} -> {:?} at {}",
                    old_text.value,
                    new_text.value,
                    index
                );
            }
        }
        _ => {
            let fresh = materialize(target, new);
            target.replace_child(parent, index, fresh);
            log::debug!("[patch] replace {} with {} at {}", old.label(), new.label(), index);
        }
    }
}

fn diff_attributes<T: RenderTarget>(
    target: &mut T,
    live: T::Node,
    new: &Attributes,
    old: &Attributes,
) {
    for (name, value) in new.iter() {
        let previous = old.get(name);
        if previous == Some(value) {
            continue;
        }

        // Drop the old binding first so a callback is never registered twice.
        match (previous, value) {
            (Some(AttrValue::Event(handler)), _) => {
                target.remove_listener(live, &handler.event, &handler.callback)
            }
            (Some(AttrValue::Static(_)), AttrValue::Event(_)) => {
                target.remove_attribute(live, live_name(name))
            }
            _ => {}
        }

        apply_attribute(target, live, name, value);
        log::debug!("[patch] set {} on {:?}", name, live);
    }

    for (name, value) in old.iter() {
        if new.contains(name) || still_written(new, name, value) {
            continue;
        }
        clear_attribute(target, live, name, value);
        log::debug!("[patch] unset {} on {:?}", name, live);
    }
}

/// Whether an entry dropped from the map is still applied by another key:
/// a static value written to the same live name (`class` vs `className`), or
/// the same callback bound to the same event (`onClick` vs `click`).
fn still_written(new: &Attributes, name: &str, value: &AttrValue) -> bool {
    match value {
        AttrValue::Static(_) => new.iter().any(|(other, v)| {
            matches!(v, AttrValue::Static(_)) && live_name(other) == live_name(name)
        }),
        AttrValue::Event(handler) => new.iter().any(|(_, v)| {
            matches!(v, AttrValue::Event(other)
                if other.event == handler.event && other.callback.ptr_eq(&handler.callback))
        }),
    }
}

fn patch_children<T: RenderTarget>(target: &mut T, live: T::Node, new: &[Node], old: &[Node]) {
    for (i, child) in new.iter().enumerate() {
        patch(target, live, Some(child), old.get(i), i);
    }

    // Highest index first, so every removal still addresses the child that
    // sits at `i`.
    for (i, child) in old.iter().enumerate().skip(new.len()).rev() {
        patch(target, live, None, Some(child), i);
    }
}
