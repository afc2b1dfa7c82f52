mod materialize;
mod patch;

pub use materialize::materialize;
pub use patch::patch;

use crate::node::Node;
use crate::target::RenderTarget;

/// Materialize `node` and append it to `container`. Returns the new live node.
pub fn mount<T: RenderTarget>(target: &mut T, container: T::Node, node: &Node) -> T::Node {
    let live = materialize(target, node);
    target.append_child(container, live);
    live
}
