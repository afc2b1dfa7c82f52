//! Minimal stateful components.

use crate::error::ComponentError;
use crate::node::Node;
use crate::render::{materialize, patch};
use crate::target::RenderTarget;

/// A render function over props and state.
///
/// `render` must be provided. The default exists only so that a missing
/// implementation surfaces as [`ComponentError::RenderUnimplemented`] on the
/// first mount or update instead of rendering nothing.
///
/// # Example
///
/// ```
/// use vdom::{build, Attributes, Component, ComponentError, Node};
///
/// struct Counter;
///
/// impl Component for Counter {
///     type Props = String;
///     type State = u32;
///
///     fn render(&self, label: &String, count: &u32) -> Result<Node, ComponentError> {
///         Ok(build("p", Attributes::new(), format!("{label}: {count}")))
///     }
/// }
/// ```
pub trait Component {
    type Props;
    type State: Default;

    fn render(&self, props: &Self::Props, state: &Self::State) -> Result<Node, ComponentError> {
        let _ = (props, state);
        Err(ComponentError::RenderUnimplemented {
            component: std::any::type_name::<Self>(),
        })
    }
}

/// A mounted (or mountable) component instance: props, state, the last
/// rendered tree and the live node it produced.
pub struct Stateful<C: Component, T: RenderTarget> {
    component: C,
    props: C::Props,
    state: C::State,
    rendered: Option<Node>,
    live: Option<T::Node>,
}

impl<C: Component, T: RenderTarget> Stateful<C, T> {
    pub fn new(component: C, props: C::Props) -> Self {
        Self::with_state(component, props, C::State::default())
    }

    pub fn with_state(component: C, props: C::Props, state: C::State) -> Self {
        Self {
            component,
            props,
            state,
            rendered: None,
            live: None,
        }
    }

    pub fn props(&self) -> &C::Props {
        &self.props
    }

    pub fn state(&self) -> &C::State {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    /// The live node currently representing this component.
    pub fn live_node(&self) -> Option<T::Node> {
        self.live
    }

    /// The tree used as the baseline for the next update.
    pub fn rendered(&self) -> Option<&Node> {
        self.rendered.as_ref()
    }

    /// Render once, materialize and append to `container`.
    pub fn mount(&mut self, target: &mut T, container: T::Node) -> Result<T::Node, ComponentError> {
        let tree = self.component.render(&self.props, &self.state)?;
        let live = materialize(target, &tree);
        target.append_child(container, live);
        log::debug!("[component] mounted {} into {:?}", self.name(), container);

        self.rendered = Some(tree);
        self.live = Some(live);
        Ok(live)
    }

    /// Apply a partial state change, then [`update`](Self::update).
    pub fn set_state(
        &mut self,
        target: &mut T,
        change: impl FnOnce(&mut C::State),
    ) -> Result<(), ComponentError> {
        change(&mut self.state);
        self.update(target)
    }

    /// Re-render and patch the live tree against the previous render.
    /// Does nothing before [`mount`](Self::mount).
    pub fn update(&mut self, target: &mut T) -> Result<(), ComponentError> {
        let (Some(live), Some(previous)) = (self.live, self.rendered.as_ref()) else {
            return Ok(());
        };

        let detached = || ComponentError::Detached {
            component: std::any::type_name::<C>(),
        };
        let parent = target.parent(live).ok_or_else(detached)?;
        let index = target.index_of(parent, live).ok_or_else(detached)?;

        let tree = self.component.render(&self.props, &self.state)?;
        patch(target, parent, Some(&tree), Some(previous), index);
        log::debug!("[component] updated {} at {}", self.name(), index);

        // A root kind change replaces the live node.
        self.live = target.child(parent, index);
        self.rendered = Some(tree);
        Ok(())
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<C>()
    }
}

impl<C, T> std::fmt::Debug for Stateful<C, T>
where
    C: Component,
    T: RenderTarget,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stateful")
            .field("component", &self.name())
            .field("mounted", &self.is_mounted())
            .field("live", &self.live)
            .finish()
    }
}
