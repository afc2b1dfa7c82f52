pub mod component;
pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod logging;
pub mod node;
pub mod render;
pub mod target;
pub mod text;

pub use component::{Component, Stateful};
pub use config::Config;
pub use dom::{Document, LiveId, Mutation};
pub use error::{ComponentError, ConfigError, LogInitError};
pub use event::{Callback, Event};
pub use node::{
    build, text_node, AttrValue, Attributes, Builder, Child, Element, EventHandler, Identity,
    Kind, Node, Text, Update,
};
pub use render::{materialize, mount, patch};
pub use target::RenderTarget;
