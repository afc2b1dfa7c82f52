use std::collections::BTreeMap;

use crate::event::{normalize_event_name, Callback};

/// Attribute name that maps onto the live `class` attribute.
pub const CLASS_ALIAS: &str = "className";

/// An event binding: the normalized event name and its callback.
#[derive(Debug, Clone, PartialEq)]
pub struct EventHandler {
    pub event: String,
    pub callback: Callback,
}

/// Value of a single attribute entry.
///
/// Whether an entry binds an event is decided when the tree is built, never by
/// inspecting names during a patch.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Static(String),
    Event(EventHandler),
}

impl AttrValue {
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Self::Static(value) => Some(value),
            Self::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&EventHandler> {
        match self {
            Self::Static(_) => None,
            Self::Event(handler) => Some(handler),
        }
    }
}

/// Attribute map of an element. Keys are unique, iteration is sorted by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain attribute.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, AttrValue::Static(value.into()));
        self
    }

    /// Bind an event. `name` is either an event name (`click`) or an
    /// event-binding attribute name (`onClick`); it is kept as the key.
    ///
    /// A lowercase `on` prefix is only stripped before a known DOM event
    /// (`onclick` binds `click`, `online` binds `online`). See
    /// [`normalize_event_name`].
    pub fn on(mut self, name: impl Into<String>, callback: impl Into<Callback>) -> Self {
        let name = name.into();
        let handler = EventHandler {
            event: normalize_event_name(&name),
            callback: callback.into(),
        };
        self.insert(name, AttrValue::Event(handler));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: AttrValue) -> Option<AttrValue> {
        self.entries.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Static value of `name`, if present and not an event binding.
    pub fn get_static(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_static)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Class of the element, from either `class` or `className`.
    pub fn class(&self) -> Option<&str> {
        self.get_static(CLASS_ALIAS)
            .or_else(|| self.get_static("class"))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |attrs, (name, value)| attrs.set(name, value))
    }
}

/// Name under which an attribute is written to the live target.
pub fn live_name(name: &str) -> &str {
    if name == CLASS_ALIAS {
        "class"
    } else {
        name
    }
}
