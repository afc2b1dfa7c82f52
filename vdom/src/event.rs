use std::fmt;
use std::rc::Rc;

/// An event delivered to a registered callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Normalized (lowercase) event name, e.g. `click`.
    pub name: String,
    /// Optional payload, e.g. the new value of an input.
    pub detail: Option<String>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: normalize_event_name(&name),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A shared event callback.
///
/// Two callbacks are the same binding only when they point at the same
/// closure, which is what listener removal and attribute diffing compare.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&Event)>);

impl Callback {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<F> From<F> for Callback
where
    F: Fn(&Event) + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Prefix marking an attribute name as an event binding (`onClick`).
pub const EVENT_PREFIX: &str = "on";

/// DOM event names recognized after a lowercase `on` prefix (`onclick`).
const KNOWN_EVENTS: &[&str] = &[
    "blur", "change", "click", "contextmenu", "dblclick", "drag", "dragend", "dragenter",
    "dragleave", "dragover", "dragstart", "drop", "error", "focus", "focusin", "focusout",
    "input", "keydown", "keypress", "keyup", "load", "mousedown", "mouseenter", "mouseleave",
    "mousemove", "mouseout", "mouseover", "mouseup", "offline", "online", "pointerdown",
    "pointerenter", "pointerleave", "pointermove", "pointerup", "reset", "resize", "scroll",
    "select", "submit", "touchend", "touchmove", "touchstart", "wheel",
];

/// Turn either a bare event name (`click`) or an event-binding attribute
/// name (`onClick`, `onclick`) into the lowercase event name.
///
/// The `on` prefix is stripped when an uppercase letter follows it, or when
/// the rest is a known DOM event name in any case. Anything else is taken as
/// a bare event name, so `online` stays `online`.
pub fn normalize_event_name(name: &str) -> String {
    match name.strip_prefix(EVENT_PREFIX) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => rest.to_lowercase(),
        Some(rest) if KNOWN_EVENTS.contains(&rest.to_lowercase().as_str()) => rest.to_lowercase(),
        _ => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_normalize_event_name() {
        assert_eq!(normalize_event_name("onClick"), "click");
        assert_eq!(normalize_event_name("onMouseOver"), "mouseover");
        assert_eq!(normalize_event_name("click"), "click");
        assert_eq!(normalize_event_name("Input"), "input");
        // "on" followed by lowercase is an event name, not a binding prefix
        assert_eq!(normalize_event_name("online"), "online");
    }

    #[test]
    fn test_normalize_lowercase_binding_names() {
        assert_eq!(normalize_event_name("onclick"), "click");
        assert_eq!(normalize_event_name("onmouseover"), "mouseover");
        assert_eq!(normalize_event_name("onkeyDown"), "keydown");
        assert_eq!(normalize_event_name("ononline"), "online");
        assert_eq!(normalize_event_name("onlyme"), "onlyme");
    }

    #[test]
    fn test_callback_identity() {
        let a = Callback::new(|_| {});
        let b = a.clone();
        let c = Callback::new(|_| {});
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_callback_call() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let cb = Callback::new(move |e| {
            assert_eq!(e.name, "click");
            counter.set(counter.get() + 1);
        });
        cb.call(&Event::new("onClick"));
        cb.call(&Event::new("click"));
        assert_eq!(hits.get(), 2);
    }
}
