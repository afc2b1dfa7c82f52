use super::Node;

/// A child argument as accepted by the builder.
///
/// Lists nest arbitrarily and are flattened recursively; `Absent` entries
/// (from `None`) are dropped; plain values become text nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Text(String),
    List(Vec<Child>),
    Absent,
}

impl Child {
    /// Append the normalized nodes of this child to `out`. `on_wrap` sees
    /// every text node created from a plain value.
    pub(crate) fn flatten_into(self, out: &mut Vec<Node>, on_wrap: &mut dyn FnMut(&mut Node)) {
        match self {
            Self::Node(node) => out.push(node),
            Self::Text(value) => {
                let mut node = super::text_node(value);
                on_wrap(&mut node);
                out.push(node);
            }
            Self::List(children) => {
                for child in children {
                    child.flatten_into(out, on_wrap);
                }
            }
            Self::Absent => {}
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! child_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

child_from_display!(char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Child {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<Child> for Child {
    fn from_iter<I: IntoIterator<Item = Child>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

/// Build a nested child list from heterogeneous values:
/// `children![node, "text", 42, maybe_node, vec![a, b]]`.
#[macro_export]
macro_rules! children {
    () => {
        $crate::Child::List(Vec::new())
    };
    ($($child:expr),+ $(,)?) => {
        $crate::Child::List(vec![$($crate::Child::from($child)),+])
    };
}
