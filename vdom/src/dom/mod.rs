mod document;
mod mutation;

pub use document::Document;
pub use mutation::Mutation;

/// Handle of a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiveId(pub(crate) usize);

impl LiveId {
    pub fn index(self) -> usize {
        self.0
    }
}
