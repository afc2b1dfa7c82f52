use super::LiveId;

/// One mutation received by a [`Document`](super::Document), in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateElement { node: LiveId, tag: String },
    CreateText { node: LiveId, text: String },
    SetAttribute { node: LiveId, name: String, value: String },
    RemoveAttribute { node: LiveId, name: String },
    AddListener { node: LiveId, event: String },
    RemoveListener { node: LiveId, event: String },
    AppendChild { parent: LiveId, child: LiveId },
    InsertChild { parent: LiveId, index: usize, child: LiveId },
    RemoveChild { parent: LiveId, index: usize, child: LiveId },
    ReplaceChild { parent: LiveId, index: usize, old: LiveId, new: LiveId },
    SetText { node: LiveId, text: String },
}

impl Mutation {
    /// Creates a new live node.
    pub fn is_creation(&self) -> bool {
        matches!(self, Self::CreateElement { .. } | Self::CreateText { .. })
    }

    /// Changes which nodes are attached where.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::AppendChild { .. }
                | Self::InsertChild { .. }
                | Self::RemoveChild { .. }
                | Self::ReplaceChild { .. }
        )
    }

    /// Touches an attribute or listener of an existing node.
    pub fn is_attribute(&self) -> bool {
        matches!(
            self,
            Self::SetAttribute { .. }
                | Self::RemoveAttribute { .. }
                | Self::AddListener { .. }
                | Self::RemoveListener { .. }
        )
    }

    /// The node whose own state or child list this mutation changes.
    pub fn target(&self) -> LiveId {
        match self {
            Self::CreateElement { node, .. }
            | Self::CreateText { node, .. }
            | Self::SetAttribute { node, .. }
            | Self::RemoveAttribute { node, .. }
            | Self::AddListener { node, .. }
            | Self::RemoveListener { node, .. }
            | Self::SetText { node, .. } => *node,
            Self::AppendChild { parent, .. }
            | Self::InsertChild { parent, .. }
            | Self::RemoveChild { parent, .. }
            | Self::ReplaceChild { parent, .. } => *parent,
        }
    }
}
