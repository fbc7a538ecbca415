//! Content snapshots
//!
//! What a render hook hands to the replacement strategy: a list of strings
//! and existing nodes, the same shapes `replaceChildren` accepts.

use soda_dom::{DomTree, NodeId};

/// One piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Text(String),
    Node(NodeId),
}

/// A content snapshot. An empty snapshot clears the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content(Vec<Piece>);

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self(vec![Piece::Text(text.into())])
    }

    pub fn node(node: NodeId) -> Self {
        Self(vec![Piece::Node(node)])
    }

    /// Append a piece
    pub fn with(mut self, piece: impl Into<Piece>) -> Self {
        self.0.push(piece.into());
        self
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Turn the snapshot into nodes of `tree`, creating text nodes for strings
    pub fn into_nodes(self, tree: &mut DomTree) -> Vec<NodeId> {
        self.0
            .into_iter()
            .map(|piece| match piece {
                Piece::Text(text) => tree.create_text(text),
                Piece::Node(node) => node,
            })
            .collect()
    }
}

impl From<&str> for Piece {
    fn from(text: &str) -> Self {
        Piece::Text(text.to_string())
    }
}

impl From<String> for Piece {
    fn from(text: String) -> Self {
        Piece::Text(text)
    }
}

impl From<NodeId> for Piece {
    fn from(node: NodeId) -> Self {
        Piece::Node(node)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::text(text)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::text(text)
    }
}

impl From<NodeId> for Content {
    fn from(node: NodeId) -> Self {
        Content::node(node)
    }
}

impl From<Vec<NodeId>> for Content {
    fn from(nodes: Vec<NodeId>) -> Self {
        nodes.into_iter().collect()
    }
}

impl<P: Into<Piece>> FromIterator<P> for Content {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
