//! Replacement strategies
//!
//! How a content snapshot is applied to a component's root. Classes carry one
//! strategy each; derived classes may swap it (e.g. for diff-based painting).

use soda_dom::{DomError, NodeId};

use crate::{Content, LocalBoxFuture, ReplaceError, SharedDocument};

/// Applies content snapshots to a content root
pub trait ReplaceStrategy {
    fn replace<'a>(
        &'a self,
        document: &'a SharedDocument,
        root: NodeId,
        content: Content,
    ) -> LocalBoxFuture<'a, Result<(), ReplaceError>>;
}

/// Default strategy: the root ends up holding exactly the new content,
/// previous children are detached (`replaceChildren`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceChildren;

impl ReplaceChildren {
    /// Synchronous replacement, usable from other strategies
    pub fn apply(document: &SharedDocument, root: NodeId, content: Content) -> Result<(), DomError> {
        let mut document = document.borrow_mut();
        let tree = document.tree_mut();
        let nodes = content.into_nodes(tree);
        tree.replace_children(root, nodes)
    }
}

impl ReplaceStrategy for ReplaceChildren {
    fn replace<'a>(
        &'a self,
        document: &'a SharedDocument,
        root: NodeId,
        content: Content,
    ) -> LocalBoxFuture<'a, Result<(), ReplaceError>> {
        let result = Self::apply(document, root, content).map_err(ReplaceError::from);
        Box::pin(smol::future::ready(result))
    }
}
