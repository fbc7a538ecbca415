//! Soda DOM - host collaborators for Soda components
//!
//! Arena-based document tree with the pieces a custom element layer needs:
//! element interfaces, a custom element registry, a lifecycle callback queue,
//! shadow roots, and the document ready signal.

mod node;
mod tree;
mod document;
mod shadow;
mod interfaces;
mod custom_elements;
mod lifecycle;
mod ready;

pub use node::{Attribute, CustomState, ElementData, Node, NodeData};
pub use tree::{DomError, DomTree};
pub use document::Document;
pub use shadow::{ShadowRoot, ShadowRootInit, ShadowRootMode};
pub use interfaces::ElementInterface;
pub use custom_elements::{
    CustomElementDefinition, CustomElementError, CustomElementRegistry, CustomElementType,
};
pub use lifecycle::{CallbackQueue, LifecycleCallback, LifecycleCallbackInfo};
pub use ready::DocumentReady;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
