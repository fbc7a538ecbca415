//! Shadow DOM
//!
//! Shadow roots and the rules for which elements may host one.

use serde::Deserialize;

use crate::NodeId;

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Options for `attachShadow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadowRootInit {
    pub mode: ShadowRootMode,
    pub delegates_focus: bool,
}

/// Shadow root
#[derive(Debug, Clone)]
pub struct ShadowRoot {
    pub host: NodeId,
    pub mode: ShadowRootMode,
    pub delegates_focus: bool,
}

impl ShadowRoot {
    /// Create a new shadow root
    pub fn new(host: NodeId, init: ShadowRootInit) -> Self {
        Self {
            host,
            mode: init.mode,
            delegates_focus: init.delegates_focus,
        }
    }
}

/// Built-in elements allowed to host a shadow root
const SHADOW_HOSTS: &[&str] = &[
    "article", "aside", "blockquote", "body", "div", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "main", "nav", "p", "section", "span",
];

/// Whether an element with this tag may have a shadow root attached.
///
/// Autonomous custom elements (any tag with a hyphen) always can.
pub fn can_host_shadow(tag: &str) -> bool {
    tag.contains('-') || SHADOW_HOSTS.contains(&tag)
}
