//! DOM Tree (arena-based allocation)
//!
//! Mutations that change connectedness or observed attributes of custom
//! elements queue the matching lifecycle callbacks.

use crate::lifecycle::{CallbackQueue, LifecycleCallback, LifecycleCallbackInfo};
use crate::node::{Attribute, CustomState, Node, NodeData};
use crate::shadow::{self, ShadowRoot, ShadowRootInit};
use crate::NodeId;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {0:?} does not exist")]
    NotFound(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Cannot insert {child:?} into {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Element {0:?} already hosts a shadow root")]
    ShadowAlreadyAttached(NodeId),

    #[error("<{0}> cannot host a shadow root")]
    ShadowNotSupported(String),
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    callbacks: CallbackQueue,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            callbacks: CallbackQueue::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, including the document node
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag.to_ascii_lowercase()))
    }

    /// Create a detached customized built-in (`<tag is="name">`)
    pub fn create_element_is(&mut self, tag: &str, is: &str) -> NodeId {
        let id = self.create_element(tag);
        if let Some(element) = self.nodes[id.index()].as_element_mut() {
            element.is = Some(is.to_string());
        }
        id
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(Node::text(text))
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Children of a node (empty for unknown nodes)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Whether the node is reachable from the document, crossing shadow
    /// boundaries through their hosts
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            let Some(node) = self.get(current) else {
                return false;
            };
            match &node.data {
                NodeData::Document => return true,
                NodeData::ShadowRoot(shadow) => current = shadow.host,
                _ if node.parent.is_valid() => current = node.parent,
                _ => return false,
            }
        }
    }

    /// Shadow-including: a shadow root's ancestors continue at its host
    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.get(node) {
                Some(Node {
                    data: NodeData::ShadowRoot(shadow),
                    ..
                }) => node = shadow.host,
                Some(n) if n.parent.is_valid() => node = n.parent,
                _ => return false,
            }
        }
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;
        let rejected = parent_node.is_text()
            || matches!(child_node.data, NodeData::Document | NodeData::ShadowRoot(_))
            || self.is_inclusive_ancestor(child, parent);
        if rejected {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    /// Append `child` to `parent`, moving it out of its current position first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = parent;
        self.nodes[parent.index()].children.push(child);
        if self.is_connected(child) {
            self.queue_subtree(child, LifecycleCallback::Connected);
        }
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    /// Detach a node from its parent. No-op for detached nodes.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        let was_connected = self.is_connected(id);
        self.nodes[parent.index()].children.retain(|&c| c != id);
        self.nodes[id.index()].parent = NodeId::NONE;
        if was_connected {
            self.queue_subtree(id, LifecycleCallback::Disconnected);
        }
    }

    /// Replace all children of `parent` with `nodes` (`replaceChildren`).
    ///
    /// All insertions are validated before anything is removed, so a failed
    /// call leaves the tree untouched.
    pub fn replace_children(&mut self, parent: NodeId, nodes: Vec<NodeId>) -> Result<(), DomError> {
        self.node(parent)?;
        for &child in &nodes {
            self.check_insert(parent, child)?;
        }

        let old = self.nodes[parent.index()].children.clone();
        for child in old {
            self.detach(child);
        }
        for child in nodes {
            self.detach(child);
            self.link(parent, child);
        }
        Ok(())
    }

    /// Attach a shadow root to `host`
    pub fn attach_shadow(&mut self, host: NodeId, init: ShadowRootInit) -> Result<NodeId, DomError> {
        let element = self.node(host)?.as_element().ok_or(DomError::NotAnElement(host))?;
        if element.shadow_root.is_some() {
            return Err(DomError::ShadowAlreadyAttached(host));
        }
        if !shadow::can_host_shadow(&element.tag) {
            return Err(DomError::ShadowNotSupported(element.tag.clone()));
        }

        let root = self.push(Node::shadow_root(ShadowRoot::new(host, init)));
        if let Some(element) = self.nodes[host.index()].as_element_mut() {
            element.shadow_root = Some(root);
        }
        Ok(root)
    }

    /// Shadow root attached to `host`
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.get(host)?.as_element()?.shadow_root
    }

    /// Upgrade an element so it receives lifecycle callbacks
    pub fn mark_custom(&mut self, id: NodeId, observed_attributes: Vec<String>) -> Result<(), DomError> {
        let element = self
            .get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;
        element.custom = Some(CustomState { observed_attributes });
        Ok(())
    }

    /// Get attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attribute(&name.to_ascii_lowercase())
    }

    /// Set attribute value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let name = name.to_ascii_lowercase();
        let element = self
            .get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;

        let old_value = match element.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => Some(std::mem::replace(&mut attr.value, value.to_string())),
            None => {
                element.attrs.push(Attribute::new(name.clone(), value));
                None
            }
        };

        if element.observes(&name) {
            self.callbacks.enqueue(LifecycleCallbackInfo::new(
                id,
                LifecycleCallback::AttributeChanged {
                    name,
                    old_value,
                    new_value: Some(value.to_string()),
                },
            ));
        }
        Ok(())
    }

    /// Remove attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        let name = name.to_ascii_lowercase();
        let element = self
            .get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;

        let Some(pos) = element.attrs.iter().position(|a| a.name == name) else {
            return Ok(None);
        };
        let old_value = element.attrs.remove(pos).value;

        if element.observes(&name) {
            self.callbacks.enqueue(LifecycleCallbackInfo::new(
                id,
                LifecycleCallback::AttributeChanged {
                    name,
                    old_value: Some(old_value.clone()),
                    new_value: None,
                },
            ));
        }
        Ok(Some(old_value))
    }

    /// Adopt a node into this document: detach it and queue `Adopted` for
    /// every custom element in its subtree
    pub fn adopt_node(&mut self, id: NodeId) -> Result<(), DomError> {
        self.node(id)?;
        self.detach(id);
        self.queue_subtree(id, LifecycleCallback::Adopted);
        Ok(())
    }

    /// Concatenated text of the light-tree descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        if let Some(text) = node.as_text() {
            out.push_str(text);
        }
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }

    /// Queue a callback for every custom element in the shadow-including
    /// subtree of `id`, in tree order
    fn queue_subtree(&mut self, id: NodeId, callback: LifecycleCallback) {
        let mut stack = vec![id];
        let mut targets = Vec::new();
        while let Some(current) = stack.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            if let Some(element) = node.as_element() {
                if element.is_custom() {
                    targets.push(current);
                }
                if let Some(shadow) = element.shadow_root {
                    stack.extend(self.children(shadow).iter().rev());
                }
            }
            stack.extend(node.children.iter().rev());
        }

        for element in targets {
            self.callbacks
                .enqueue(LifecycleCallbackInfo::new(element, callback.clone()));
        }
    }

    /// Pending lifecycle callbacks
    pub fn callbacks(&self) -> &CallbackQueue {
        &self.callbacks
    }

    /// Pending lifecycle callbacks, e.g. for hosts delivering their own
    pub fn callbacks_mut(&mut self) -> &mut CallbackQueue {
        &mut self.callbacks
    }

    /// Drain pending lifecycle callbacks
    pub fn take_callbacks(&mut self) -> Vec<LifecycleCallbackInfo> {
        self.callbacks.drain()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
