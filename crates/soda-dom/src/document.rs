//! Document - High-level document API

use crate::{DocumentReady, DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Resolved by `finish_loading`
    ready: DocumentReady,
}

impl Document {
    /// Create a new document with the basic html/head/body structure
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh detached elements, insertion cannot fail
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            ready: DocumentReady::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Ready signal shared with everyone waiting on this document
    pub fn ready(&self) -> &DocumentReady {
        &self.ready
    }

    /// Mark initial loading as finished, resolving the ready signal.
    /// Later calls are no-ops.
    pub fn finish_loading(&self) {
        if self.ready.resolve() {
            tracing::info!("Document ready: {}", self.url);
        }
    }

    /// Whether initial loading has finished
    pub fn is_loaded(&self) -> bool {
        self.ready.is_ready()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
