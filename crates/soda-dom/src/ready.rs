//! Document ready signal
//!
//! A deferred value resolved once the document finishes loading. Clones share
//! the same underlying channel, so every holder observes the same resolution.

use smol::channel::{self, Receiver, Sender};

/// Shared "DOMContentLoaded" signal
#[derive(Debug, Clone)]
pub struct DocumentReady {
    sender: Sender<()>,
    receiver: Receiver<()>,
}

impl DocumentReady {
    pub fn new() -> Self {
        let (sender, receiver) = channel::bounded(1);
        Self { sender, receiver }
    }

    /// Whether the signal has been resolved
    pub fn is_ready(&self) -> bool {
        self.receiver.is_closed()
    }

    /// Wait until the document is ready. Returns immediately once resolved.
    pub async fn wait(&self) {
        // Nothing is ever sent: recv only returns when the channel closes.
        let _ = self.receiver.recv().await;
    }

    /// Resolve the signal. Returns false if it was already resolved.
    pub(crate) fn resolve(&self) -> bool {
        self.sender.close()
    }
}

impl Default for DocumentReady {
    fn default() -> Self {
        Self::new()
    }
}
