//! Lifecycle callbacks
//!
//! Custom element reactions queued by DOM mutations and drained by whoever
//! owns the element instances.

use crate::NodeId;

/// Custom element lifecycle callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleCallback {
    Connected,
    Disconnected,
    Adopted,
    AttributeChanged {
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    },
}

/// A queued reaction for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleCallbackInfo {
    pub callback: LifecycleCallback,
    pub element: NodeId,
}

impl LifecycleCallbackInfo {
    pub fn new(element: NodeId, callback: LifecycleCallback) -> Self {
        Self { callback, element }
    }
}

/// Pending callback queue for batch processing
#[derive(Debug, Default)]
pub struct CallbackQueue {
    callbacks: Vec<LifecycleCallbackInfo>,
}

impl CallbackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, info: LifecycleCallbackInfo) {
        tracing::trace!("Queued {:?} for {:?}", info.callback, info.element);
        self.callbacks.push(info);
    }

    pub fn drain(&mut self) -> Vec<LifecycleCallbackInfo> {
        std::mem::take(&mut self.callbacks)
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = CallbackQueue::new();
        queue.enqueue(LifecycleCallbackInfo::new(NodeId(3), LifecycleCallback::Connected));
        queue.enqueue(LifecycleCallbackInfo::new(NodeId(3), LifecycleCallback::Disconnected));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].callback, LifecycleCallback::Connected);
        assert_eq!(drained[1].callback, LifecycleCallback::Disconnected);
        assert!(queue.is_empty());
    }
}
