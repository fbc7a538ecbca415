//! Runtime
//!
//! Owns the shared document and the mounted components. Delivers queued
//! lifecycle notifications to each component's bridge and runs the updates
//! hooks request through [`Host::request_update`](crate::Host::request_update).
//!
//! Everything runs on one thread; updates are interleaved on a
//! [`LocalExecutor`] and never serialized against each other.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use smol::LocalExecutor;
use smol::channel::{self, Receiver, Sender};
use soda_dom::{DomError, NodeId};

use crate::{Component, Hooks, LifecycleBridge, Registration, SharedDocument};

/// Single-threaded component runtime
pub struct Runtime {
    document: SharedDocument,
    components: RefCell<HashMap<NodeId, Rc<dyn LifecycleBridge>>>,
    sender: Sender<NodeId>,
    receiver: Receiver<NodeId>,
    executor: LocalExecutor<'static>,
}

impl Runtime {
    pub fn new(document: SharedDocument) -> Self {
        let (sender, receiver) = channel::unbounded();
        Self {
            document,
            components: RefCell::new(HashMap::new()),
            sender,
            receiver,
            executor: LocalExecutor::new(),
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Construct a component managed by this runtime
    pub fn create<H: Hooks + 'static>(
        &self,
        registration: &Registration,
        hooks: H,
    ) -> Result<Rc<Component<H>>, DomError> {
        let component = Rc::new(registration.construct_with(
            &self.document,
            hooks,
            Some(self.sender.clone()),
        )?);
        let bridge: Rc<dyn LifecycleBridge> = component.clone();
        self.components.borrow_mut().insert(component.node(), bridge);
        Ok(component)
    }

    /// Bridge of the component living at `node`
    pub fn component(&self, node: NodeId) -> Option<Rc<dyn LifecycleBridge>> {
        self.components.borrow().get(&node).cloned()
    }

    /// Stop managing the component at `node`.
    ///
    /// Disconnection alone keeps the component, since the element may be
    /// inserted again. Notifications and update requests still queued for
    /// `node` are dropped once it is removed.
    pub fn remove(&self, node: NodeId) -> Option<Rc<dyn LifecycleBridge>> {
        let removed = self.components.borrow_mut().remove(&node);
        if removed.is_some() {
            tracing::debug!("Removed component {:?}", node);
        }
        removed
    }

    /// Number of mounted components
    pub fn len(&self) -> usize {
        self.components.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.borrow().is_empty()
    }

    /// Deliver queued lifecycle notifications in queue order, including the
    /// ones hooks cause while running. Returns how many were delivered.
    pub fn dispatch(&self) -> usize {
        let mut delivered = 0;
        loop {
            let batch = self.document.borrow_mut().tree_mut().take_callbacks();
            if batch.is_empty() {
                return delivered;
            }
            for info in batch {
                // Elements created outside this runtime have no bridge
                let Some(component) = self.component(info.element) else {
                    continue;
                };
                component.dispatch(&info);
                delivered += 1;
            }
        }
    }

    /// Pending update requests
    pub fn pending_updates(&self) -> usize {
        self.receiver.len()
    }

    /// Run every requested update to completion. Failures have no caller to
    /// go to and are logged. Returns how many updates ran.
    pub async fn run_updates(&self) -> usize {
        let mut tasks = Vec::new();
        while let Ok(node) = self.receiver.try_recv() {
            let Some(component) = self.component(node) else {
                continue;
            };
            tasks.push(self.executor.spawn(async move {
                if let Err(err) = component.run_update().await {
                    tracing::warn!("Update of {:?} failed: {}", node, err);
                }
            }));
        }

        let count = tasks.len();
        self.executor
            .run(async {
                for task in tasks {
                    task.await;
                }
            })
            .await;
        count
    }

    /// Alternate between dispatching notifications and running updates until
    /// neither produces more work
    pub fn run_until_idle(&self) {
        loop {
            let delivered = self.dispatch();
            let updated = smol::block_on(self.run_updates());
            if delivered == 0 && updated == 0 {
                break;
            }
        }
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("components", &self.components.borrow().len())
            .field("pending_updates", &self.receiver.len())
            .finish_non_exhaustive()
    }
}
