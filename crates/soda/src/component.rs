//! Component instances
//!
//! A [`Component`] pairs the user's [`Hooks`] with the element the host
//! created for them. It implements the lifecycle bridge and the update engine.

use std::rc::Rc;

use smol::channel::Sender;
use soda_dom::{DomError, LifecycleCallback, LifecycleCallbackInfo, NodeId};

use crate::{
    ComponentClass, Content, Hooks, LocalBoxFuture, Render, SharedDocument, UpdateError,
};

/// Handle hooks use to reach their element
#[derive(Debug, Clone)]
pub struct Host {
    document: SharedDocument,
    node: NodeId,
    root: NodeId,
    updates: Option<Sender<NodeId>>,
}

impl Host {
    pub(crate) fn new(
        document: SharedDocument,
        node: NodeId,
        root: NodeId,
        updates: Option<Sender<NodeId>>,
    ) -> Self {
        Self {
            document,
            node,
            root,
            updates,
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// The element itself
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Where content goes: the shadow root if one was attached, else the element
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn has_shadow(&self) -> bool {
        self.root != self.node
    }

    /// Live connection state, always asked from the host
    pub fn is_connected(&self) -> bool {
        self.document.borrow().tree().is_connected(self.node)
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.document
            .borrow()
            .tree()
            .get_attribute(self.node, name)
            .map(str::to_string)
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.document
            .borrow_mut()
            .tree_mut()
            .set_attribute(self.node, name, value)
    }

    /// Text currently rendered under the root
    pub fn text_content(&self) -> String {
        self.document.borrow().tree().text_content(self.root)
    }

    /// Ask the owning runtime to run `update()` for this element.
    /// Returns false when the component is not managed by a runtime.
    pub fn request_update(&self) -> bool {
        self.updates
            .as_ref()
            .is_some_and(|updates| updates.try_send(self.node).is_ok())
    }
}

/// Receiver of native lifecycle notifications for one element
pub trait LifecycleBridge {
    fn node(&self) -> NodeId;

    fn connected_callback(&self);

    fn disconnected_callback(&self);

    fn attribute_changed_callback(
        &self,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    );

    fn adopted_callback(&self);

    /// Run the update engine
    fn run_update(&self) -> LocalBoxFuture<'_, Result<(), UpdateError>>;

    /// Route a queued host notification to the matching callback
    fn dispatch(&self, info: &LifecycleCallbackInfo) {
        match &info.callback {
            LifecycleCallback::Connected => self.connected_callback(),
            LifecycleCallback::Disconnected => self.disconnected_callback(),
            LifecycleCallback::Adopted => self.adopted_callback(),
            LifecycleCallback::AttributeChanged {
                name,
                old_value,
                new_value,
            } => self.attribute_changed_callback(name, old_value.as_deref(), new_value.as_deref()),
        }
    }
}

/// A constructed component
pub struct Component<H> {
    class: Rc<ComponentClass>,
    name: String,
    host: Host,
    hooks: H,
}

impl<H: Hooks> Component<H> {
    pub(crate) fn new(class: Rc<ComponentClass>, name: String, host: Host, hooks: H) -> Self {
        Self {
            class,
            name,
            host,
            hooks,
        }
    }

    pub fn class(&self) -> &Rc<ComponentClass> {
        &self.class
    }

    /// Registered element name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn node(&self) -> NodeId {
        self.host.node
    }

    /// Content root, fixed at construction
    pub fn root(&self) -> NodeId {
        self.host.root
    }

    pub fn is_connected(&self) -> bool {
        self.host.is_connected()
    }

    /// Render and apply the result to the root.
    ///
    /// Snapshots are applied in the order the render hook produces them.
    /// `after_update` runs once when everything was applied; any render or
    /// replacement failure is returned as-is and skips it, leaving earlier
    /// replacements in place.
    pub async fn update(&self) -> Result<(), UpdateError> {
        tracing::trace!("Updating <{}> {:?}", self.name, self.host.node);

        match self.hooks.render(&self.host) {
            Render::Value(content) => {
                if let Some(content) = content {
                    self.replace(content).await?;
                }
            }
            Render::Deferred(future) => {
                if let Some(content) = future.await.map_err(UpdateError::Render)? {
                    self.replace(content).await?;
                }
            }
            Render::Sequence(mut sequence) => loop {
                let step = sequence.next().await.map_err(UpdateError::Render)?;
                let (content, done) = step.into_parts();
                if let Some(content) = content {
                    self.replace(content).await?;
                }
                if done {
                    break;
                }
            },
        }

        self.hooks.after_update(&self.host);
        Ok(())
    }

    /// Apply one snapshot through the class's replacement strategy
    pub async fn replace(&self, content: Content) -> Result<(), UpdateError> {
        self.class
            .strategy()
            .replace(&self.host.document, self.host.root, content)
            .await
            .map_err(UpdateError::Replace)
    }
}

impl<H: Hooks> LifecycleBridge for Component<H> {
    fn node(&self) -> NodeId {
        self.host.node
    }

    fn connected_callback(&self) {
        // The host may deliver "connected" after the element was removed again
        if !self.host.is_connected() {
            tracing::debug!("Ignoring stale connected callback for <{}> {:?}", self.name, self.host.node);
            return;
        }
        self.hooks.connected(&self.host);
    }

    fn disconnected_callback(&self) {
        self.hooks.disconnected(&self.host);
    }

    fn attribute_changed_callback(
        &self,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        self.hooks.attribute_changed(&self.host, name, old_value, new_value);
    }

    fn adopted_callback(&self) {
        self.hooks.adopted(&self.host);
    }

    fn run_update(&self) -> LocalBoxFuture<'_, Result<(), UpdateError>> {
        Box::pin(self.update())
    }
}

impl<H> std::fmt::Debug for Component<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("node", &self.host.node)
            .field("root", &self.host.root)
            .finish_non_exhaustive()
    }
}
