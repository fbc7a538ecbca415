//! Generated classes
//!
//! A [`ComponentClass`] is the base every component of one
//! (declaration, base element) pair shares. Registering it under a name gives
//! a [`Registration`], which constructs [`Component`]s.

use std::fmt;
use std::rc::Rc;

use smol::channel::Sender;
use soda_dom::{
    CustomElementError, CustomElementRegistry, DocumentReady, DomError, ElementInterface, NodeId,
    ShadowRootInit,
};

use crate::{Component, Hooks, Host, ReplaceChildren, ReplaceStrategy, SharedDocument};

/// Class generated for one (declaration, base element) pair
pub struct ComponentClass {
    id: u64,
    interface: ElementInterface,
    extends: Option<String>,
    document_ready: DocumentReady,
    shadow: ShadowRootInit,
    strategy: Rc<dyn ReplaceStrategy>,
    parent: Option<Rc<ComponentClass>>,
}

impl ComponentClass {
    pub(crate) fn new(
        id: u64,
        interface: ElementInterface,
        extends: Option<String>,
        document_ready: DocumentReady,
        shadow: ShadowRootInit,
    ) -> Self {
        Self {
            id,
            interface,
            extends,
            document_ready,
            shadow,
            strategy: Rc::new(ReplaceChildren),
            parent: None,
        }
    }

    pub(crate) fn derived(id: u64, parent: &Rc<ComponentClass>) -> Self {
        Self {
            id,
            interface: parent.interface,
            extends: parent.extends.clone(),
            document_ready: parent.document_ready.clone(),
            shadow: parent.shadow,
            strategy: Rc::clone(&parent.strategy),
            parent: Some(Rc::clone(parent)),
        }
    }

    /// Swap the replacement strategy used by every component of this class
    pub fn with_strategy(mut self, strategy: impl ReplaceStrategy + 'static) -> Self {
        self.strategy = Rc::new(strategy);
        self
    }

    /// Unique class identifier, handed to the registry as constructor id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Host interface this class extends
    pub fn interface(&self) -> ElementInterface {
        self.interface
    }

    /// Built-in tag this class extends, `None` for autonomous elements
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn is_autonomous(&self) -> bool {
        self.extends.is_none()
    }

    /// Process-wide document ready signal
    pub fn document_ready(&self) -> &DocumentReady {
        &self.document_ready
    }

    pub fn shadow_init(&self) -> ShadowRootInit {
        self.shadow
    }

    pub fn strategy(&self) -> &dyn ReplaceStrategy {
        self.strategy.as_ref()
    }

    /// Class this one was derived from
    pub fn parent(&self) -> Option<&Rc<ComponentClass>> {
        self.parent.as_ref()
    }

    /// Register under `name`
    pub fn register(
        self: &Rc<Self>,
        registry: &mut CustomElementRegistry,
        name: &str,
    ) -> Result<Registration, CustomElementError> {
        self.register_observing(registry, name, &[])
    }

    /// Register under `name`, reporting changes of `observed` attributes.
    ///
    /// Autonomous classes become `<name>`, classes with a base element become
    /// `<base is="name">`.
    pub fn register_observing(
        self: &Rc<Self>,
        registry: &mut CustomElementRegistry,
        name: &str,
        observed: &[&str],
    ) -> Result<Registration, CustomElementError> {
        let observed_attributes: Vec<String> =
            observed.iter().map(|a| a.to_ascii_lowercase()).collect();

        let definition = match &self.extends {
            None => registry.define_autonomous(name, self.id, observed_attributes)?,
            Some(extends) => {
                registry.define_customized(name, extends, self.id, observed_attributes)?
            }
        };
        tracing::info!("Registered <{}> as {:?}", definition.name, definition.kind);

        Ok(Registration {
            class: Rc::clone(self),
            name: definition.name.clone(),
            observed_attributes: definition.observed_attributes.clone(),
        })
    }
}

impl fmt::Debug for ComponentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentClass")
            .field("id", &self.id)
            .field("interface", &self.interface.name())
            .field("extends", &self.extends)
            .field("parent", &self.parent.as_ref().map(|p| p.id))
            .finish_non_exhaustive()
    }
}

/// A class registered under an element name
#[derive(Debug, Clone)]
pub struct Registration {
    class: Rc<ComponentClass>,
    name: String,
    observed_attributes: Vec<String>,
}

impl Registration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &Rc<ComponentClass> {
        &self.class
    }

    pub fn observed_attributes(&self) -> &[String] {
        &self.observed_attributes
    }

    /// Tag instances are created with
    pub fn local_name(&self) -> &str {
        self.class.extends().unwrap_or(&self.name)
    }

    /// Create a detached element and wrap it in a component.
    ///
    /// The shadow root decision is made here, before the element can receive
    /// any lifecycle notification.
    pub fn construct<H: Hooks>(
        &self,
        document: &SharedDocument,
        hooks: H,
    ) -> Result<Component<H>, DomError> {
        self.construct_with(document, hooks, None)
    }

    pub(crate) fn construct_with<H: Hooks>(
        &self,
        document: &SharedDocument,
        hooks: H,
        updates: Option<Sender<NodeId>>,
    ) -> Result<Component<H>, DomError> {
        let use_shadow = hooks.use_shadow();

        let (node, root) = {
            let mut doc = document.borrow_mut();
            let tree = doc.tree_mut();
            let node = match self.class.extends() {
                Some(tag) => tree.create_element_is(tag, &self.name),
                None => tree.create_element(&self.name),
            };
            tree.mark_custom(node, self.observed_attributes.clone())?;
            let root = if use_shadow {
                tree.attach_shadow(node, self.class.shadow)?
            } else {
                node
            };
            (node, root)
        };
        tracing::debug!("Constructed <{}> {:?} (shadow: {})", self.name, node, use_shadow);

        let host = Host::new(document.clone(), node, root, updates);
        Ok(Component::new(Rc::clone(&self.class), self.name.clone(), host, hooks))
    }
}

/// Convert a PascalCase type name to a kebab-case element name.
///
/// Runs of capitals stay together: `"HTMLTree"` becomes `"html-tree"`.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if i > 0 && (!prev_upper || next_lower) {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
