//! Component Base Factory
//!
//! Resolves the requested base element, checks it is an `HTMLElement`, and
//! produces the class all components of a declaration build on.

use std::cell::Cell;
use std::rc::Rc;

use soda_dom::{DocumentReady, ElementInterface};

use crate::{ClassCache, ComponentClass, Config, ConfigurationError};

/// Builds component classes
#[derive(Debug)]
pub struct ComponentFactory {
    config: Config,
    document_ready: DocumentReady,
    next_id: Cell<u64>,
}

impl ComponentFactory {
    pub fn new(config: Config, document_ready: DocumentReady) -> Self {
        Self {
            config,
            document_ready,
            next_id: Cell::new(1),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Signal shared by every class this factory builds
    pub fn document_ready(&self) -> &DocumentReady {
        &self.document_ready
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Generate a class extending `base` (a built-in tag), or `HTMLElement`
    /// when `base` is absent or empty.
    ///
    /// Fails if the tag's interface does not derive from `HTMLElement`.
    pub fn make_class(&self, base: Option<&str>) -> Result<ComponentClass, ConfigurationError> {
        let base = base.filter(|tag| !tag.is_empty());
        let interface = match base {
            Some(tag) => ElementInterface::from_tag(tag),
            None => ElementInterface::HtmlElement,
        };

        if !interface.is_html() {
            return Err(ConfigurationError {
                tag: base.unwrap_or_default().to_string(),
                interface: interface.name(),
            });
        }

        let id = self.next_id();
        tracing::debug!("Generated class #{} extending {}", id, interface.name());
        Ok(ComponentClass::new(
            id,
            interface,
            base.map(str::to_ascii_lowercase),
            self.document_ready.clone(),
            self.config.shadow_init(),
        ))
    }

    /// Generate a class that inherits everything from `parent`; swap its
    /// strategy with [`ComponentClass::with_strategy`]
    pub fn derive(&self, parent: &Rc<ComponentClass>) -> ComponentClass {
        let id = self.next_id();
        tracing::debug!("Generated class #{} derived from #{}", id, parent.id());
        ComponentClass::derived(id, parent)
    }
}

/// A family of components sharing one way of building their classes.
///
/// Override [`Declaration::make_class`] to change what every generated class
/// does, usually by deriving from the default class for the same base:
///
/// ```rust,ignore
/// struct Fancy;
///
/// impl Declaration for Fancy {
///     fn id(&self) -> &str { "Fancy" }
///
///     fn make_class(&self, cache: &ClassCache, base: Option<&str>)
///         -> Result<ComponentClass, ConfigurationError>
///     {
///         let parent = cache.get_or_create(&Soda, base)?;
///         Ok(cache.factory().derive(&parent).with_strategy(FancyStrategy))
///     }
/// }
/// ```
pub trait Declaration {
    /// Stable identifier, part of the cache key
    fn id(&self) -> &str;

    fn make_class(
        &self,
        cache: &ClassCache,
        base: Option<&str>,
    ) -> Result<ComponentClass, ConfigurationError> {
        cache.factory().make_class(base)
    }
}

/// Default declaration: wholesale content replacement
#[derive(Debug, Clone, Copy, Default)]
pub struct Soda;

impl Declaration for Soda {
    fn id(&self) -> &str {
        "Soda"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> ComponentFactory {
        ComponentFactory::new(Config::default(), DocumentReady::new())
    }

    #[test]
    fn test_generic_base() {
        let class = factory().make_class(None).unwrap();
        assert_eq!(class.interface(), ElementInterface::HtmlElement);
        assert!(class.is_autonomous());

        let class = factory().make_class(Some("")).unwrap();
        assert_eq!(class.extends(), None);
    }

    #[test]
    fn test_builtin_base() {
        let class = factory().make_class(Some("Button")).unwrap();
        assert_eq!(class.interface(), ElementInterface::HtmlButtonElement);
        assert_eq!(class.extends(), Some("button"));
    }

    #[test]
    fn test_non_html_base_fails() {
        let err = factory().make_class(Some("svg")).unwrap_err();
        assert_eq!(err.interface, "SVGSVGElement");
        assert_eq!(err.to_string(), "SVGSVGElement does not inherit from HTMLElement (requested <svg>)");
    }

    #[test]
    fn test_ids_are_unique() {
        let factory = factory();
        let a = Rc::new(factory.make_class(None).unwrap());
        let b = factory.derive(&a);
        assert_ne!(a.id(), b.id());
        assert_eq!(b.parent().map(|p| p.id()), Some(a.id()));
    }
}
