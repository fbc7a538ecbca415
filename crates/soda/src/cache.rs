//! Class Cache
//!
//! Memoizes generated classes so that asking twice for the same
//! (declaration, base element) pair yields the same class object and the
//! registry never sees duplicates.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use soda_dom::Document;

use crate::{ComponentClass, ComponentFactory, Config, ConfigurationError, Declaration};

/// Identity token for one (declaration, base element) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

/// Registry of generated classes, created once and passed around
#[derive(Debug)]
pub struct ClassCache {
    factory: ComponentFactory,
    keys: RefCell<HashMap<String, CacheKey>>,
    classes: RefCell<HashMap<CacheKey, Rc<ComponentClass>>>,
}

impl ClassCache {
    pub fn new(factory: ComponentFactory) -> Self {
        Self {
            factory,
            keys: RefCell::new(HashMap::new()),
            classes: RefCell::new(HashMap::new()),
        }
    }

    /// Cache whose classes share `document`'s ready signal
    pub fn for_document(document: &Document, config: Config) -> Self {
        Self::new(ComponentFactory::new(config, document.ready().clone()))
    }

    pub fn factory(&self) -> &ComponentFactory {
        &self.factory
    }

    /// Class for `declaration` extending `base`, generated on first request
    pub fn get_or_create(
        &self,
        declaration: &dyn Declaration,
        base: Option<&str>,
    ) -> Result<Rc<ComponentClass>, ConfigurationError> {
        let key = self.mint(declaration.id(), base);

        if let Some(class) = self.classes.borrow().get(&key) {
            tracing::trace!("Class cache hit for {:?}", key);
            return Ok(Rc::clone(class));
        }

        // No borrow is held here: make_class may come back for another class
        let class = Rc::new(declaration.make_class(self, base)?);
        let class = Rc::clone(self.classes.borrow_mut().entry(key).or_insert(class));
        tracing::debug!(
            "Cached class #{} for {}:{}",
            class.id(),
            declaration.id(),
            base.unwrap_or_default()
        );
        Ok(class)
    }

    /// Token minted for a pair, if it was ever requested
    pub fn key_for(&self, declaring_id: &str, base: Option<&str>) -> Option<CacheKey> {
        self.keys.borrow().get(&Self::composite(declaring_id, base)).copied()
    }

    /// Number of generated classes
    pub fn len(&self) -> usize {
        self.classes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.borrow().is_empty()
    }

    fn composite(declaring_id: &str, base: Option<&str>) -> String {
        format!("{}:{}", declaring_id, base.unwrap_or_default())
    }

    fn mint(&self, declaring_id: &str, base: Option<&str>) -> CacheKey {
        let mut keys = self.keys.borrow_mut();
        let next = CacheKey(keys.len() as u64);
        *keys.entry(Self::composite(declaring_id, base)).or_insert(next)
    }
}
