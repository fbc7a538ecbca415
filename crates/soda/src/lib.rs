//! Soda - a thin wrapper around custom elements
//!
//! Turns a plain hook implementation into a reusable component without
//! hand-written lifecycle plumbing.
//!
//! * [`ClassCache`] memoizes one generated [`ComponentClass`] per
//!   (declaration, base element) pair.
//! * [`ComponentFactory`] builds those classes: shadow root decision,
//!   lifecycle bridge and the update engine.
//! * [`Component::update`] runs the `render -> replace` pipeline. A render
//!   hook may return a value, a deferred value, or a [`Sequence`] of
//!   snapshots (e.g. "Loading..." followed by the final content).
//!
//! # Example
//! ```rust,ignore
//! use soda::{ClassCache, Config, Hooks, Host, Render, Soda};
//!
//! struct Greeting;
//!
//! impl Hooks for Greeting {
//!     fn render<'a>(&'a self, _host: &'a Host) -> Render<'a> {
//!         Render::value("Hello")
//!     }
//! }
//!
//! let cache = ClassCache::for_document(&document.borrow(), Config::default());
//! let class = cache.get_or_create(&Soda, None)?;
//! let greeting = class.register(&mut registry, "x-greeting")?;
//! let component = greeting.construct(&document, Greeting)?;
//! smol::block_on(component.update())?;
//! ```

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

mod config;
mod error;
mod content;
mod replace;
mod sequence;
mod hooks;
mod component;
mod class;
mod factory;
mod cache;
mod runtime;

pub use config::Config;
pub use error::{ConfigurationError, RenderError, ReplaceError, UpdateError};
pub use content::{Content, Piece};
pub use replace::{ReplaceChildren, ReplaceStrategy};
pub use sequence::{IterSequence, Sequence, Step, StreamSequence};
pub use hooks::{Hooks, Render};
pub use component::{Component, Host, LifecycleBridge};
pub use class::{kebab_case, ComponentClass, Registration};
pub use factory::{ComponentFactory, Declaration, Soda};
pub use cache::{CacheKey, ClassCache};
pub use runtime::Runtime;

pub use soda_dom as dom;

/// Document shared between the runtime, components and strategies
pub type SharedDocument = Rc<RefCell<soda_dom::Document>>;

/// Boxed `!Send` future
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
