//! Error types
//!
//! Failures from user hooks are carried as [`anyhow::Error`] so the caller of
//! `update()` can downcast back to the exact error the hook produced.

use std::fmt::{Debug, Display};

/// Failure raised by a render hook or its deferred value
pub type RenderError = anyhow::Error;

/// Failure raised by a replacement strategy
pub type ReplaceError = anyhow::Error;

/// Requested base element does not derive from `HTMLElement`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{interface} does not inherit from HTMLElement (requested <{tag}>)")]
pub struct ConfigurationError {
    pub tag: String,
    pub interface: &'static str,
}

/// Failure of a single `update()` call
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error(transparent)]
    Render(RenderError),

    #[error(transparent)]
    Replace(ReplaceError),
}

impl UpdateError {
    /// The hook or strategy error, unchanged
    pub fn inner(&self) -> &anyhow::Error {
        match self {
            Self::Render(err) | Self::Replace(err) => err,
        }
    }

    pub fn into_inner(self) -> anyhow::Error {
        match self {
            Self::Render(err) | Self::Replace(err) => err,
        }
    }

    /// Downcast to the concrete error the hook or strategy returned
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner().downcast_ref::<E>()
    }
}
