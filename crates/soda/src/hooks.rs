//! User-facing hooks
//!
//! Every hook has a no-op default, so a component implements only what it
//! needs. The render hook picks its shape through the returned [`Render`].

use std::fmt;
use std::future::Future;

use smol::stream::Stream;

use crate::sequence::{IterSequence, Sequence, StreamSequence};
use crate::{Content, Host, LocalBoxFuture, RenderError};

/// Output of a render hook
pub enum Render<'a> {
    /// Content available right away; `None` leaves the root as-is
    Value(Option<Content>),
    /// Content available later
    Deferred(LocalBoxFuture<'a, Result<Option<Content>, RenderError>>),
    /// Several snapshots applied one after another
    Sequence(Box<dyn Sequence + 'a>),
}

impl<'a> Render<'a> {
    /// No content: nothing is replaced
    pub fn empty() -> Self {
        Render::Value(None)
    }

    pub fn value(content: impl Into<Content>) -> Self {
        Render::Value(Some(content.into()))
    }

    pub fn deferred<F, T, E>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + 'a,
        T: Into<Option<Content>>,
        E: Into<RenderError>,
    {
        Render::Deferred(Box::pin(async move {
            match future.await {
                Ok(content) => Ok(content.into()),
                Err(err) => Err(err.into()),
            }
        }))
    }

    pub fn sequence(sequence: impl Sequence + 'a) -> Self {
        Render::Sequence(Box::new(sequence))
    }

    /// Sequence over already known snapshots
    pub fn iter<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Option<Content>>,
    {
        Self::sequence(IterSequence::new(items.into_iter()))
    }

    /// Sequence over an async stream
    pub fn stream<S, T, E>(stream: S) -> Self
    where
        S: Stream<Item = Result<T, E>> + 'a,
        T: Into<Option<Content>>,
        E: Into<RenderError>,
    {
        Self::sequence(StreamSequence::new(stream))
    }
}

impl Default for Render<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Render::Value(content) => f.debug_tuple("Value").field(content).finish(),
            Render::Deferred(_) => f.write_str("Deferred(..)"),
            Render::Sequence(_) => f.write_str("Sequence(..)"),
        }
    }
}

/// Component hooks
///
/// Lifecycle hooks are only reached through the bridge on [`crate::Component`]:
/// `connected` is skipped when the host reports the element is not actually
/// connected any more.
pub trait Hooks {
    /// Whether to attach a shadow root. Asked once, during construction.
    fn use_shadow(&self) -> bool {
        false
    }

    fn connected(&self, _host: &Host) {}

    fn disconnected(&self, _host: &Host) {}

    /// Only fires for observed attributes
    fn attribute_changed(
        &self,
        _host: &Host,
        _name: &str,
        _old_value: Option<&str>,
        _new_value: Option<&str>,
    ) {
    }

    fn adopted(&self, _host: &Host) {}

    /// Build the component's content
    fn render<'a>(&'a self, _host: &'a Host) -> Render<'a> {
        Render::empty()
    }

    /// Runs once per successful update, after every replacement
    fn after_update(&self, _host: &Host) {}
}
