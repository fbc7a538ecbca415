//! Sequential producers
//!
//! A lazy, finite, non-restartable sequence of content snapshots, pulled by
//! the update loop one step at a time until it reports completion.

use std::pin::Pin;

use smol::stream::{Stream, StreamExt};

use crate::{Content, LocalBoxFuture, RenderError};

/// One pull from a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A snapshot (or nothing) with more to come
    Yield(Option<Content>),
    /// The sequence is finished; a final snapshot is still applied
    Complete(Option<Content>),
}

impl Step {
    /// Split into the snapshot and whether the sequence is done
    pub fn into_parts(self) -> (Option<Content>, bool) {
        match self {
            Step::Yield(content) => (content, false),
            Step::Complete(content) => (content, true),
        }
    }
}

/// Pull-based producer of content snapshots
pub trait Sequence {
    /// Produce the next step. Not called again after [`Step::Complete`].
    fn next(&mut self) -> LocalBoxFuture<'_, Result<Step, RenderError>>;
}

/// Sequence over a synchronous iterator; completes when the iterator ends
#[derive(Debug)]
pub struct IterSequence<I> {
    iter: I,
}

impl<I> IterSequence<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Sequence for IterSequence<I>
where
    I: Iterator,
    I::Item: Into<Option<Content>>,
{
    fn next(&mut self) -> LocalBoxFuture<'_, Result<Step, RenderError>> {
        let step = match self.iter.next() {
            Some(item) => Step::Yield(item.into()),
            None => Step::Complete(None),
        };
        Box::pin(smol::future::ready(Ok(step)))
    }
}

/// Sequence over an async stream of fallible snapshots; the first error ends
/// the update
pub struct StreamSequence<S> {
    stream: Pin<Box<S>>,
}

impl<S> StreamSequence<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream: Box::pin(stream),
        }
    }
}

impl<S, T, E> Sequence for StreamSequence<S>
where
    S: Stream<Item = Result<T, E>>,
    T: Into<Option<Content>>,
    E: Into<RenderError>,
{
    fn next(&mut self) -> LocalBoxFuture<'_, Result<Step, RenderError>> {
        Box::pin(async move {
            match self.stream.next().await {
                Some(Ok(item)) => Ok(Step::Yield(item.into())),
                Some(Err(err)) => Err(err.into()),
                None => Ok(Step::Complete(None)),
            }
        })
    }
}
