// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The failure side of span computation.
//!
//! There is exactly one error type, [`SpanError`], whose [`FailureKind`] says *why* a span could not be computed.
//! As the error travels outward, each layer (ray, algorithm, rank) pushes a [`Frame`] naming itself, so the final
//! error reads like a small backtrace while the original coordinate failure stays available as the `source`.

use std::{error::Error as StdError, fmt};

use thiserror::Error;

use crate::core::CoordError;

pub type SpanResult<T> = Result<T, SpanError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// The coordinate service rejected a vector.
    #[error("coordinate arithmetic failed")]
    Arithmetic,
    /// A stateful rank was handed a token whose state matches no known route.
    #[error("no computation route for token state")]
    UnhandledState,
    /// The token does not satisfy the rank's preconditions.
    #[error("token precondition failed")]
    Precondition,
    /// Something that should never happen did.
    #[error("internal error")]
    Internal,
}

/// One step of context attached to a [`SpanError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub component: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanError {
    kind: FailureKind,
    /// Innermost frame first.
    frames: Vec<Frame>,
    cause: Option<CoordError>,
}

impl SpanError {
    pub fn new(kind: FailureKind, component: &'static str, message: impl Into<String>) -> SpanError {
        SpanError {
            kind,
            frames: vec![Frame {
                component,
                message: message.into(),
            }],
            cause: None,
        }
    }

    pub fn arithmetic(cause: CoordError) -> SpanError {
        SpanError {
            kind: FailureKind::Arithmetic,
            frames: vec![],
            cause: Some(cause),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn cause(&self) -> Option<&CoordError> {
        self.cause.as_ref()
    }

    /// Returns the components this error passed through, outermost first.
    pub fn components(&self) -> Vec<&'static str> {
        self.frames.iter().rev().map(|f| f.component).collect()
    }

    pub fn context(mut self, component: &'static str, message: impl Into<String>) -> SpanError {
        self.frames.push(Frame {
            component,
            message: message.into(),
        });
        self
    }
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.frames.iter().rev() {
            write!(f, "{}: {}: ", frame.component, frame.message)?;
        }

        write!(f, "{}", self.kind)?;
        if let Some(ref cause) = self.cause {
            write!(f, " ({})", cause)?;
        }

        Ok(())
    }
}

impl StdError for SpanError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|c| c as &(dyn StdError + 'static))
    }
}

impl From<CoordError> for SpanError {
    fn from(cause: CoordError) -> Self {
        SpanError::arithmetic(cause)
    }
}

/// Attaches a [`Frame`] to the error side of a result.
pub trait SpanContext<T> {
    fn context(self, component: &'static str, message: &str) -> SpanResult<T>;

    fn with_context<F: FnOnce() -> String>(self, component: &'static str, message: F) -> SpanResult<T>;
}

impl<T, E: Into<SpanError>> SpanContext<T> for Result<T, E> {
    fn context(self, component: &'static str, message: &str) -> SpanResult<T> {
        self.map_err(|e| e.into().context(component, message))
    }

    fn with_context<F: FnOnce() -> String>(self, component: &'static str, message: F) -> SpanResult<T> {
        self.map_err(|e| e.into().context(component, message()))
    }
}
