//! Tree-shaped error values.
//!
//! An [`Error`] carries a message, an ordered list of inner errors (its causes)
//! and an [`ErrorKind`] tag. Trees are built bottom-up and never mutated in
//! place: every combinator consumes the value and returns a new one.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ErrorFormatConfig;

mod flatten;
mod kind;
mod traits;

pub use flatten::Flatten;
pub use kind::{ErrorClass, ErrorKind, ExceptionInfo};

/// Immutable node in a failure-cause tree.
///
/// Two errors are equal when their messages, kinds and every inner error
/// (recursively, in order) are equal.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let leaf = Error::new("Too young");
/// let tree = Error::with_causes("invalid person", [leaf.clone()]);
///
/// assert_eq!(tree.inner_errors(), &[leaf]);
/// assert_eq!(tree, Error::new("invalid person").with_root_cause(Error::new("Too young")));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub(crate) message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) inner_errors: Vec<Error>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) kind: ErrorKind,
}

impl Error {
    /// Creates a leaf domain error.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), inner_errors: Vec::new(), kind: ErrorKind::Domain }
    }

    /// Creates a domain error with the given causes.
    ///
    /// This is the canonical `(message, inner errors)` constructor.
    #[inline]
    pub fn with_causes<S, I>(message: S, causes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Error>,
    {
        Self {
            message: message.into(),
            inner_errors: causes.into_iter().collect(),
            kind: ErrorKind::Domain,
        }
    }

    /// Wraps a native error value, keeping a shared handle to it.
    ///
    /// The message is the native error's `Display` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, ErrorClass};
    ///
    /// let parse = "x".parse::<i32>().unwrap_err();
    /// let err = Error::exceptional(parse.clone());
    ///
    /// assert_eq!(err.class(), ErrorClass::Exceptional);
    /// assert_eq!(err.message(), parse.to_string());
    /// assert_eq!(
    ///     err.exception().and_then(|e| e.downcast_ref::<std::num::ParseIntError>()),
    ///     Some(&parse)
    /// );
    /// ```
    pub fn exceptional<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            inner_errors: Vec::new(),
            kind: ErrorKind::Exceptional(ExceptionInfo::capture(error)),
        }
    }

    /// Wraps an already boxed native error.
    pub fn exceptional_boxed(error: Box<dyn core::error::Error + Send + Sync>) -> Self {
        Self {
            message: error.to_string(),
            inner_errors: Vec::new(),
            kind: ErrorKind::Exceptional(ExceptionInfo::from_boxed(error)),
        }
    }

    /// Builds an exceptional error from a caught panic payload.
    #[cfg(feature = "std")]
    pub fn panic(payload: Box<dyn core::any::Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic with a non-string payload".to_string()
        };

        Self {
            message,
            inner_errors: Vec::new(),
            kind: ErrorKind::Exceptional(ExceptionInfo::panic()),
        }
    }

    /// Creates an error tagged with the list position where `causes` occurred.
    #[inline]
    pub fn index<S, I>(index: usize, message: S, causes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Error>,
    {
        Self::with_causes(message, causes).with_kind(ErrorKind::Index { index })
    }

    /// Creates an error tagged with the member (field) name where `causes` occurred.
    #[inline]
    pub fn member<N, S, I>(name: N, message: S, causes: I) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = Error>,
    {
        Self::with_causes(message, causes).with_kind(ErrorKind::Member { name: name.into() })
    }

    /// Creates an error tagged with a validation or call context label.
    #[inline]
    pub fn context<L, S, I>(label: L, message: S, causes: I) -> Self
    where
        L: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = Error>,
    {
        Self::with_causes(message, causes).with_kind(ErrorKind::Context { label: label.into() })
    }

    /// Replaces the kind tag.
    #[inline]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns a new error whose causes are extended by `cause`.
    #[inline]
    pub fn with_root_cause(mut self, cause: Error) -> Self {
        self.inner_errors.push(cause);
        self
    }

    /// Returns a new error whose causes are extended by every item of `causes`.
    #[inline]
    pub fn with_root_causes<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        self.inner_errors.extend(causes);
        self
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the direct causes in insertion order.
    #[inline]
    pub fn inner_errors(&self) -> &[Error] {
        &self.inner_errors
    }

    /// Returns the kind tag.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the fieldless discriminant of the kind tag.
    #[inline]
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Returns the list position for index errors.
    #[inline]
    pub fn index_of(&self) -> Option<usize> {
        match self.kind {
            ErrorKind::Index { index } => Some(index),
            _ => None,
        }
    }

    /// Returns the member name for member errors.
    #[inline]
    pub fn member_name(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Member { name } => Some(name),
            _ => None,
        }
    }

    /// Returns the label for context errors.
    #[inline]
    pub fn context_label(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Context { label } => Some(label),
            _ => None,
        }
    }

    /// Returns the captured native error details for exceptional errors.
    #[inline]
    pub fn exception(&self) -> Option<&ExceptionInfo> {
        match &self.kind {
            ErrorKind::Exceptional(info) => Some(info),
            _ => None,
        }
    }

    /// Walks this error and all descendants in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let tree = Error::with_causes("a", [
    ///     Error::with_causes("b", [Error::new("c")]),
    ///     Error::new("d"),
    /// ]);
    ///
    /// let order: Vec<_> = tree.flatten().map(|e| e.message()).collect();
    /// assert_eq!(order, ["a", "b", "c", "d"]);
    /// ```
    #[inline]
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(self)
    }

    /// Returns `true` if this tree contains an error of the given class.
    #[inline]
    pub fn contains(&self, class: ErrorClass) -> bool {
        self.flatten().any(|error| error.class() == class)
    }

    /// Returns `true` if this tree contains an error of the given class
    /// that also satisfies `predicate`.
    #[inline]
    pub fn contains_where<F>(&self, class: ErrorClass, mut predicate: F) -> bool
    where
        F: FnMut(&Error) -> bool,
    {
        self.flatten().any(|error| error.class() == class && predicate(error))
    }

    /// Renders the tree using a custom formatting configuration.
    #[must_use]
    pub fn format_with(&self, config: &ErrorFormatConfig) -> String {
        config.render(self)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
