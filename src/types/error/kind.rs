use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type name recorded for errors built from a caught panic.
pub(crate) const PANIC_TYPE_NAME: &str = "panic";

/// Type name recorded when a boxed error hides its concrete type.
pub(crate) const BOXED_TYPE_NAME: &str = "dyn core::error::Error";

/// Tag describing what kind of failure an [`Error`](super::Error) records.
///
/// Every variant behaves identically under equality and flattening; the
/// extra field only says where or how the failure happened.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// An expected, recoverable failure.
    #[default]
    Domain,
    /// A captured native error or panic.
    Exceptional(ExceptionInfo),
    /// A failure at a list position.
    Index { index: usize },
    /// A failure at a named member.
    Member { name: String },
    /// A failure inside a labelled context.
    Context { label: String },
}

impl ErrorKind {
    /// Returns the fieldless discriminant.
    #[inline]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Domain => ErrorClass::Domain,
            Self::Exceptional(_) => ErrorClass::Exceptional,
            Self::Index { .. } => ErrorClass::Index,
            Self::Member { .. } => ErrorClass::Member,
            Self::Context { .. } => ErrorClass::Context,
        }
    }
}

/// Fieldless discriminant of [`ErrorKind`], used to query error trees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Domain,
    Exceptional,
    Index,
    Member,
    Context,
}

/// Details of a native error captured into the error channel.
///
/// Equality and hashing consider the recorded type name only; the shared
/// handle to the original error is an identity and is not serialized.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ExceptionInfo {
    type_name: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    source: Option<Arc<dyn core::error::Error + Send + Sync>>,
}

impl ExceptionInfo {
    pub(crate) fn capture<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self { type_name: core::any::type_name::<E>().into(), source: Some(Arc::new(error)) }
    }

    pub(crate) fn from_boxed(error: Box<dyn core::error::Error + Send + Sync>) -> Self {
        Self { type_name: BOXED_TYPE_NAME.into(), source: Some(Arc::from(error)) }
    }

    #[cfg(feature = "std")]
    pub(crate) fn panic() -> Self {
        Self { type_name: PANIC_TYPE_NAME.into(), source: None }
    }

    /// Returns the Rust type name of the captured error, or `"panic"`.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `true` when this records a caught panic.
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.type_name == PANIC_TYPE_NAME
    }

    /// Returns the captured native error, if still attached.
    #[inline]
    pub fn source(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Attempts to view the captured native error as a concrete type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: core::error::Error + 'static,
    {
        self.source()?.downcast_ref::<E>()
    }
}

impl PartialEq for ExceptionInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl Eq for ExceptionInfo {}

impl Hash for ExceptionInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
    }
}
