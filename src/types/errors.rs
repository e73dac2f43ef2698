use alloc::vec::Vec;
use core::fmt::Display;
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Error, ErrorClass, ErrorVec, Flatten};

/// Non-empty, ordered list of errors carried by a failed
/// [`Outcome`](crate::Outcome).
///
/// Every constructor guarantees at least one error, so [`Errors::first`]
/// never fails. Deserializing an empty list is rejected with [`EmptyErrors`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Errors};
///
/// let errors = Errors::try_from_iter([Error::new("a"), Error::new("b")]).unwrap();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().message(), "a");
///
/// assert!(Errors::try_from_iter(Vec::<Error>::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Error>", into = "Vec<Error>"))]
pub struct Errors {
    items: ErrorVec<Error>,
}

#[allow(clippy::len_without_is_empty)]
impl Errors {
    /// Creates a list holding exactly one error.
    #[inline]
    pub fn single(error: Error) -> Self {
        let mut items = ErrorVec::new();
        items.push(error);
        Self { items }
    }

    /// Collects errors, returning `None` when the iterator is empty.
    #[inline]
    pub fn try_from_iter<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        let items: ErrorVec<Error> = errors.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Returns the first error.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.items[0]
    }

    /// Returns the number of top-level errors (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the top-level errors.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Returns the top-level errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    /// Consumes the list, returning the errors as a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<Error> {
        self.items.into_vec()
    }

    /// Appends every error of `other`, keeping order.
    #[inline]
    pub fn append(&mut self, other: Errors) {
        self.items.extend(other.items);
    }

    /// Walks every top-level error tree in pre-order.
    #[inline]
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::over(&self.items)
    }

    /// Returns `true` if any tree contains an error of the given class.
    #[inline]
    pub fn contains(&self, class: ErrorClass) -> bool {
        self.flatten().any(|error| error.class() == class)
    }

    /// Returns `true` if any tree contains an error of the given class that
    /// satisfies `predicate`.
    #[inline]
    pub fn contains_where<F>(&self, class: ErrorClass, mut predicate: F) -> bool
    where
        F: FnMut(&Error) -> bool,
    {
        self.flatten().any(|error| error.class() == class && predicate(error))
    }

    /// Projects every top-level error; causes are not visited.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        Self { items: self.items.into_iter().map(f).collect() }
    }
}

/// Accumulates `errors` into `acc`, starting a new list when `acc` is empty.
#[inline]
pub(crate) fn accumulate(acc: &mut Option<Errors>, errors: Errors) {
    match acc {
        Some(existing) => existing.append(errors),
        None => *acc = Some(errors),
    }
}

impl Deref for Errors {
    type Target = [Error];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl AsRef<[Error]> for Errors {
    #[inline]
    fn as_ref(&self) -> &[Error] {
        &self.items
    }
}

impl From<Error> for Errors {
    #[inline]
    fn from(error: Error) -> Self {
        Self::single(error)
    }
}

impl TryFrom<Vec<Error>> for Errors {
    type Error = EmptyErrors;

    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::try_from_iter(errors).ok_or(EmptyErrors)
    }
}

impl From<Errors> for Vec<Error> {
    #[inline]
    fn from(errors: Errors) -> Self {
        errors.into_vec()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, error) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(if f.alternate() { "\n" } else { "; " })?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl core::error::Error for Errors {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(self.first() as &(dyn core::error::Error + 'static))
    }
}

/// Returned when an error list would be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("an error list must contain at least one error")
    }
}

impl core::error::Error for EmptyErrors {}
