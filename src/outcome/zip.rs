//! Zipping tuples of independent outcomes.

use crate::outcome::Outcome;

/// Combines a tuple of independent outcomes, accumulating every error.
///
/// Implemented for tuples of two to five outcomes. All members are
/// evaluated before the call, so no member is skipped; errors appear in
/// argument order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome, ZipOutcomes};
///
/// let sum = (Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)).zip_with(|(a, b, c)| a + b + c);
/// assert_eq!(sum, Outcome::ok(6));
///
/// let failed = (Outcome::<i32>::fail("first"), Outcome::ok(2), Outcome::<i32>::fail("third"))
///     .zip_all();
/// assert_eq!(failed.errors(), &[Error::new("first"), Error::new("third")]);
/// ```
pub trait ZipOutcomes {
    /// Tuple of the success values.
    type Output;

    /// Succeeds with all values when every member succeeded.
    fn zip_all(self) -> Outcome<Self::Output>;

    /// Zips the members and applies `zipper` to the values on success.
    fn zip_with<R, F>(self, zipper: F) -> Outcome<R>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> R,
    {
        self.zip_all().map(zipper)
    }
}

macro_rules! impl_zip_outcomes {
    (($($T:ident),+), $a:ident, $($rest:ident),+ => $nested:pat => $flat:expr) => {
        impl<$($T),+> ZipOutcomes for ($(Outcome<$T>,)+) {
            type Output = ($($T,)+);

            fn zip_all(self) -> Outcome<Self::Output> {
                let ($a, $($rest),+) = self;
                $a$(.zip($rest))+.map(|$nested| $flat)
            }
        }
    };
}

impl_zip_outcomes!((A, B), a, b => (a, b) => (a, b));
impl_zip_outcomes!((A, B, C), a, b, c => ((a, b), c) => (a, b, c));
impl_zip_outcomes!((A, B, C, D), a, b, c, d => (((a, b), c), d) => (a, b, c, d));
impl_zip_outcomes!((A, B, C, D, E), a, b, c, d, e => ((((a, b), c), d), e) => (a, b, c, d, e));
