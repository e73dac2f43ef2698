/// Combines a tuple of options into an option of a tuple.
///
/// Implemented for tuples of two to five options. The result is `Some` only
/// if every member is `Some`.
///
/// # Examples
///
/// ```
/// use outcome_rail::ZipOptions;
///
/// assert_eq!((Some(1), Some(2), Some(3)).zip_all(), Some((1, 2, 3)));
/// assert_eq!((Some(1), None::<i32>, Some(3)).zip_all(), None);
/// ```
pub trait ZipOptions {
    type Output;

    fn zip_all(self) -> Option<Self::Output>;
}

macro_rules! impl_zip_options {
    ($(($T:ident, $v:ident)),+) => {
        impl<$($T),+> ZipOptions for ($(Option<$T>,)+) {
            type Output = ($($T,)+);

            #[inline]
            fn zip_all(self) -> Option<Self::Output> {
                let ($($v,)+) = self;
                Some(($($v?,)+))
            }
        }
    };
}

impl_zip_options!((A, a), (B, b));
impl_zip_options!((A, a), (B, b), (C, c));
impl_zip_options!((A, a), (B, b), (C, c), (D, d));
impl_zip_options!((A, a), (B, b), (C, c), (D, d), (E, e));
