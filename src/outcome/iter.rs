use crate::outcome::Outcome;
use crate::types::Error;

/// Iterator over a borrowed success value; yields at most once.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Outcome<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Outcome<T> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::ok(5);
    /// assert_eq!(ok.iter().copied().sum::<i32>(), 5);
    ///
    /// let failed = Outcome::<i32>::fail("x");
    /// assert_eq!(failed.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Self::Ok(value) => IterMut { inner: Some(value) },
            Self::Errored(_) => IterMut { inner: None },
        }
    }

    /// Iterates over the top-level errors; empty on success.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, Error> {
        self.errors().iter()
    }
}
