use alloc::vec::Vec;
use core::iter::FusedIterator;

use super::Error;

/// Lazy pre-order walk over one or more error trees.
///
/// Yields each error before its causes, and causes in insertion order.
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    pending: Option<&'a Error>,
    stack: Vec<core::slice::Iter<'a, Error>>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(root: &'a Error) -> Self {
        Self { pending: Some(root), stack: Vec::new() }
    }

    /// Walks every tree of `roots` in order.
    pub(crate) fn over(roots: &'a [Error]) -> Self {
        let mut stack = Vec::with_capacity(4);
        stack.push(roots.iter());
        Self { pending: None, stack }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending.take() {
            self.stack.push(root.inner_errors.iter());
            return Some(root);
        }

        while let Some(siblings) = self.stack.last_mut() {
            match siblings.next() {
                Some(error) => {
                    self.stack.push(error.inner_errors.iter());
                    return Some(error);
                },
                None => {
                    self.stack.pop();
                },
            }
        }

        None
    }
}

impl FusedIterator for Flatten<'_> {}
