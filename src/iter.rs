use crate::{Lifecycle, ManagedArray};
use std::ops::Range;

/// Turns the `(begin, end)` pair used by the iteration calls into a range.
///
/// `end == 0` stands for the current length. Anything else must satisfy
/// `begin <= end <= len`; violating that is a bug in the caller and panics.
fn span(len: usize, begin: usize, end: usize) -> Range<usize> {
    let end = if end == 0 { len } else { end };
    assert!(begin <= end, "iteration begin {} is past end {}", begin, end);
    assert!(end <= len, "iteration end {} is past length {}", end, len);
    begin..end
}

impl<T, L> ManagedArray<T, L> where L: Lifecycle<T> {
    /// Calls `visit` for each value in `[begin, end)` in index order. `end == 0` means the
    /// current length.
    ///
    /// Panics if `begin > end` or `end > len()`.
    pub fn apply<F>(&self, begin: usize, end: usize, mut visit: F) where F: FnMut(&T) {
        for item in self.range(begin, end) {
            visit(item);
        }
    }

    /// Like `apply`, and also threads `context` through every call.
    pub fn apply_with_context<C, F>(&self, begin: usize, end: usize, mut visit: F, context: &mut C)
        where
            F: FnMut(&T, &mut C),
            C: ?Sized,
    {
        for item in self.range(begin, end) {
            visit(item, &mut *context);
        }
    }

    /// Iterates over `[begin, end)` with the same bounds rules as `apply`.
    pub fn range(&self, begin: usize, end: usize) -> Iter<'_, T> {
        let span = span(self.len(), begin, end);
        Iter {
            inner: self.as_slice()[span].iter(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }
}

impl<'a, T, L> IntoIterator for &'a ManagedArray<T, L> where L: Lifecycle<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a `ManagedArray`.
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}
