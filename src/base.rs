use std::cmp::Ordering;
use std::ops::Deref;

/// Borrowed view of a `ManagedArray`'s live values that may only move them around.
///
/// It reads like a slice, but the only mutations it offers are whole-element moves
/// (swaps, rotations, sorts), so values never need to be duplicated or released through it.
/// There is no way to overwrite an element here; use `ManagedArray::set` for that.
///
/// ```compile_fail
/// use memblk::{CloneLifecycle, ManagedArray};
///
/// let mut array = ManagedArray::new(4, CloneLifecycle).unwrap();
/// array.add(&1u32).unwrap();
/// let mut base = array.base();
/// base[0] = 7;
/// ```
pub struct Base<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> Base<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Base<'a, T> {
        Base { items }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.items
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b)
    }

    pub fn reverse(&mut self) {
        self.items.reverse()
    }

    pub fn rotate_left(&mut self, mid: usize) {
        self.items.rotate_left(mid)
    }

    pub fn rotate_right(&mut self, k: usize) {
        self.items.rotate_right(k)
    }

    /// Stable sort with a comparator.
    pub fn sort_by<F>(&mut self, compare: F) where F: FnMut(&T, &T) -> Ordering {
        self.items.sort_by(compare)
    }

    pub fn sort_by_key<K, F>(&mut self, key: F) where F: FnMut(&T) -> K, K: Ord {
        self.items.sort_by_key(key)
    }

    pub fn sort_unstable_by<F>(&mut self, compare: F) where F: FnMut(&T, &T) -> Ordering {
        self.items.sort_unstable_by(compare)
    }
}

impl<'a, T> Deref for Base<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}
