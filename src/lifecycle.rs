use crate::Block;

/// How elements of a `ManagedArray` are copied in and disposed of.
///
/// The array calls `duplicate` whenever a value enters it (`add`, `set`) or is handed out
/// as an owned copy (`item_copy`), and `release` exactly once for every value it stops owning.
pub trait Lifecycle<T> {
    /// Returns an independent owned copy of `source`, or `None` if one could not be made.
    ///
    /// The copy must not share storage with `source`.
    fn duplicate(&self, source: &T) -> Option<T>;

    /// Disposes of a value previously produced by `duplicate`.
    fn release(&self, item: T) {
        std::mem::drop(item);
    }
}

/// Lifecycle built from a pair of closures or function pointers.
pub struct FnLifecycle<D, R> {
    duplicate: D,
    release: R,
}

impl<D, R> FnLifecycle<D, R> {
    pub fn new(duplicate: D, release: R) -> FnLifecycle<D, R> {
        FnLifecycle { duplicate, release }
    }
}

impl<T, D, R> Lifecycle<T> for FnLifecycle<D, R>
    where
        D: Fn(&T) -> Option<T>,
        R: Fn(T),
{
    #[inline(always)]
    fn duplicate(&self, source: &T) -> Option<T> {
        (self.duplicate)(source)
    }

    #[inline(always)]
    fn release(&self, item: T) {
        (self.release)(item)
    }
}

/// Duplicates with `Clone`, releases with `Drop`. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneLifecycle;

impl<T: Clone> Lifecycle<T> for CloneLifecycle {
    #[inline(always)]
    fn duplicate(&self, source: &T) -> Option<T> {
        Some(source.clone())
    }
}

/// Byte-for-byte copies of `Block`s, reporting allocation failure instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCopier;

impl Lifecycle<Block> for BlockCopier {
    fn duplicate(&self, source: &Block) -> Option<Block> {
        let copy = Block::try_copy_from(source.as_bytes());
        trace!("duplicate block of {} bytes: {}", source.size(), copy.is_some());
        copy
    }

    fn release(&self, item: Block) {
        trace!("release block of {} bytes", item.size());
        std::mem::drop(item);
    }
}
