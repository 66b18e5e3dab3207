use crate::{ArrayError, Base, FnLifecycle, Lifecycle};

/// Capacity floor applied to every new array unless configured otherwise.
pub const MIN_CAPACITY: usize = 4;

/// Configures and creates a `ManagedArray`.
#[derive(Debug, Clone)]
pub struct ManagedArrayBuilder {
    initial_capacity: usize,
    min_capacity: usize,
    capacity_limit: Option<usize>,
}

impl Default for ManagedArrayBuilder {
    fn default() -> Self {
        ManagedArrayBuilder {
            initial_capacity: 0,
            min_capacity: MIN_CAPACITY,
            capacity_limit: None,
        }
    }
}

impl ManagedArrayBuilder {
    pub fn new() -> ManagedArrayBuilder {
        ManagedArrayBuilder::default()
    }

    /// Capacity hint. Values below the floor are raised to it.
    pub fn initial_capacity(mut self, capacity: usize) -> ManagedArrayBuilder {
        self.initial_capacity = capacity;
        self
    }

    /// Replaces the default floor of `MIN_CAPACITY`. Panics on zero.
    pub fn min_capacity(mut self, floor: usize) -> ManagedArrayBuilder {
        assert!(floor > 0, "capacity floor must be at least 1");
        self.min_capacity = floor;
        self
    }

    /// Largest capacity the array may ever grow to.
    pub fn capacity_limit(mut self, limit: usize) -> ManagedArrayBuilder {
        self.capacity_limit = Some(limit);
        self
    }

    /// Allocates storage and returns an empty array bound to `lifecycle`.
    pub fn build<T, L>(self, lifecycle: L) -> Result<ManagedArray<T, L>, ArrayError>
        where L: Lifecycle<T>
    {
        let capacity = self.initial_capacity.max(self.min_capacity);
        if let Some(limit) = self.capacity_limit {
            if capacity > limit {
                warn!("refusing initial capacity {} above limit {}", capacity, limit);
                return Err(ArrayError::CapacityLimit { requested: capacity, limit });
            }
        }

        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        debug!("create managed array with capacity {}", capacity);

        Ok(ManagedArray {
            items,
            capacity,
            capacity_limit: self.capacity_limit,
            lifecycle,
        })
    }
}

/// Growable array that owns every element it holds.
///
/// Values enter only as copies made by the array's `Lifecycle`, and every value the array
/// stops owning is handed back to `Lifecycle::release`, once. Mutating calls that fail leave
/// the stored values exactly as they were.
///
/// Capacity starts at the requested hint, never below `MIN_CAPACITY`, and when the array is
/// full grows to `(capacity + 2) * 2`. It never shrinks.
///
/// References obtained from `item`, `as_slice` or `base` borrow the array, so the compiler
/// rejects any mutation while they are alive:
///
/// ```compile_fail
/// use memblk::{CloneLifecycle, ManagedArray};
///
/// let mut array = ManagedArray::new(4, CloneLifecycle).unwrap();
/// array.add(&1u32).unwrap();
/// let first = array.item(0).unwrap();
/// array.add(&2u32).unwrap();
/// println!("{}", first);
/// ```
pub struct ManagedArray<T, L> where L: Lifecycle<T> {
    items: Vec<T>,
    capacity: usize,
    capacity_limit: Option<usize>,
    lifecycle: L,
}

impl<T, L> ManagedArray<T, L> where L: Lifecycle<T> {
    /// Creates an array with the default floor and no capacity limit.
    pub fn new(initial_capacity: usize, lifecycle: L) -> Result<ManagedArray<T, L>, ArrayError> {
        ManagedArrayBuilder::new()
            .initial_capacity(initial_capacity)
            .build(lifecycle)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    /// Appends a copy of `item`.
    ///
    /// Storage grows first if the array is full. If the copy then fails, the array keeps
    /// the larger capacity but its length and content are unchanged.
    pub fn add(&mut self, item: &T) -> Result<(), ArrayError> {
        self.grow_if_full()?;
        let copy = self.duplicate(item)?;
        self.items.push(copy);
        Ok(())
    }

    /// Replaces the value at `index` with a copy of `item` and releases the old value.
    ///
    /// The copy is made before anything is released, so a failed copy leaves the old value
    /// in place.
    pub fn set(&mut self, index: usize, item: &T) -> Result<(), ArrayError> {
        let len = self.items.len();
        if index >= len {
            return Err(ArrayError::IndexOutOfRange { index, len });
        }
        let copy = self.duplicate(item)?;
        let old = std::mem::replace(&mut self.items[index], copy);
        self.lifecycle.release(old);
        Ok(())
    }

    /// Borrows the value at `index`.
    #[inline(always)]
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns an owned copy of the value at `index`.
    ///
    /// `None` means the index is out of range or the copy failed. The caller owns the result
    /// and should eventually pass it to `Lifecycle::release`.
    pub fn item_copy(&self, index: usize) -> Option<T> {
        self.items.get(index).and_then(|item| self.lifecycle.duplicate(item))
    }

    /// The live values, in index order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A view of the live values that can reorder them but never replace them.
    pub fn base(&mut self) -> Base<'_, T> {
        Base::new(&mut self.items)
    }

    /// Releases every value in index order and frees the storage.
    ///
    /// Dropping the array does the same; this just makes the end of life explicit.
    pub fn destroy(self) {
        trace!("destroy managed array of {} items", self.items.len());
        std::mem::drop(self);
    }

    fn duplicate(&self, item: &T) -> Result<T, ArrayError> {
        self.lifecycle.duplicate(item).ok_or_else(|| {
            warn!("duplicate failed at length {}", self.items.len());
            ArrayError::DuplicateFailed
        })
    }

    fn grow_if_full(&mut self) -> Result<(), ArrayError> {
        if self.items.len() < self.capacity {
            return Ok(());
        }

        let requested = self.capacity.saturating_add(2).saturating_mul(2);
        let new_capacity = match self.capacity_limit {
            Some(limit) if requested > limit => {
                if limit <= self.capacity {
                    warn!("capacity limit {} reached", limit);
                    return Err(ArrayError::CapacityLimit { requested, limit });
                }
                limit
            }
            _ => requested,
        };

        // try_reserve_exact leaves the vector untouched on failure.
        self.items.try_reserve_exact(new_capacity - self.items.len())?;
        debug!("grow managed array capacity {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T, D, R> ManagedArray<T, FnLifecycle<D, R>>
    where
        D: Fn(&T) -> Option<T>,
        R: Fn(T),
{
    /// Creates an array whose lifecycle is a `(duplicate, release)` pair of functions.
    pub fn with_callbacks(initial_capacity: usize, duplicate: D, release: R) -> Result<Self, ArrayError> {
        ManagedArray::new(initial_capacity, FnLifecycle::new(duplicate, release))
    }
}

impl<T, L> Drop for ManagedArray<T, L> where L: Lifecycle<T> {
    fn drop(&mut self) {
        let items = std::mem::take(&mut self.items);
        trace!("release {} items", items.len());
        for item in items {
            self.lifecycle.release(item);
        }
    }
}

impl<T, L> std::fmt::Debug for ManagedArray<T, L> where T: std::fmt::Debug, L: Lifecycle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
