/*!

Owning dynamic array of opaque blocks.

A `ManagedArray` stores values it owns outright. Every value enters as a copy made by the
array's `Lifecycle`, and every value that leaves (replaced by `set`, or still present when the
array is destroyed) is handed to `Lifecycle::release` exactly once. Operations that fail
(storage could not grow, a copy could not be made) leave the stored values untouched.

```
use memblk::{Block, BlockCopier, ManagedArray};

let mut array = ManagedArray::new(4, BlockCopier).unwrap();
array.add(&Block::from("hello")).unwrap();
array.add(&Block::from("world")).unwrap();
array.set(0, &Block::from("howdy")).unwrap();

let mut sizes = 0;
array.apply_with_context(0, 0, |block, total: &mut usize| *total += block.size(), &mut sizes);
assert_eq!(10, sizes);
```

*/

#[macro_use]
mod logging;
mod error;
mod block;
mod lifecycle;
mod array;
mod base;
mod iter;

pub use error::ArrayError;
pub use block::Block;
pub use lifecycle::{Lifecycle, FnLifecycle, CloneLifecycle, BlockCopier};
pub use array::{ManagedArray, ManagedArrayBuilder, MIN_CAPACITY};
pub use base::Base;
pub use iter::Iter;

#[cfg(test)]
pub mod counting;

#[cfg(test)]
mod elements;
