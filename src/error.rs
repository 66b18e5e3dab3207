use std::collections::TryReserveError;
use thiserror::Error;

/// Recoverable failure of a mutating `ManagedArray` operation.
///
/// Whenever one of these is returned, the live content of the array is exactly what
/// it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Backing storage could not be allocated or grown.
    #[error("backing storage allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    /// Growing would exceed the configured capacity limit.
    #[error("capacity {requested} exceeds the configured limit of {limit}")]
    CapacityLimit { requested: usize, limit: usize },
    /// The lifecycle could not produce a copy of the input.
    #[error("duplicate failed to produce a block")]
    DuplicateFailed,
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
