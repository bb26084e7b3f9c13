use thiserror::Error;

/// Error types for `DynVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// The allocator refused to provide a buffer of the requested size
    #[error("Allocation failed: could not allocate {requested} slots")]
    AllocationFailed {
        /// Number of slots requested
        requested: usize,
    },
    /// Computing the new capacity overflowed, or the buffer would exceed `isize::MAX` bytes
    #[error("Capacity overflow: requested {requested} slots")]
    CapacityOverflow {
        /// Number of slots requested, saturated at `usize::MAX`
        requested: usize,
    },
}
