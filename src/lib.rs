#![no_std]

//! `DynVec`: a growable array that exclusively owns a contiguous buffer.
//!
//! `DynVec<T>` stores its elements in one heap buffer whose every slot, up to
//! the capacity, holds a live `T`. Only the first `len()` slots are logically
//! present. Element types therefore need `Default`; further bounds (`Clone`,
//! `PartialEq`, `PartialOrd`, ...) apply only to the operations that use them.
//!
//! This crate is `no_std` compatible and needs only `core` and `alloc`.
//!
//! # Growth Policy
//!
//! Growth is explicit and reproducible:
//! - `push_back()` on a full vector grows to `len * 2 + 1` slots (1 when empty)
//! - `resize()` past the capacity grows to `new_len * 2` slots
//! - `reserve(n)` grows to exactly `n` slots, and never shrinks
//! - `shrink_to_fit()` shrinks to exactly `len` slots, or releases the buffer
//!
//! ```
//! # use dynvec::DynVec;
//! let mut v = DynVec::new();
//! assert_eq!(v.capacity(), 0);
//!
//! v.push_back(1).unwrap();
//! assert_eq!(v.capacity(), 1);
//! v.push_back(2).unwrap();
//! assert_eq!(v.capacity(), 3);
//!
//! v.resize(4).unwrap();
//! assert_eq!(v.capacity(), 8);
//! ```
//!
//! # Failure Semantics
//!
//! Every operation that allocates returns `Result<_, DynVecError>`. When a
//! reallocating operation fails, the vector is left exactly as it was:
//!
//! ```
//! # use dynvec::{DynVec, DynVecError};
//! let mut v = DynVec::from([1u64, 2, 3]);
//!
//! let err = v.reserve(usize::MAX / 2).unwrap_err();
//! assert!(matches!(err, DynVecError::CapacityOverflow { .. }));
//!
//! assert_eq!(v, [1, 2, 3]);
//! assert_eq!(v.capacity(), 3);
//! ```
//!
//! Trait implementations that cannot return a `Result` (`Clone`, `From`,
//! `FromIterator`, `Extend`) panic instead; each has a `try_` counterpart.
//!
//! # Retained Values
//!
//! Shrinking the logical length never touches storage. `pop_back()`,
//! `clear()` and shrinking `resize()` leave the old values in their slots,
//! and growing `resize()` within capacity exposes them again:
//!
//! ```
//! # use dynvec::DynVec;
//! let mut v = DynVec::from([10, 20, 30]);
//!
//! assert_eq!(v.pop_back(), Some(&30));
//! assert_eq!(v.len(), 2);
//!
//! v.resize(3).unwrap();
//! assert_eq!(v.as_slice(), &[10, 20, 30]);
//! ```
//!
//! # Copy and Move
//!
//! Cloning deep-copies the buffer, keeping length and capacity. Moving out
//! with `take()` or `move_from()` transfers the buffer and leaves the source
//! empty and unallocated:
//!
//! ```
//! # use dynvec::DynVec;
//! let mut a = DynVec::from([1, 2, 3]);
//! let b = a.take();
//!
//! assert_eq!(b, [1, 2, 3]);
//! assert_eq!(a.len(), 0);
//! assert_eq!(a.capacity(), 0);
//! assert!(!a.is_allocated());
//! ```
//!
//! # Iterator Support
//!
//! Forward and reverse iteration, shared or mutable, over the live elements:
//!
//! ```
//! # use dynvec::dynvec;
//! let mut v = dynvec![1, 2, 3];
//!
//! for x in &mut v {
//!     *x *= 10;
//! }
//!
//! let forward: Vec<_> = v.iter().copied().collect();
//! let backward: Vec<_> = v.iter_rev().copied().collect();
//! assert_eq!(forward, [10, 20, 30]);
//! assert_eq!(backward, [30, 20, 10]);
//! ```
//!
//! Every operation that may reallocate takes `&mut self`, so the borrow checker
//! rejects any use of an iterator or reference across a reallocation.
//!
//! # Logging
//!
//! Reallocations and allocation failures are reported as `tracing` events at
//! `TRACE` and `DEBUG` level. No subscriber is installed by this crate.

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod cmp;
mod container;
mod error;
mod iter;
mod storage;

// Re-export public types and traits
pub use crate::container::DynVec;
pub use error::DynVecError;
pub use iter::{IntoIter, Iter, IterMut, RevIter, RevIterMut};

#[doc(hidden)]
pub use crate::container::__from_elem;
