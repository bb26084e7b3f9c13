use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::error::DynVecError;

/// Capacity chosen by the first append into an empty container
const FIRST_PUSH_CAPACITY: usize = 1;
/// Append growth: `len * PUSH_GROWTH_FACTOR + 1`
const PUSH_GROWTH_FACTOR: usize = 2;
/// Resize growth: `new_len * RESIZE_GROWTH_FACTOR`
const RESIZE_GROWTH_FACTOR: usize = 2;

/// Capacity to grow to when appending into a full container of `len` elements.
pub(crate) fn push_growth(len: usize) -> Result<usize, DynVecError> {
    if len == 0 {
        return Ok(FIRST_PUSH_CAPACITY);
    }
    len.checked_mul(PUSH_GROWTH_FACTOR)
        .and_then(|doubled| doubled.checked_add(1))
        .ok_or_else(|| overflow(usize::MAX))
}

/// Capacity to grow to when resizing past the current capacity.
///
/// Scales the requested length, not the old capacity.
pub(crate) fn resize_growth(new_len: usize) -> Result<usize, DynVecError> {
    new_len
        .checked_mul(RESIZE_GROWTH_FACTOR)
        .ok_or_else(|| overflow(usize::MAX))
}

fn overflow(requested: usize) -> DynVecError {
    tracing::debug!(requested, "capacity computation overflowed");
    DynVecError::CapacityOverflow { requested }
}

/// Exclusively owned storage of `capacity` fully constructed slots.
///
/// `None` stands for "no allocation" and is the only representation of a zero
/// capacity. Every slot of an allocated buffer holds a live `T`; which prefix of
/// them is logically present is tracked by the owner, not here.
#[derive(Debug)]
pub(crate) struct RawBuffer<T> {
    slots: Option<Box<[T]>>,
}

impl<T> RawBuffer<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: None }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.as_deref().map_or(0, <[T]>::len)
    }

    pub(crate) fn is_allocated(&self) -> bool {
        self.slots.is_some()
    }

    pub(crate) fn slots(&self) -> &[T] {
        self.slots.as_deref().unwrap_or(&[])
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        self.slots.as_deref_mut().unwrap_or(&mut [])
    }

    pub(crate) fn release(&mut self) {
        if let Some(slots) = self.slots.take() {
            tracing::trace!(old_capacity = slots.len(), "releasing storage");
        }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.map(<[T]>::into_vec).unwrap_or_default()
    }

    /// Moves the first `live` slots of `self` into `fresh`, drops the old buffer
    /// and adopts `fresh`.
    ///
    /// The transfer is a sequence of swaps and cannot fail. The defaults left
    /// behind in the old buffer are dropped with it.
    pub(crate) fn adopt(&mut self, mut fresh: Self, live: usize) {
        debug_assert!(live <= self.capacity() && live <= fresh.capacity());

        for (dst, src) in fresh.slots_mut().iter_mut().zip(&mut self.slots_mut()[..live]) {
            mem::swap(dst, src);
        }

        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = fresh.capacity(),
            len = live,
            "reallocating storage"
        );

        *self = fresh;
    }
}

impl<T: Default> RawBuffer<T> {
    /// Allocates `capacity` default-constructed slots.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CapacityOverflow` if the buffer would exceed
    /// `isize::MAX` bytes, and `DynVecError::AllocationFailed` if the allocator
    /// refuses the request. Nothing is allocated in either case.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, DynVecError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let fits = capacity
            .checked_mul(mem::size_of::<T>())
            .is_some_and(|bytes| isize::try_from(bytes).is_ok());
        if !fits {
            return Err(overflow(capacity));
        }

        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            tracing::debug!(requested = capacity, "allocation failed");
            return Err(DynVecError::AllocationFailed {
                requested: capacity,
            });
        }
        slots.resize_with(capacity, T::default);

        Ok(Self {
            slots: Some(slots.into_boxed_slice()),
        })
    }

    /// Replaces the buffer with one of exactly `new_capacity` slots, keeping the
    /// first `live` elements in order.
    ///
    /// # Errors
    ///
    /// Propagates `allocate` failures. `self` is untouched when an error is
    /// returned, and also when `T::default` panics during allocation.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, live: usize) -> Result<(), DynVecError> {
        let fresh = Self::allocate(new_capacity)?;
        self.adopt(fresh, live);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_push_growth_policy() {
        assert_eq!(push_growth(0), Ok(1));
        assert_eq!(push_growth(1), Ok(3));
        assert_eq!(push_growth(3), Ok(7));
        assert_eq!(push_growth(7), Ok(15));
    }

    #[test]
    fn test_resize_growth_policy() {
        assert_eq!(resize_growth(0), Ok(0));
        assert_eq!(resize_growth(5), Ok(10));
        assert_eq!(resize_growth(11), Ok(22));
    }

    #[test]
    fn test_growth_overflow() {
        assert_eq!(
            push_growth(usize::MAX / 2 + 1),
            Err(DynVecError::CapacityOverflow {
                requested: usize::MAX
            })
        );
        assert!(resize_growth(usize::MAX).is_err());
    }

    #[test]
    fn test_allocate_zero_is_unallocated() {
        let buffer = RawBuffer::<u32>::allocate(0).unwrap();
        assert!(!buffer.is_allocated());
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.slots().is_empty());
    }

    #[test]
    fn test_allocate_default_constructs_every_slot() {
        let buffer = RawBuffer::<String>::allocate(4).unwrap();
        assert!(buffer.is_allocated());
        assert_eq!(buffer.capacity(), 4);
        assert!(buffer.slots().iter().all(String::is_empty));
    }

    #[test]
    fn test_allocate_too_large() {
        let result = RawBuffer::<u64>::allocate(usize::MAX / 4);
        assert_eq!(
            result.unwrap_err(),
            DynVecError::CapacityOverflow {
                requested: usize::MAX / 4
            }
        );
    }

    #[test]
    fn test_reallocate_transfers_live_prefix() {
        let mut buffer = RawBuffer::<u32>::allocate(3).unwrap();
        buffer.slots_mut().copy_from_slice(&[1, 2, 3]);

        buffer.reallocate(6, 2).unwrap();

        assert_eq!(buffer.capacity(), 6);
        assert_eq!(buffer.slots(), &[1, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_reallocate_failure_leaves_buffer_unchanged() {
        let mut buffer = RawBuffer::<u64>::allocate(2).unwrap();
        buffer.slots_mut().copy_from_slice(&[7, 8]);

        assert!(buffer.reallocate(usize::MAX / 4, 2).is_err());

        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.slots(), &[7, 8]);
    }

    #[test]
    fn test_release_and_into_vec() {
        let mut buffer = RawBuffer::<u8>::allocate(2).unwrap();
        assert_eq!(buffer.into_vec().len(), 2);

        buffer = RawBuffer::allocate(5).unwrap();
        buffer.release();
        assert!(!buffer.is_allocated());
        assert!(buffer.into_vec().is_empty());
    }
}
