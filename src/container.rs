use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;

use crate::error::DynVecError;
use crate::iter::{Iter, IterMut, RevIter, RevIterMut};
use crate::storage::{self, RawBuffer};

/// A growable array that exclusively owns a contiguous buffer of `T`.
///
/// Every slot up to [`capacity`](DynVec::capacity) holds a live value; only the
/// first [`len`](DynVec::len) of them are logically present. Slots beyond the
/// length keep whatever they last held until they are overwritten.
///
/// Operations that reallocate take `&mut self`, so references and iterators
/// obtained earlier cannot outlive a reallocation.
pub struct DynVec<T> {
    buf: RawBuffer<T>,
    len: usize,
}

/// Raises the error of a fallible operation as a panic, for trait impls that
/// cannot return a `Result`.
#[track_caller]
pub(crate) fn or_panic<R>(result: Result<R, DynVecError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<T: Default> DynVec<T> {
    /// Creates an empty `DynVec` without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates a `DynVec` of `count` default values, with capacity `count`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` or `DynVecError::CapacityOverflow`
    /// if the buffer cannot be allocated.
    pub fn with_len(count: usize) -> Result<Self, DynVecError> {
        Ok(Self {
            buf: RawBuffer::allocate(count)?,
            len: count,
        })
    }

    /// Creates a `DynVec` holding `count` clones of `value`, with capacity `count`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` or `DynVecError::CapacityOverflow`
    /// if the buffer cannot be allocated.
    pub fn from_elem(count: usize, value: T) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let mut buf = RawBuffer::allocate(count)?;
        buf.slots_mut().fill(value);
        Ok(Self { buf, len: count })
    }

    /// Creates a `DynVec` holding clones of `items`, with capacity `items.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` or `DynVecError::CapacityOverflow`
    /// if the buffer cannot be allocated.
    pub fn from_slice(items: &[T]) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let mut buf = RawBuffer::allocate(items.len())?;
        buf.slots_mut().clone_from_slice(items);
        Ok(Self {
            buf,
            len: items.len(),
        })
    }

    /// Builds a `DynVec` by appending every item of `iter` in turn.
    ///
    /// Capacity follows the append growth policy, as if each item were passed to
    /// [`push_back`](DynVec::push_back).
    ///
    /// # Errors
    ///
    /// Propagates the first growth failure. The partially built container is
    /// dropped before returning.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, DynVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut dynvec = Self::new();
        for item in iter {
            dynvec.push_back(item)?;
        }
        Ok(dynvec)
    }

    /// Returns a deep copy with the same length and capacity.
    ///
    /// Slots past the length are default values in the copy.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` or `DynVecError::CapacityOverflow`
    /// if the buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let mut buf = RawBuffer::allocate(self.capacity())?;
        buf.slots_mut()[..self.len].clone_from_slice(self.as_slice());
        Ok(Self { buf, len: self.len })
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built before `self` is touched, so on error `self` is
    /// unchanged. The old buffer is dropped after the exchange.
    ///
    /// # Errors
    ///
    /// Propagates [`try_clone`](DynVec::try_clone) failures.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), DynVecError>
    where
        T: Clone,
    {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Takes the buffer out of `self`, leaving it empty and unallocated.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Drops the buffer of `self` and adopts the buffer of `source`.
    ///
    /// `source` is left empty and unallocated, ready for reuse.
    pub fn move_from(&mut self, source: &mut Self) {
        self.buf.release();
        self.len = 0;
        *self = source.take();
    }

    /// Ensures capacity is at least `new_capacity`.
    ///
    /// Does nothing if the current capacity already suffices. Otherwise the
    /// buffer is reallocated to exactly `new_capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` or `DynVecError::CapacityOverflow`.
    /// The container is unchanged on error.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), DynVecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.buf.reallocate(new_capacity, self.len)
    }

    /// Appends `value`, growing to `len * 2 + 1` slots (1 when empty) if full.
    ///
    /// # Errors
    ///
    /// Returns the growth failure. The container is unchanged and `value` is
    /// dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), DynVecError> {
        if self.len == self.capacity() {
            self.reserve(storage::push_growth(self.len)?)?;
        }
        self.buf.slots_mut()[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Changes the length to `new_len`.
    ///
    /// Within the current capacity only the length changes: newly exposed slots
    /// keep the values they already held. Past the capacity the buffer grows to
    /// `new_len * 2` slots and the new tail holds default values.
    ///
    /// # Errors
    ///
    /// Returns the growth failure. The container is unchanged on error.
    pub fn resize(&mut self, new_len: usize) -> Result<(), DynVecError> {
        if new_len > self.capacity() {
            self.buf
                .reallocate(storage::resize_growth(new_len)?, self.len)?;
        }
        self.len = new_len;
        Ok(())
    }

    /// Changes the length to `new_len`, setting every newly exposed slot to
    /// `value`.
    ///
    /// Shrinking only lowers the length. Growing past the capacity reallocates
    /// to `new_len * 2` slots.
    ///
    /// # Errors
    ///
    /// Returns the growth failure. The container is unchanged on error.
    pub fn resize_with_value(&mut self, new_len: usize, value: T) -> Result<(), DynVecError>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }

        if new_len <= self.capacity() {
            self.buf.slots_mut()[self.len..new_len].fill(value);
        } else {
            let mut fresh = RawBuffer::allocate(storage::resize_growth(new_len)?)?;
            fresh.slots_mut()[self.len..new_len].fill(value);
            self.buf.adopt(fresh, self.len);
        }
        self.len = new_len;
        Ok(())
    }

    /// Reduces capacity to the length.
    ///
    /// An empty container releases its buffer entirely.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if the smaller buffer cannot be
    /// allocated. The container is unchanged on error.
    pub fn shrink_to_fit(&mut self) -> Result<(), DynVecError> {
        if self.len == 0 {
            self.buf.release();
        } else if self.capacity() > self.len {
            self.buf.reallocate(self.len, self.len)?;
        }
        Ok(())
    }
}

impl<T> DynVec<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if a buffer is currently allocated.
    ///
    /// This is the case exactly when the capacity is non-zero.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.buf.is_allocated()
    }

    /// Removes the last element from the logical range.
    ///
    /// The slot is not reset: the value stays in storage until a later append or
    /// resize overwrites it. Returns a reference to that retained value, or
    /// `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.buf.slots().get(self.len)
    }

    /// Sets the length to zero. Capacity and slot values are retained.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges buffers, lengths and capacities with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Gets the element at `index`, checking it against the length.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, DynVecError> {
        let length = self.len;
        self.as_slice()
            .get(index)
            .ok_or(DynVecError::IndexOutOfBounds { index, length })
    }

    /// Mutable variant of [`at`](DynVec::at).
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynVecError> {
        let length = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynVecError::IndexOutOfBounds { index, length })
    }

    /// Gets the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Gets the element at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](DynVec::len).
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len <= capacity`.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Mutable variant of [`get_unchecked`](DynVec::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](DynVec::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len <= capacity`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    pub fn front(&self) -> &T {
        assert!(self.len > 0, "front() called on an empty DynVec");
        &self.as_slice()[0]
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "front_mut() called on an empty DynVec");
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    pub fn back(&self) -> &T {
        assert!(self.len > 0, "back() called on an empty DynVec");
        &self.as_slice()[self.len - 1]
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "back_mut() called on an empty DynVec");
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// The logically present elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.slots()[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.slots_mut()[..len]
    }

    /// Pointer to the first slot.
    ///
    /// Dangling but non-null when nothing is allocated. Invalidated by any
    /// reallocating operation.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.slots().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.slots_mut().as_mut_ptr()
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Returns an iterator over the elements, back to front.
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(self.as_slice())
    }

    pub fn iter_rev_mut(&mut self) -> RevIterMut<'_, T> {
        RevIterMut::new(self.as_mut_slice())
    }

    pub(crate) fn into_parts(self) -> (RawBuffer<T>, usize) {
        (self.buf, self.len)
    }
}

impl<T: Default> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> Clone for DynVec<T> {
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated. Use
    /// [`try_clone`](DynVec::try_clone) to handle that case.
    fn clone(&self) -> Self {
        or_panic(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        or_panic(self.try_clone_from(source));
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for DynVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default + Clone> From<&[T]> for DynVec<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    fn from(items: &[T]) -> Self {
        or_panic(Self::from_slice(items))
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynVec<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    fn from(items: [T; N]) -> Self {
        let mut buf = or_panic(RawBuffer::allocate(N));
        for (slot, item) in buf.slots_mut().iter_mut().zip(items) {
            *slot = item;
        }
        Self { buf, len: N }
    }
}

impl<T: Default> FromIterator<T> for DynVec<T> {
    /// # Panics
    ///
    /// Panics if the container cannot grow.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        or_panic(Self::try_from_iter(iter))
    }
}

impl<T: Default> Extend<T> for DynVec<T> {
    /// # Panics
    ///
    /// Panics if the container cannot grow. Items appended before the failure
    /// remain.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            or_panic(self.push_back(item));
        }
    }
}

impl<'a, T: Default + Copy + 'a> Extend<&'a T> for DynVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Creates a [`DynVec`] from a list of elements or from `value; count`.
///
/// Both forms allocate exactly as many slots as elements.
///
/// # Panics
///
/// Panics if the buffer cannot be allocated.
///
/// ```
/// # use dynvec::dynvec;
/// let v = dynvec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let w = dynvec![7; 5];
/// assert_eq!(w.as_slice(), &[7, 7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! dynvec {
    () => {
        $crate::DynVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::__from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynVec::from([$($x),+])
    };
}

#[doc(hidden)]
#[track_caller]
pub fn __from_elem<T: Default + Clone>(elem: T, count: usize) -> DynVec<T> {
    or_panic(DynVec::from_elem(count, elem))
}
