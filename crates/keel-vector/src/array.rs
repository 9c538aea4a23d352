//! The growable [`DynamicArray`] container.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::{self, SliceIndex};

use keel_core::{ArrayConfig, ArrayError, Sequence};

use crate::cursor::{Cursor, CursorMut};
use crate::iter::{IntoIter, Iter};
use crate::raw::{capacity_overflow, RawBlock};

/// A growable, contiguous array of `T`.
///
/// Slots `[0, size)` of the backing block hold live values; slots
/// `[size, capacity)` are uninitialised and are never dropped. The block
/// is replaced, never resized in place: every capacity change allocates
/// a fresh block, moves the live values across and frees the old one.
///
/// A fresh array reserves [`ArrayConfig::DEFAULT_INITIAL_CAPACITY`] slots
/// and grows by half its capacity whenever an append finds it full.
///
/// Indexing through `[]` is bounds-checked and panics past `size()`, even
/// where capacity remains. [`get_unchecked`] and [`get_unchecked_mut`]
/// skip the check in release builds and assert only in debug builds.
///
/// [`get_unchecked`]: DynamicArray::get_unchecked
/// [`get_unchecked_mut`]: DynamicArray::get_unchecked_mut
///
/// ```
/// use keel_vector::DynamicArray;
///
/// let mut names = DynamicArray::new();
/// names.push("Cherno".to_string());
/// names.push_clone(&"C++".to_string());
/// names.emplace("Series");
/// assert_eq!(names.size(), 3);
/// assert_eq!(names[2], "Series");
/// ```
pub struct DynamicArray<T> {
    block: RawBlock<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` elements overflows `isize`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            block: RawBlock::allocate(capacity),
            len: 0,
        }
    }

    /// Create an empty array with room for `capacity` elements, reporting
    /// overflow and allocator failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            block: RawBlock::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Create an empty array from a validated [`ArrayConfig`].
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate::<T>()?;
        Self::try_with_capacity(config.initial_capacity)
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots currently reserved.
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Append `value`, moving it into the first free slot.
    ///
    /// Grows the storage first if every slot is in use.
    pub fn push(&mut self, value: T) {
        self.reserve_for_append();
        // SAFETY: reserve_for_append guarantees `len < capacity`, and slot
        // `len` is uninitialised by the live-prefix invariant.
        unsafe { self.block.construct(self.len, value) };
        self.len += 1;
    }

    /// Append a clone of `value`.
    ///
    /// Clones exactly once; the clone is moved into its slot.
    pub fn push_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    /// Construct a new element in the first free slot by calling `make`,
    /// and return a reference to it.
    ///
    /// `make` runs exactly once, after any growth, and its result is
    /// written straight into the slot: no existing value is assigned over
    /// and no further clone or move of the element happens.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reserve_for_append();
        let index = self.len;
        // SAFETY: `index < capacity` after reserve_for_append and the slot
        // is uninitialised.
        unsafe { self.block.construct(index, make()) };
        self.len += 1;
        // SAFETY: slot `index` was made live above and lies in [0, len).
        unsafe { &mut *self.block.slot(index) }
    }

    /// Construct a new element from `args` through `T: From<A>` and return
    /// a reference to it.
    ///
    /// ```
    /// use keel_vector::DynamicArray;
    ///
    /// let mut labels: DynamicArray<String> = DynamicArray::new();
    /// labels.emplace("vector").push_str("!");
    /// assert_eq!(labels[0], "vector!");
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        A: Into<T>,
    {
        self.emplace_with(|| args.into())
    }

    /// Drop the last element in place. Does nothing if the array is empty.
    ///
    /// Capacity is unchanged.
    pub fn remove_last(&mut self) {
        if self.len > 0 {
            self.len -= 1;
            // SAFETY: slot `len` was the last live slot and is no longer
            // counted as live.
            unsafe { self.block.destroy_range(self.len, self.len + 1) };
        }
    }

    /// Move the last element out, or return `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is no longer counted as live.
        Some(unsafe { self.block.take(self.len) })
    }

    /// Drop every live element in index order. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop every element at or beyond `new_len`, in index order.
    ///
    /// Does nothing if `new_len >= size()`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: slots [new_len, old_len) were live and are no longer counted.
        unsafe { self.block.destroy_range(new_len, old_len) };
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// # Panics
    ///
    /// Panics if `index > size()`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= size (is {})",
            self.len
        );
        self.reserve_for_append();
        // SAFETY: `len < capacity`, so shifting [index, len) right by one
        // stays in bounds; slot `index` is then vacated and rewritten.
        unsafe {
            self.block.shift(index, index + 1, self.len - index);
            self.block.construct(index, value);
        }
        self.len += 1;
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < size (is {})",
            self.len
        );
        // SAFETY: slot `index` is live; after the read it is refilled by
        // the shift, and the vacated last slot drops out of [0, len).
        unsafe {
            let value = self.block.take(index);
            self.block.shift(index + 1, index, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Shared reference to the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Shared reference to the element at `index` with no bounds check in
    /// release builds.
    ///
    /// # Safety
    ///
    /// `index < size()`. Debug builds assert this.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for DynamicArray of size {}",
            self.len
        );
        // SAFETY: caller guarantees the slot is live.
        unsafe { &*self.block.slot(index) }
    }

    /// Mutable reference to the element at `index` with no bounds check in
    /// release builds.
    ///
    /// # Safety
    ///
    /// `index < size()`. Debug builds assert this.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for DynamicArray of size {}",
            self.len
        );
        // SAFETY: caller guarantees the slot is live.
        unsafe { &mut *self.block.slot(index) }
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned, and [0, len) is live.
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, and `&mut self` makes the borrow unique.
        unsafe { slice::from_raw_parts_mut(self.block.as_ptr(), self.len) }
    }

    /// Cursor at the first live element (equal to [`end`](Self::end) when empty).
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Mutable cursor at the first live element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    /// Iterate over shared references in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.end())
    }

    /// Iterate over mutable references in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Ensure room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow.
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            capacity_overflow(usize::MAX)
        };
        if required > self.capacity() {
            self.reallocate(Self::amortized(self.capacity(), required));
        }
    }

    /// Ensure room for at least `additional` more elements, reporting
    /// overflow and allocator failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        if required > self.capacity() {
            self.try_reallocate(Self::amortized(self.capacity(), required))?;
        }
        Ok(())
    }

    /// Reallocate so that capacity equals the number of live elements.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.reallocate(self.len);
        }
    }

    /// Replace the backing block with one of exactly `new_capacity` slots.
    ///
    /// Live elements are moved across in index order. If `new_capacity` is
    /// below the current size, the trailing elements are dropped and the
    /// size is clamped to `new_capacity`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn reallocate(&mut self, new_capacity: usize) {
        let block = RawBlock::allocate(new_capacity);
        self.adopt(block);
    }

    /// Like [`reallocate`](Self::reallocate), but reports overflow and
    /// allocator failure. On error the array is left untouched.
    pub fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let block = RawBlock::try_allocate(new_capacity)?;
        self.adopt(block);
        Ok(())
    }

    /// Move the live elements into `block` and release the old storage.
    fn adopt(&mut self, mut block: RawBlock<T>) {
        let new_capacity = block.capacity();
        log::trace!(
            "reallocating from {} to {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.len
        );
        if new_capacity < self.len {
            log::debug!(
                "downsizing to {} slots drops {} trailing elements",
                new_capacity,
                self.len - new_capacity
            );
            self.truncate(new_capacity);
        }
        // SAFETY: [0, len) is live in the old block, `len <= new_capacity`,
        // and the new block is freshly allocated and uninitialised.
        unsafe { self.block.relocate_into(&mut block, self.len) };
        // The old block holds no live values now; dropping it only frees memory.
        drop(mem::replace(&mut self.block, block));
    }

    fn reserve_for_append(&mut self) {
        if self.len == self.capacity() {
            let Some(grown) = ArrayConfig::grown_capacity(self.capacity()) else {
                capacity_overflow(usize::MAX)
            };
            self.reallocate(grown);
        }
    }

    fn amortized(current: usize, required: usize) -> usize {
        ArrayConfig::grown_capacity(current).map_or(required, |grown| grown.max(required))
    }

    /// Split into the raw block and live count, leaving `self` empty.
    pub(crate) fn take_parts(&mut self) -> (RawBlock<T>, usize) {
        let len = mem::take(&mut self.len);
        (mem::replace(&mut self.block, RawBlock::empty()), len)
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Create an array holding `n` clones of `value`.
    pub fn from_elem(value: T, n: usize) -> Self {
        let mut out = Self::with_capacity(n);
        if n > 0 {
            for _ in 1..n {
                out.push_clone(&value);
            }
            out.push(value);
        }
        out
    }

    /// Append clones of every element of `items`.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.reserve(items.len());
        for item in items {
            self.push_clone(item);
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // `block` releases the raw memory when it drops after this.
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.iter() {
            out.push_clone(item);
        }
        out
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> Sequence for DynamicArray<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[T] {
        DynamicArray::as_slice(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut out = Self::with_capacity(lower.max(ArrayConfig::DEFAULT_INITIAL_CAPACITY));
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        out.extend(items);
        out
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let mut out = Self::with_capacity(items.len());
        out.extend(items);
        out
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        let mut out = Self::with_capacity(items.len());
        out.extend_from_slice(items);
        out
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let (block, len) = self.take_parts();
        IntoIter::new(block, len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
