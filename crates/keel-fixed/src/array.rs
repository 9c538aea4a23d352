//! The [`FixedArray`] value type.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use keel_core::{ArrayError, Sequence};

/// An array of exactly `S` elements of `T`, stored inline.
///
/// `S` is a compile-time constant: [`size`](FixedArray::size) folds to a
/// literal and no storage is spent on it. The element count can never
/// change over the lifetime of a value.
///
/// Indexing through `[]` is bounds-checked. [`get_unchecked`]
/// skips the check in release builds and asserts only in debug builds.
///
/// [`get_unchecked`]: FixedArray::get_unchecked
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const S: usize> {
    data: [T; S],
}

impl<T: Default, const S: usize> FixedArray<T, S> {
    /// Create an array with every element default-constructed.
    pub fn new() -> Self {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const S: usize> FixedArray<T, S> {
    /// Wrap an existing array value.
    pub const fn from_array(data: [T; S]) -> Self {
        Self { data }
    }

    /// Build an array by calling `f` once per index, in index order.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Number of elements. Always `S`.
    pub const fn size(&self) -> usize {
        S
    }

    /// Whether the array type holds no elements (`S == 0`).
    pub const fn is_empty(&self) -> bool {
        S == 0
    }

    /// Shared reference to the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable reference to the element at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Shared reference to the element at `index` without a release-build
    /// bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `S`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < S, "index {index} out of range for FixedArray of size {S}");
        // SAFETY: caller guarantees `index < S`.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable reference to the element at `index` without a release-build
    /// bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `S`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < S, "index {index} out of range for FixedArray of size {S}");
        // SAFETY: caller guarantees `index < S`.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Overwrite every element with a clone of `value`.
    ///
    /// The previous elements are dropped as they are replaced.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Exchange the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over shared references in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over mutable references in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Unwrap into the underlying array.
    pub fn into_inner(self) -> [T; S] {
        self.data
    }
}

impl<T: Default, const S: usize> Default for FixedArray<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const S: usize> Index<usize> for FixedArray<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const S: usize> IndexMut<usize> for FixedArray<T, S> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const S: usize> From<[T; S]> for FixedArray<T, S> {
    fn from(data: [T; S]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Clone, const S: usize> TryFrom<&[T]> for FixedArray<T, S> {
    type Error = ArrayError;

    fn try_from(src: &[T]) -> Result<Self, ArrayError> {
        if src.len() != S {
            return Err(ArrayError::LengthMismatch {
                expected: S,
                actual: src.len(),
            });
        }
        Ok(Self::from_fn(|i| src[i].clone()))
    }
}

impl<T, const S: usize> Sequence for FixedArray<T, S> {
    type Item = T;

    fn size(&self) -> usize {
        S
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T, const S: usize> IntoIterator for FixedArray<T, S> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a FixedArray<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a mut FixedArray<T, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Debug, const S: usize> fmt::Debug for FixedArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_test_utils::{Lifecycle, Tracked};

    #[test]
    fn size_is_the_type_parameter() {
        let array: FixedArray<i32, 5> = FixedArray::new();
        assert_eq!(array.size(), 5);
        assert_eq!(FixedArray::<u8, 7>::from_array([0; 7]).size(), 7);
    }

    #[test]
    fn new_default_constructs_every_element() {
        let array: FixedArray<i32, 4> = FixedArray::new();
        assert!(array.iter().all(|&v| v == 0));
    }

    #[test]
    fn index_reads_and_writes() {
        let mut names: FixedArray<String, 2> = FixedArray::new();
        names[0] = "Cherno".to_string();
        names[1] = "C++".to_string();
        assert_eq!(names[0], "Cherno");
        assert_eq!(names.as_slice(), ["Cherno", "C++"]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let array: FixedArray<i32, 3> = FixedArray::new();
        let _ = array[3];
    }

    #[test]
    fn get_returns_none_past_the_end() {
        let array = FixedArray::from([1, 2, 3]);
        assert_eq!(array.get(2), Some(&3));
        assert_eq!(array.get(3), None);
    }

    #[test]
    fn unchecked_access_matches_checked() {
        let mut array = FixedArray::from([10, 20, 30]);
        // SAFETY: 1 < 3.
        unsafe {
            *array.get_unchecked_mut(1) += 1;
            assert_eq!(*array.get_unchecked(1), 21);
        }
    }

    #[test]
    fn fill_overwrites_every_slot() {
        let mut array: FixedArray<u32, 6> = FixedArray::new();
        array.fill(9);
        assert_eq!(array.as_slice(), [9; 6]);
    }

    #[test]
    fn swap_exchanges_two_slots() {
        let mut array = FixedArray::from(['a', 'b', 'c']);
        array.swap(0, 2);
        assert_eq!(array.into_inner(), ['c', 'b', 'a']);
    }

    #[test]
    fn range_based_iteration() {
        let mut array = FixedArray::from([1, 2, 3]);
        for v in &mut array {
            *v *= 10;
        }
        let collected: Vec<i32> = (&array).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);
    }

    #[test]
    fn try_from_slice_checks_length() {
        let ok: FixedArray<i32, 3> = FixedArray::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(ok.as_slice(), [1, 2, 3]);

        let err = FixedArray::<i32, 3>::try_from(&[1, 2][..]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn elements_are_dropped_together_with_the_array() {
        let life = Lifecycle::new();
        {
            let array = FixedArray::<Tracked, 5>::from_fn(|i| Tracked::new(&life, i as i64));
            assert_eq!(life.constructed(), 5);
            assert_eq!(array.size(), 5);
            assert_eq!(life.dropped(), 0);
        }
        assert_eq!(life.dropped(), 5);
    }

    #[test]
    fn fill_drops_replaced_elements() {
        let life = Lifecycle::new();
        let mut array = FixedArray::<Tracked, 3>::from_fn(|i| Tracked::new(&life, i as i64));
        array.fill(Tracked::new(&life, 7));
        // Only the replaced originals are dropped; the fill value lives on in the last slot.
        assert_eq!(life.dropped(), 3);
        assert!(array.iter().all(|t| t.value() == 7));
    }

    #[test]
    fn debug_formats_as_list() {
        let array = FixedArray::from([1, 2]);
        assert_eq!(format!("{array:?}"), "[1, 2]");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn size_never_changes(writes in proptest::collection::vec((0usize..5, any::<i32>()), 0..50)) {
                let mut array: FixedArray<i32, 5> = FixedArray::new();
                for (i, v) in writes {
                    array[i] = v;
                    prop_assert_eq!(array.size(), 5);
                }
                prop_assert_eq!(array.iter().count(), 5);
            }

            #[test]
            fn swap_twice_is_identity(a in 0usize..8, b in 0usize..8) {
                let original = FixedArray::<usize, 8>::from_fn(|i| i * 3);
                let mut array = original.clone();
                array.swap(a, b);
                array.swap(a, b);
                prop_assert_eq!(array, original);
            }
        }
    }
}
