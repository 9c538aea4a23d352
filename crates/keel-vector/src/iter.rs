//! Iterators over a [`DynamicArray`](crate::DynamicArray).

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::cursor::Cursor;
use crate::raw::RawBlock;

/// Borrowing iterator, walking a front cursor toward a back cursor.
///
/// Created by [`DynamicArray::iter`](crate::DynamicArray::iter) and by
/// `for x in &array`.
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Self {
        debug_assert!(front.position() <= back.position());
        Self { front, back }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.front.post_step_forward().get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back.step_back().get()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.back.position() - self.front.position()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator that moves elements out of the array.
///
/// Elements not yet yielded are dropped with the iterator, and the storage
/// is released afterwards.
pub struct IntoIter<T> {
    block: RawBlock<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// `block` must hold exactly `len` live values in slots `[0, len)`.
    pub(crate) fn new(block: RawBlock<T>, len: usize) -> Self {
        Self {
            block,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are live and in bounds.
        unsafe { slice::from_raw_parts(self.block.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // SAFETY: `index` was live and is no longer in [start, end).
        Some(unsafe { self.block.take(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was live and is no longer in [start, end).
        Some(unsafe { self.block.take(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        // SAFETY: slots [start, end) are exactly the values not yet yielded.
        unsafe { self.block.destroy_range(start, end) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
