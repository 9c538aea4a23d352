//! Positions within a [`DynamicArray`](crate::DynamicArray).
//!
//! A cursor is a position, not an element: it may sit anywhere, including
//! one past the last element or before the first, and only dereferencing
//! it requires a live element underneath. Cursors borrow the array, so
//! the storage they point into cannot be reallocated while they exist.
//!
//! Positions wrap like `usize`, so stepping back from the first element
//! and then offsetting forward lands on it again.
//!
//! Stepping comes in two forms, after the pre- and post-increment pair:
//! [`step_forward`](Cursor::step_forward) moves the cursor and returns it,
//! [`post_step_forward`](Cursor::post_step_forward) moves it and returns a
//! copy of where it was.

use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;

/// A read-only position within an array's live elements.
///
/// Two cursors taken from the same array compare equal when they sit at
/// the same position; comparing cursors from different arrays is
/// meaningless.
///
/// ```
/// use keel_vector::DynamicArray;
///
/// let values = DynamicArray::from([0, 1, 2, 3, 4]);
/// let mut it = values.begin();
/// let mut seen = Vec::new();
/// while it != values.end() {
///     seen.push(*it);
///     it.step_forward();
/// }
/// assert_eq!(seen, [0, 1, 2, 3, 4]);
/// ```
pub struct Cursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], pos: usize) -> Self {
        Self { items, pos }
    }

    /// Index of the element under the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor sits one past the last element.
    pub fn is_end(&self) -> bool {
        self.pos == self.items.len()
    }

    /// Advance one position and return the advanced cursor.
    pub fn step_forward(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Advance one position and return the cursor as it was before.
    pub fn post_step_forward(&mut self) -> Self {
        let prior = *self;
        self.step_forward();
        prior
    }

    /// Retreat one position and return the retreated cursor.
    pub fn step_back(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Retreat one position and return the cursor as it was before.
    pub fn post_step_back(&mut self) -> Self {
        let prior = *self;
        self.step_back();
        prior
    }

    /// The element under the cursor, or `None` outside the live range.
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    /// The element `offset` positions away, or `None` outside the live range.
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        self.items.get(self.pos.wrapping_add_signed(offset))
    }

    /// The element `offset` positions away.
    ///
    /// # Panics
    ///
    /// Panics if the target position holds no live element.
    #[track_caller]
    pub fn at(&self, offset: isize) -> &'a T {
        match self.peek(offset) {
            Some(item) => item,
            None => out_of_range(self.pos.wrapping_add_signed(offset), self.items.len()),
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.items.as_ptr(), other.items.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        self.at(0)
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, offset: isize) -> &T {
        self.at(offset)
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

/// A position within an array's live elements that allows mutation.
///
/// Holding a `CursorMut` borrows the array exclusively, so there is only
/// ever one; it has no post-step forms because a mutable position cannot
/// be duplicated.
///
/// ```
/// use keel_vector::DynamicArray;
///
/// let mut values = DynamicArray::from([1, 2, 3]);
/// let mut cursor = values.begin_mut();
/// while !cursor.is_end() {
///     *cursor *= 10;
///     cursor.step_forward();
/// }
/// assert_eq!(values, [10, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    items: &'a mut [T],
    pos: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T], pos: usize) -> Self {
        Self { items, pos }
    }

    /// Index of the element under the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor sits one past the last element.
    pub fn is_end(&self) -> bool {
        self.pos == self.items.len()
    }

    /// Advance one position.
    pub fn step_forward(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Retreat one position.
    pub fn step_back(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// The element under the cursor, or `None` outside the live range.
    pub fn get(&self) -> Option<&T> {
        self.items.get(self.pos)
    }

    /// Mutable access to the element under the cursor, or `None` outside
    /// the live range.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.pos)
    }

    /// The element `offset` positions away, or `None` outside the live range.
    pub fn peek(&self, offset: isize) -> Option<&T> {
        self.items.get(self.pos.wrapping_add_signed(offset))
    }

    /// Mutable access to the element `offset` positions away, or `None`
    /// outside the live range.
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        self.items.get_mut(self.pos.wrapping_add_signed(offset))
    }

    /// A read-only cursor at the same position, borrowing from this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.items, self.pos)
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        &self[0]
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        &mut self[0]
    }
}

impl<T> Index<isize> for CursorMut<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, offset: isize) -> &T {
        match self.peek(offset) {
            Some(item) => item,
            None => out_of_range(self.pos.wrapping_add_signed(offset), self.items.len()),
        }
    }
}

impl<T> IndexMut<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, offset: isize) -> &mut T {
        let target = self.pos.wrapping_add_signed(offset);
        let len = self.items.len();
        match self.peek_mut(offset) {
            Some(item) => item,
            None => out_of_range(target, len),
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

#[cold]
#[track_caller]
fn out_of_range(pos: usize, len: usize) -> ! {
    panic!("cursor position {pos} is outside the live range 0..{len}")
}
