//! Growable arrays with explicit raw-storage and element lifetime
//! management.
//!
//! [`DynamicArray<T>`] keeps its elements in one contiguous block that it
//! allocates, grows and releases itself. Raw allocation is kept apart
//! from element construction: a block is requested as uninitialised
//! memory, values are written into slots one at a time, and only slots
//! that hold live values are ever dropped.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── RawBlock<T>   (uninitialised storage: allocate / construct / destroy / relocate)
//! ├── len           (slots [0, len) are live, [len, capacity) are not)
//! ├── Cursor / CursorMut   (positions borrowed from the array)
//! └── Iter / IntoIter      (front and back cursors walking toward each other)
//! ```
//!
//! # Growth
//!
//! A full array grows to `capacity + capacity / 2` slots (at least one
//! more). Every capacity change allocates a new block, moves the live
//! elements across and frees the old block. Moves are bitwise
//! relocations, so growth never clones or drops an element.
//!
//! # Cursor validity
//!
//! Cursors and iterators borrow the array, so any operation that could
//! reallocate is rejected at compile time while one is alive:
//!
//! ```compile_fail
//! use keel_vector::DynamicArray;
//!
//! let mut values = DynamicArray::new();
//! values.push(1);
//! let begin = values.begin();
//! values.push(2); // would invalidate `begin`
//! assert_eq!(*begin, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;
pub mod cursor;
pub mod iter;
mod macros;
mod raw;

pub use array::DynamicArray;
pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter};
pub use keel_core::{ArrayConfig, ArrayError};
