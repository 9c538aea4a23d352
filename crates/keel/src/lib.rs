//! Keel: growable and fixed-length arrays with explicit storage and
//! element lifetime management.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Keel sub-crates. For most users, adding `keel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! let mut names: DynamicArray<String> = DynamicArray::new();
//! names.push("Cherno".to_string());
//! names.push_clone(&"C++".to_string());
//! names.emplace("Series");
//!
//! let mut seen = Vec::new();
//! let mut it = names.begin();
//! while it != names.end() {
//!     seen.push(it.len());
//!     it.step_forward();
//! }
//! assert_eq!(seen, [6, 3, 6]);
//!
//! let mut fixed: FixedArray<i32, 5> = FixedArray::new();
//! fixed[2] = 7;
//! assert_eq!(fixed.size(), 5);
//!
//! let text = render(&names);
//! assert_eq!(text.lines().count(), 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `keel-core` | `ArrayError`, `ArrayConfig`, the `Sequence` trait, `render` |
//! | [`fixed`] | `keel-fixed` | `FixedArray<T, S>` |
//! | [`vector`] | `keel-vector` | `DynamicArray<T>`, cursors and iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, configuration and shared traits (`keel-core`).
///
/// [`types::Sequence`] is implemented by slices, `Vec`, and both array
/// types, so [`types::render`] accepts any of them.
pub use keel_core as types;

/// Compile-time fixed-length arrays (`keel-fixed`).
pub use keel_fixed as fixed;

/// Growable arrays, cursors and iterators (`keel-vector`).
///
/// Most users only need [`vector::DynamicArray`], also available in the
/// [`prelude`].
pub use keel_vector as vector;

pub use keel_vector::dyn_array;

/// Common imports for typical Keel usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use keel_fixed::FixedArray;
    pub use keel_vector::{Cursor, CursorMut, DynamicArray};

    // Configuration and errors
    pub use keel_core::{ArrayConfig, ArrayError};

    // Shared behaviour
    pub use keel_core::{render, Sequence};
}
