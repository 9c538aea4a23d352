//! Compile-time fixed-length arrays.
//!
//! [`FixedArray<T, S>`] stores exactly `S` values inline. The length is
//! part of the type: there is no insertion, no removal and no storage
//! indirection. All elements are constructed together when the array is
//! created and dropped together when it goes out of scope.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;

pub use array::FixedArray;
