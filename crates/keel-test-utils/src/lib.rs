//! Test utilities and instrumented element types for Keel development.
//!
//! Containers are judged by what they do to the values they hold. The
//! types here count or record every construction, clone and drop so
//! tests can assert exact lifecycle behaviour:
//!
//! - [`Lifecycle`] + [`Tracked`]: per-test counters, no global state.
//! - [`DropOrder`] + [`Marked`]: records the order in which values drop.
//! - [`MoveOnly`]: an element type with no `Clone` impl.
//! - [`Vec3`]: a small value type with constructor-style conversions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod elements;
mod lifecycle;

pub use elements::{MoveOnly, Vec3};
pub use lifecycle::{DropOrder, Lifecycle, Marked, Tracked};
