//! Core types and traits for the Keel container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by every container crate: the error type, the
//! construction config, and the [`Sequence`] trait that lets helpers
//! treat fixed and growable arrays alike.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod render;
pub mod traits;

pub use config::ArrayConfig;
pub use error::ArrayError;
pub use render::render;
pub use traits::Sequence;
