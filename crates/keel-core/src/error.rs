//! Error types for Keel containers.
//!
//! Only resource acquisition and shape conversions surface as errors.
//! Out-of-range indexing and misuse of cursors are caller contract
//! violations and are never reported through this type.

use std::error::Error;
use std::fmt;

/// Errors that can occur while acquiring or converting container storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested element count cannot be expressed as an allocation
    /// (its byte size exceeds `isize::MAX` or the count itself overflowed).
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The global allocator refused a well-formed request.
    AllocationFailed {
        /// Number of element slots requested.
        capacity: usize,
        /// Size of the rejected request in bytes.
        bytes: usize,
    },
    /// A slice could not be converted into a fixed-length array because
    /// the lengths differ.
    LengthMismatch {
        /// Length required by the destination type.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// An [`ArrayConfig`](crate::ArrayConfig) failed validation.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots cannot be allocated")
            }
            Self::AllocationFailed { capacity, bytes } => {
                write!(
                    f,
                    "allocation failed: {capacity} slots ({bytes} bytes) requested"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} elements, got {actual}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ArrayError {}
