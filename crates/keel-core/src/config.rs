//! Construction parameters for growable arrays.

use std::mem;

use crate::error::ArrayError;

/// Configuration for a growable array.
///
/// Controls the capacity reserved at construction. Growth after that is
/// fixed at 1.5x (see [`ArrayConfig::grown_capacity`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of element slots reserved when the array is created.
    ///
    /// Default: 2. Zero is allowed; the first append then allocates.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default number of slots reserved by a fresh array.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

    /// Create a config reserving `initial_capacity` slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check that the initial capacity is allocatable for elements of `T`.
    ///
    /// Zero-sized types accept any capacity.
    pub fn validate<T>(&self) -> Result<(), ArrayError> {
        let elem = mem::size_of::<T>();
        if elem == 0 {
            return Ok(());
        }
        match self.initial_capacity.checked_mul(elem) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
            _ => Err(ArrayError::InvalidConfig {
                reason: format!(
                    "initial capacity {} exceeds the addressable size for {elem}-byte elements",
                    self.initial_capacity
                ),
            }),
        }
    }

    /// Capacity to grow to when `current` slots are all in use.
    ///
    /// Grows by half the current capacity, but always by at least one
    /// slot so that arrays with capacity 0 or 1 still make progress.
    /// Returns `None` on arithmetic overflow.
    pub fn grown_capacity(current: usize) -> Option<usize> {
        current.checked_add((current / 2).max(1))
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reserves_two_slots() {
        assert_eq!(ArrayConfig::default().initial_capacity, 2);
    }

    #[test]
    fn growth_sequence_from_two() {
        let mut cap = 2;
        let mut seen = vec![cap];
        for _ in 0..6 {
            cap = ArrayConfig::grown_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![2, 3, 4, 6, 9, 13, 19]);
    }

    #[test]
    fn growth_from_zero_and_one_makes_progress() {
        assert_eq!(ArrayConfig::grown_capacity(0), Some(1));
        assert_eq!(ArrayConfig::grown_capacity(1), Some(2));
    }

    #[test]
    fn growth_overflow_is_none() {
        assert_eq!(ArrayConfig::grown_capacity(usize::MAX), None);
    }

    #[test]
    fn validate_rejects_unaddressable_capacity() {
        let config = ArrayConfig::new(usize::MAX / 2);
        assert!(matches!(
            config.validate::<u64>(),
            Err(ArrayError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_accepts_any_capacity_for_zero_sized_types() {
        assert!(ArrayConfig::new(usize::MAX).validate::<()>().is_ok());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn growth_is_strictly_increasing(cap in 0usize..1_000_000) {
                let next = ArrayConfig::grown_capacity(cap).unwrap();
                prop_assert!(next > cap);
                prop_assert!(next <= cap + cap / 2 + 1);
            }
        }
    }
}
