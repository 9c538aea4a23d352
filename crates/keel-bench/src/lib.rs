//! Benchmark workloads for the Keel container crates.
//!
//! Provides deterministic operation streams so benches and examples replay
//! the same work on every run:
//!
//! - [`append_only`]: `n` pushes of seeded values
//! - [`mixed_profile`]: pushes, pops, inserts, removes and explicit
//!   reallocations in fixed proportions
//! - [`replay`] / [`replay_on_vec`]: apply a stream to a `DynamicArray` or
//!   to `std::vec::Vec` for comparison

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel_vector::DynamicArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Element count for small-array benches (fits a `SmallVec<[u64; 16]>`).
pub const SMALL: usize = 16;

/// Element count for large-array benches.
pub const LARGE: usize = 10_000;

/// One container operation in a workload stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append a value.
    Push(u64),
    /// Remove the last value, if any.
    Pop,
    /// Insert a value at `index % (len + 1)`.
    Insert(usize, u64),
    /// Remove the value at `index % len`, if any.
    Remove(usize),
    /// Reallocate to `len + slack` slots.
    Reallocate(usize),
}

/// `n` pushes of values drawn from `seed`.
pub fn append_only(seed: u64, n: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| Op::Push(rng.next_u64())).collect()
}

/// `n` operations in a 60/15/10/10/5 mix of push, pop, insert, remove and
/// reallocate.
pub fn mixed_profile(seed: u64, n: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ops = Vec::with_capacity(n);
    for _ in 0..n {
        let op = match rng.next_u64() % 100 {
            0..=59 => Op::Push(rng.next_u64()),
            60..=74 => Op::Pop,
            75..=84 => Op::Insert(rng.next_u64() as usize, rng.next_u64()),
            85..=94 => Op::Remove(rng.next_u64() as usize),
            _ => Op::Reallocate((rng.next_u64() % 8) as usize),
        };
        ops.push(op);
    }
    ops
}

/// Apply `ops` to a fresh [`DynamicArray`].
pub fn replay(ops: &[Op]) -> DynamicArray<u64> {
    let mut array = DynamicArray::new();
    for op in ops {
        match *op {
            Op::Push(v) => array.push(v),
            Op::Pop => array.remove_last(),
            Op::Insert(index, v) => {
                let index = index % (array.size() + 1);
                array.insert(index, v);
            }
            Op::Remove(index) => {
                if !array.is_empty() {
                    let index = index % array.size();
                    array.remove(index);
                }
            }
            Op::Reallocate(slack) => {
                let target = array.size() + slack;
                array.reallocate(target);
            }
        }
    }
    array
}

/// Apply `ops` to a fresh `Vec`, reallocation mapped onto
/// `shrink_to` / `reserve_exact`.
pub fn replay_on_vec(ops: &[Op]) -> Vec<u64> {
    let mut vec = Vec::with_capacity(2);
    for op in ops {
        match *op {
            Op::Push(v) => vec.push(v),
            Op::Pop => {
                vec.pop();
            }
            Op::Insert(index, v) => {
                let index = index % (vec.len() + 1);
                vec.insert(index, v);
            }
            Op::Remove(index) => {
                if !vec.is_empty() {
                    let index = index % vec.len();
                    vec.remove(index);
                }
            }
            Op::Reallocate(slack) => {
                let target = vec.len() + slack;
                if target < vec.capacity() {
                    vec.shrink_to(target);
                } else {
                    vec.reserve_exact(target - vec.len());
                }
            }
        }
    }
    vec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(mixed_profile(42, 500), mixed_profile(42, 500));
        assert_ne!(mixed_profile(42, 500), mixed_profile(43, 500));
        assert_eq!(append_only(7, 10), append_only(7, 10));
    }

    #[test]
    fn append_only_is_all_pushes() {
        let ops = append_only(1, SMALL);
        assert_eq!(ops.len(), SMALL);
        assert!(ops.iter().all(|op| matches!(op, Op::Push(_))));
        assert_eq!(replay(&ops).size(), SMALL);
    }

    #[test]
    fn replays_agree_with_vec() {
        let ops = mixed_profile(42, LARGE);
        let array = replay(&ops);
        let vec = replay_on_vec(&ops);
        assert_eq!(array, vec);
    }
}
