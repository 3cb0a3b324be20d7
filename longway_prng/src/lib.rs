// Deterministic, portable pseudo-random number generator for run maps.
//
// Implements Mulberry32: a 32-bit Weyl sequence (increment `0x6D2B79F5`)
// passed through two multiply-xorshift mixing rounds. The whole state is one
// `u32` word, and every operation is explicit wrapping `u32` arithmetic, so a
// given seed yields the same stream on every target and in every conforming
// implementation (including the web client this map format is shared with).
//
// This crate is the single PRNG used by `longway_map`. Run generation threads
// one `RunRng` through acts, rows and nodes in a fixed order; the seed is the
// only input that decides the shape of a run.
//
// **Critical constraint: determinism.** `next_u32` must produce identical
// output given the same prior state, regardless of platform, compiler version,
// or optimization level. Floating point is only used to scale an already
// generated `u32` into [0, 1), which is exact in an `f64`.

use serde::{Deserialize, Serialize};

/// Weyl increment added to the state on every step.
const WEYL: u32 = 0x6D2B_79F5;

/// 2^32, the divisor that maps a `u32` into [0, 1).
const U32_SPAN: f64 = 4_294_967_296.0;

/// Mulberry32 PRNG: the run generator's sole source of randomness.
///
/// A run owns exactly one `RunRng`, created from the run seed and passed by
/// `&mut` through every generation step. Never share one instance across
/// threads: the draw order is part of the reproducibility contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRng {
    state: u32,
}

impl RunRng {
    /// Create a new PRNG from a 32-bit seed.
    ///
    /// Two `RunRng` instances created with the same seed produce identical
    /// output sequences.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate the next `u32` in the sequence.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(WEYL);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Every `u32` is exactly representable in an `f64`, and the division by
    /// 2^32 only shifts the exponent, so the result is bit-identical
    /// everywhere.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_SPAN
    }

    /// Generate an integer in `[0, bound_exclusive)` as
    /// `floor(next_f64() * bound_exclusive)`.
    ///
    /// Panics if `bound_exclusive == 0`. Callers never draw from an empty
    /// range; hitting this is a bug in the caller.
    pub fn next_int(&mut self, bound_exclusive: usize) -> usize {
        assert!(bound_exclusive > 0, "next_int: bound must be non-zero");
        let v = (self.next_f64() * bound_exclusive as f64).floor() as usize;
        // next_f64 < 1.0, so this only guards against rounding for huge bounds.
        v.min(bound_exclusive - 1)
    }

    /// Generate an integer in `[low, high]` (inclusive on both ends).
    ///
    /// Panics if `low > high`.
    pub fn range_usize_inclusive(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "range_usize_inclusive: low must be <= high");
        low + self.next_int(high - low + 1)
    }
}
