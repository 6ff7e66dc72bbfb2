//! Extended random generator
//!
//! This module provides [`Random`], a convenience layer over the OS
//! entropy source with the shaped draws the rest of a codebase actually
//! asks for: bounded integers, slice indexes, random characters and
//! strings, sign-folded non-negative values, and uniform choice.
//!
//! The generator holds its source by composition and every draw reports
//! its full outcome in the return value. In particular, the non-negative
//! draws return the sign of the raw value alongside the result instead
//! of recording it on the generator.
//!
//! ## Deliberate quirks
//!
//! Two behaviors are part of the contract and must not be "fixed":
//!
//! - [`Random::next_bool`] is a sign reinterpretation of a full-range
//!   signed draw, not an even coin flip.
//! - [`Random::next_non_negative_i64`] and
//!   [`Random::next_non_negative_i32`] return the most negative value
//!   unchanged, since it has no positive counterpart.

use crate::rng::source::OsEntropy;

/// Candidate alphabet for [`Random::next_char`] and
/// [`Random::random_string`], in draw order.
pub const CANDIDATE_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ`~!@#$%^&*()_-=+,./?;:'\"{}[]\\|,<.>";

/// Errors that may occur during shaped draws.
#[derive(Debug)]
pub enum RandomError {
    /// The inclusive range is inverted or empty (`high < low`).
    NegativeInterval,

    /// An empty candidate slice was given to [`Random::choose`].
    EmptyCandidates,
}

/// Result of a sign-folding draw.
///
/// Carries the folded value together with the sign of the raw draw, so
/// callers that care whether folding happened read it off the result
/// rather than off generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative<T> {
    /// The folded, non-negative value.
    pub value: T,

    /// `true` when the raw draw was negative and had its sign flipped.
    pub was_negative: bool,
}

/// Extended random generator.
///
/// Owns an [`OsEntropy`] source and derives shaped draws from it. All
/// draws take `&mut self`; shared use across threads needs per-thread
/// instances or an external lock.
pub struct Random {
    source: OsEntropy,
}

impl Random {
    /// Creates a generator backed by a fresh OS entropy source.
    pub fn new() -> Self {
        Self {
            source: OsEntropy::new(),
        }
    }

    /// Returns an index in `[0, length)`.
    ///
    /// Draws a full-range signed 32-bit value, folds it to its
    /// magnitude, and reduces modulo `length`. A raw draw of `i32::MIN`
    /// folds to `2^31` rather than staying negative; every other input
    /// keeps the fold-then-reduce distribution.
    ///
    /// # Panics
    /// Panics if `length == 0` (remainder by zero).
    pub fn next_index(&mut self, length: usize) -> usize {
        let raw = self.source.next_i32();

        raw.unsigned_abs() as usize % length
    }

    /// Returns an index valid for `items`.
    ///
    /// Equivalent to [`Random::next_index`] over the slice length.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn next_index_in<T>(&mut self, items: &[T]) -> usize {
        self.next_index(items.len())
    }

    /// Returns a value in `[low, high]`, both endpoints included.
    ///
    /// The interval width is computed at 64-bit width, so the full
    /// domain call `next_i32_in(i32::MIN, i32::MAX)` is valid. A
    /// degenerate range (`low == high`) always returns `low`.
    ///
    /// # Errors
    /// Returns [`RandomError::NegativeInterval`] when `high < low`.
    pub fn next_i32_in(&mut self, low: i32, high: i32) -> Result<i32, RandomError> {
        let interval = i64::from(high) - i64::from(low) + 1;

        if interval <= 0 {
            return Err(RandomError::NegativeInterval);
        }

        let offset = self.next_below(interval as u64) as i64;

        Ok((i64::from(low) + offset) as i32)
    }

    /// Returns one uniformly random byte.
    pub fn next_byte(&mut self) -> u8 {
        self.source.next_byte()
    }

    /// Draws a full-range `i64` and folds it non-negative.
    ///
    /// [`NonNegative::was_negative`] records whether the raw draw was
    /// below zero.
    ///
    /// Known limitation, kept as specified: a raw draw of `i64::MIN` has
    /// no positive counterpart and is returned unchanged, still negative.
    pub fn next_non_negative_i64(&mut self) -> NonNegative<i64> {
        let raw = self.source.next_i64();

        NonNegative {
            value: if raw < 0 { raw.wrapping_neg() } else { raw },
            was_negative: raw < 0,
        }
    }

    /// 32-bit variant of [`Random::next_non_negative_i64`], with the
    /// same limitation at `i32::MIN`.
    pub fn next_non_negative_i32(&mut self) -> NonNegative<i32> {
        let raw = self.source.next_i32();

        NonNegative {
            value: if raw < 0 { raw.wrapping_neg() } else { raw },
            was_negative: raw < 0,
        }
    }

    /// Returns one character drawn from [`CANDIDATE_CHARS`].
    pub fn next_char(&mut self) -> char {
        CANDIDATE_CHARS[self.next_index(CANDIDATE_CHARS.len())] as char
    }

    /// Builds a string of `length` characters, each drawn independently
    /// from [`CANDIDATE_CHARS`].
    ///
    /// A `length` of zero yields an empty string.
    pub fn random_string(&mut self, length: usize) -> String {
        let mut out = String::with_capacity(length);

        for _ in 0..length {
            out.push(self.next_char());
        }

        out
    }

    /// Returns `true` when a full-range signed draw lands at or above
    /// zero.
    ///
    /// This is a sign reinterpretation, not an even coin flip: two's
    /// complement holds one more negative value than positive, so
    /// `false` is marginally more likely. The rule is part of the
    /// contract.
    pub fn next_bool(&mut self) -> bool {
        self.source.next_i32() >= 0
    }

    /// Picks one element of `candidates` uniformly at random.
    ///
    /// A single-element slice always yields that element.
    ///
    /// # Errors
    /// Returns [`RandomError::EmptyCandidates`] when `candidates` is
    /// empty.
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Result<&'a T, RandomError> {
        if candidates.is_empty() {
            return Err(RandomError::EmptyCandidates);
        }

        let index = self.next_below(candidates.len() as u64) as usize;

        Ok(&candidates[index])
    }

    /// Uniform draw in `[0, bound)` by rejection sampling.
    ///
    /// Raw 64-bit draws at or above the largest multiple of `bound` are
    /// discarded and redrawn.
    fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);

        if bound.is_power_of_two() {
            return self.source.next_u64() & (bound - 1);
        }

        let threshold = u64::MAX - (u64::MAX % bound);

        loop {
            let raw = self.source.next_u64();

            if raw < threshold {
                return raw % bound;
            }
        }
    }
}

impl Default for Random {
    /// Creates a default generator, identical to [`Random::new`].
    fn default() -> Self {
        Self::new()
    }
}
