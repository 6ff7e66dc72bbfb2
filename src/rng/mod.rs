//! Random generation module
//!
//! Convenience randomness built on the operating system's secure random
//! source.
//!
//! The module is layered: [`OsEntropy`] turns OS entropy into bytes and
//! fixed-width integers, and [`Random`] derives the shaped draws on top
//! (bounded integers, indexes, characters and strings, uniform choice).

/// Design goals:
/// - Cryptographically strong entropy from the OS on every platform
/// - No heap allocation in the draw path
/// - Explicit results, no hidden generator state beyond the source
/// - Minimal and explicit API surface
mod random;
mod source;

/// Extended random generator and its companion types.
///
/// [`Random`] is the primary entry point for shaped randomness within
/// the crate.
pub use random::{CANDIDATE_CHARS, NonNegative, Random, RandomError};

/// Buffered reader over the operating system's secure random source.
pub use source::OsEntropy;
