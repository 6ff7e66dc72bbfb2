//! Operating system entropy source
//!
//! This module implements the random-bit source underneath every derived
//! operation in the crate. It reads the operating system's secure random
//! pool through the `os` layer and buffers one fixed-size block at a
//! time, so small draws (single bytes, fixed-width integers) do not pay
//! one system call each.
//!
//! The source:
//! - is cryptographically strong (the OS pool is the only entropy origin)
//! - avoids heap allocations
//! - is strictly sequential (`&mut self` on every draw)

use crate::os::sys_random;

/// Number of bytes fetched from the OS per refill.
const BLOCK: usize = 64;

/// Buffered reader over the operating system's secure random source.
///
/// The buffer starts empty and the first draw triggers a refill. Integer
/// draws are reconstructed from buffered bytes in little-endian order.
pub struct OsEntropy {
    /// Buffered random bytes, unread from `cursor` to the end.
    block: [u8; BLOCK],

    /// Next unread position in `block`; `BLOCK` means exhausted.
    cursor: usize,
}

impl OsEntropy {
    /// Creates a source with an exhausted buffer.
    ///
    /// No entropy is read until the first draw.
    pub fn new() -> Self {
        Self {
            block: [0u8; BLOCK],
            cursor: BLOCK,
        }
    }

    /// Fills the provided buffer with random bytes.
    ///
    /// Requests of a full block or more skip the internal buffer and read
    /// the operating system directly; smaller requests drain the buffered
    /// block.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        if out.len() >= BLOCK {
            sys_random(out);
            return;
        }

        for slot in out.iter_mut() {
            *slot = self.next_byte();
        }
    }

    /// Returns one uniformly random byte.
    pub fn next_byte(&mut self) -> u8 {
        if self.cursor == BLOCK {
            sys_random(&mut self.block);
            self.cursor = 0;
        }

        let byte = self.block[self.cursor];
        self.cursor += 1;

        byte
    }

    /// Returns a uniformly random `u32`.
    pub fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);

        u32::from_le_bytes(bytes)
    }

    /// Returns a uniformly random `u64`.
    pub fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);

        u64::from_le_bytes(bytes)
    }

    /// Returns a uniformly random `i32` over the full signed range.
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Returns a uniformly random `i64` over the full signed range.
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

impl Default for OsEntropy {
    /// Creates a default source, identical to [`OsEntropy::new`].
    fn default() -> Self {
        Self::new()
    }
}
