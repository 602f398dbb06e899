//! Load/Store Unit (LSU).
//!
//! Generates the effective address shared by `lw`, `sw`, and the cache
//! hierarchy, so the caches always observe exactly the word the memory
//! operation touches.

use crate::common::constants::ADDR_MASK;

/// Load/Store Unit address generation.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Effective address `(base + offset) mod 8192`.
    ///
    /// # Arguments
    ///
    /// * `base`   - Value of the base register.
    /// * `offset` - Sign-extended 7-bit immediate.
    #[inline]
    pub const fn effective_address(base: u16, offset: u16) -> u16 {
        base.wrapping_add(offset) & ADDR_MASK
    }
}
