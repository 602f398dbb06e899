//! Branch Resolution Unit (BRU).
//!
//! Computes next-pc values for the E20 control-flow instructions and detects
//! the halt pattern. The program counter is a 16-bit value: relative targets
//! wrap at 2^16 and are only reduced to 13 bits when memory is indexed.

use crate::common::constants::ADDR_MASK;

/// Branch resolution helpers.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Address of the next sequential instruction.
    #[inline]
    pub const fn fall_through(pc: u16) -> u16 {
        pc.wrapping_add(1)
    }

    /// Target of a taken `jeq`: `pc + 1 + offset`.
    ///
    /// `offset` is the already sign-extended 7-bit immediate.
    #[inline]
    pub const fn branch_target(pc: u16, offset: u16) -> u16 {
        pc.wrapping_add(offset).wrapping_add(1)
    }

    /// Returns `true` when a `j` at `pc` jumping to `target` is the halt pattern.
    ///
    /// The comparison is made on the 13-bit memory slot, so a counter that has
    /// run past 8191 still halts on its own slot.
    #[inline]
    pub const fn is_halt(pc: u16, target: u16) -> bool {
        target == pc & ADDR_MASK
    }
}
