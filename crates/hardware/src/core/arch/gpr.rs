//! E20 General-Purpose Register File.
//!
//! This module implements the register file of the E20. It performs the following:
//! 1. **Storage:** Maintains 8 unsigned 16-bit registers (`$0`-`$7`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Observability:** Exposes a snapshot of all registers for reporting.

use crate::common::constants::NUM_REGS;

/// General-Purpose Register file.
///
/// Register `$0` always reads as zero; writes to it are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Register `$0` always returns 0.
    #[inline]
    pub const fn read(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Writes to `$0` are ignored.
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u16) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all eight registers, `$0` first.
    pub const fn snapshot(&self) -> [u16; NUM_REGS] {
        self.regs
    }
}
