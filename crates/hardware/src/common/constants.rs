//! Global System Constants.
//!
//! This module defines the fixed geometry of the E20 machine. It includes:
//! 1. **Register Constants:** Register count and the link register used by `jal`.
//! 2. **Memory Constants:** Word count and the mask that reduces addresses modulo memory size.
//! 3. **Cache Constants:** Upper bound on the lines a simulated cache level may hold.
//! 4. **Reporting Constants:** Default number of memory words in the final dump.

/// Number of general-purpose registers (`$0`-`$7`).
pub const NUM_REGS: usize = 8;

/// Register written with the return address by `jal`.
pub const LINK_REG: usize = 7;

/// Number of 16-bit words of memory (2^13).
pub const MEM_SIZE: usize = 1 << 13;

/// Mask reducing a 16-bit value to a 13-bit memory address.
pub const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

/// Most lines (`rows * associativity`) a single cache level may have.
pub const MAX_CACHE_LINES: usize = 1 << 20;

/// Number of memory words printed in the final state dump.
pub const DEFAULT_DUMP_WORDS: usize = 128;

/// Memory words printed per line in the final state dump.
pub const DUMP_WORDS_PER_LINE: usize = 8;
