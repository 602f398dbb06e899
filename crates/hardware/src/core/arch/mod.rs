//! E20 architectural state.
//!
//! This module contains the programmer-visible state of the machine:
//! 1. **GPRs:** Eight 16-bit registers, `$0` hardwired to zero.
//! 2. **Memory:** 8192 16-bit words, addressed modulo their count.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Word-addressed main memory.
pub mod memory;

pub use gpr::Gpr;
pub use memory::Memory;
