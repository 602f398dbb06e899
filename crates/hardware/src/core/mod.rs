//! Core processor implementation.
//!
//! This module contains the E20 CPU: architectural state, the
//! fetch/decode/execute loop, the per-slot decode cache, and the execution
//! units (ALU, branch unit, load/store unit, cache hierarchy).

/// Architectural state (register file, memory).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU, branch unit, load/store unit, caches).
pub mod units;

pub use self::cpu::Cpu;
