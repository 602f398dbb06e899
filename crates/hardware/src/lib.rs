//! E20 system simulator library.
//!
//! This crate implements an instruction-level simulator for the 16-bit E20 ISA with the following:
//! 1. **Core:** Eight 16-bit registers, 8192 words of memory, and a fetch/decode/execute loop.
//! 2. **ISA:** Field extraction, decoding into a tagged instruction, and a disassembler.
//! 3. **Caches:** One or two observational cache levels with per-set LRU replacement.
//! 4. **Simulation:** Text image loader, configuration, run façade, and report formatting.
//! 5. **Statistics:** Instruction mix and per-level cache counters.

/// Common types and constants (machine geometry, errors).
pub mod common;
/// Simulator configuration (cache geometry, step ceiling, dump size).
pub mod config;
/// CPU core (register file, memory, execution, caches).
pub mod core;
/// Instruction set (field extraction, decode, disassembly).
pub mod isa;
/// Image loader, simulator façade, and report formatting.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, caches, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
