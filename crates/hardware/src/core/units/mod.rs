//! Execution units and functional components.
//!
//! This module contains the E20 execution units: the ALU for register-register
//! arithmetic, the branch resolution unit for jump targets and halt detection,
//! the load/store unit for effective addresses, and the observational cache
//! hierarchy.

/// Arithmetic Logic Unit for register-register operations.
pub mod alu;

/// Branch Resolution Unit (jump targets, branch targets, halt detection).
pub mod bru;

/// Cache hierarchy (L1, optional L2) with per-set LRU replacement.
pub mod cache;

/// Load/Store Unit address generation.
pub mod lsu;
