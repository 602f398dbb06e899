//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Machine geometry (register count, memory size, address mask).
//! 2. **Error Handling:** Configuration, load, and top-level simulator errors.

/// Machine-wide constants.
pub mod constants;

/// Error types for configuration and program loading.
pub mod error;

pub use constants::{ADDR_MASK, MAX_CACHE_LINES, MEM_SIZE, NUM_REGS};
pub use error::{ConfigError, LoadError, SimError};
