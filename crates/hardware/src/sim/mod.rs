//! Simulation utilities and program loading.
//!
//! Provides the text image loader, the run façade that owns the CPU, and the
//! formatting of the cache banner and final state report.

/// Program image parsing and file loading.
pub mod loader;
/// Cache banner and final state formatting.
pub mod report;
/// Top-level simulator and run outcome.
pub mod simulator;

pub use self::simulator::{RunOutcome, Simulator};
