//! Simulation-level tests.


/// Cache banner and final state formatting.
pub mod report;
