//! Cache simulator tests.

/// Single-level address mapping, classification, and replacement.
pub mod cache_sim;
