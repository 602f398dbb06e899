//! Configuration, Load, and Simulator Errors.
//!
//! The E20 core has no runtime faults: every encoding executes. Errors only arise
//! before simulation starts. This module provides:
//! 1. **Configuration Errors:** Malformed `--cache` strings and impossible cache geometry.
//! 2. **Load Errors:** Unreadable files and malformed or oversized program images.
//! 3. **Simulator Errors:** An umbrella type for callers that drive the whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration string did not contain one or two size/assoc/blocksize triples.
    #[error("Invalid cache config: expected 3 or 6 comma-separated integers, got {0}")]
    FieldCount(usize),

    /// A field could not be parsed as a non-negative integer.
    #[error("Invalid cache config: `{0}` is not a non-negative integer")]
    InvalidNumber(String),

    /// A geometry field was zero.
    #[error("Invalid cache config: {field} must be greater than zero")]
    Zero {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The size is too small to hold a single set of `associativity` blocks.
    #[error(
        "Invalid cache config: size {size} holds no rows with associativity {associativity} and blocksize {block_size}"
    )]
    NoRows {
        /// Total cache size in words.
        size: usize,
        /// Ways per set.
        associativity: usize,
        /// Words per block.
        block_size: usize,
    },

    /// The geometry needs more lines than a cache level may hold.
    #[error(
        "Invalid cache config: size {size} with associativity {associativity} and blocksize {block_size} exceeds {max_lines} lines"
    )]
    TooLarge {
        /// Total cache size in words.
        size: usize,
        /// Ways per set.
        associativity: usize,
        /// Words per block.
        block_size: usize,
        /// Line limit per level.
        max_lines: usize,
    },
}

/// Failure while reading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("Can't open file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not match `ram[<addr>] = 16'b<bits>;`.
    #[error("Can't parse line {line}: {text}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Addresses must start at zero and increase by one per line.
    #[error("Memory addresses encountered out of sequence: {found} (expected {expected})")]
    OutOfSequence {
        /// The address the loader expected next.
        expected: usize,
        /// The address found in the image.
        found: usize,
    },

    /// The image addresses a word beyond the end of memory.
    #[error("Program too big for memory: address {0}")]
    TooBig(usize),
}

/// Any error that prevents a simulation from starting.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid cache configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid or unreadable program image.
    #[error(transparent)]
    Load(#[from] LoadError),
}
