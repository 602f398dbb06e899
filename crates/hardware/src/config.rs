//! Configuration system for the E20 simulator.
//!
//! This module defines the structures used to parameterize a simulation run. It provides:
//! 1. **Defaults:** Dump size and the absence of a cache or step ceiling.
//! 2. **Structures:** Per-level cache geometry, the one- or two-level hierarchy, and the root `Config`.
//! 3. **Parsing:** The comma-separated `--cache` grammar (`size,assoc,blocksize[,size,assoc,blocksize]`).
//!
//! Configuration is supplied by the CLI, or deserialized from JSON:
//!
//! ```
//! use e20_core::config::Config;
//!
//! let json = r#"{ "cache": { "l1": { "size": 64, "associativity": 2, "block_size": 4 } } }"#;
//! let config: Config = serde_json::from_str(json).unwrap();
//! assert_eq!(config.cache.unwrap().l1.rows(), 8);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::{DEFAULT_DUMP_WORDS, MAX_CACHE_LINES};
use crate::common::error::ConfigError;

/// Number of integers describing one cache level.
const FIELDS_PER_LEVEL: usize = 3;

/// Geometry of a single cache level.
///
/// Sizes are measured in memory words, the unit the E20 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Total cache size in words.
    pub size: usize,

    /// Ways per set (1 = direct-mapped).
    pub associativity: usize,

    /// Words per block.
    #[serde(alias = "blocksize")]
    pub block_size: usize,
}

impl CacheConfig {
    /// Creates a cache level configuration.
    pub const fn new(size: usize, associativity: usize, block_size: usize) -> Self {
        Self {
            size,
            associativity,
            block_size,
        }
    }

    /// Number of sets (rows): `size / (block_size * associativity)`.
    ///
    /// Returns 0 for geometry that `validate` rejects.
    pub const fn rows(&self) -> usize {
        match self.block_size.checked_mul(self.associativity) {
            Some(0) | None => 0,
            Some(per_row) => self.size / per_row,
        }
    }

    /// Checks that every field is non-zero, that at least one row fits, and
    /// that the level holds at most [`MAX_CACHE_LINES`] lines.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Zero { field: "size" });
        }
        if self.associativity == 0 {
            return Err(ConfigError::Zero {
                field: "associativity",
            });
        }
        if self.block_size == 0 {
            return Err(ConfigError::Zero {
                field: "blocksize",
            });
        }
        if self.rows() == 0 {
            return Err(ConfigError::NoRows {
                size: self.size,
                associativity: self.associativity,
                block_size: self.block_size,
            });
        }
        match self.rows().checked_mul(self.associativity) {
            Some(lines) if lines <= MAX_CACHE_LINES => Ok(()),
            _ => Err(ConfigError::TooLarge {
                size: self.size,
                associativity: self.associativity,
                block_size: self.block_size,
                max_lines: MAX_CACHE_LINES,
            }),
        }
    }
}

/// One or two cache levels; L2 is only consulted when L1 does not hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheHierarchyConfig {
    /// First-level cache.
    pub l1: CacheConfig,

    /// Optional second-level cache.
    #[serde(default)]
    pub l2: Option<CacheConfig>,
}

impl CacheHierarchyConfig {
    /// A single-level hierarchy.
    pub const fn single(l1: CacheConfig) -> Self {
        Self { l1, l2: None }
    }

    /// A two-level hierarchy.
    pub const fn two_level(l1: CacheConfig, l2: CacheConfig) -> Self {
        Self { l1, l2: Some(l2) }
    }

    /// Validates every configured level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.l1.validate()?;
        if let Some(l2) = &self.l2 {
            l2.validate()?;
        }
        Ok(())
    }
}

impl FromStr for CacheHierarchyConfig {
    type Err = ConfigError;

    /// Parses `size,assoc,blocksize` or `size,assoc,blocksize,size,assoc,blocksize`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != FIELDS_PER_LEVEL && fields.len() != 2 * FIELDS_PER_LEVEL {
            return Err(ConfigError::FieldCount(fields.len()));
        }

        let values = fields
            .iter()
            .map(|f| {
                f.parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber((*f).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let level = |chunk: &[usize]| CacheConfig::new(chunk[0], chunk[1], chunk[2]);
        let config = match values.as_slice() {
            [a, b, c] => Self::single(CacheConfig::new(*a, *b, *c)),
            six => Self::two_level(level(&six[..3]), level(&six[3..])),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Cache hierarchy to observe loads and stores; `None` disables cache simulation.
    #[serde(default)]
    pub cache: Option<CacheHierarchyConfig>,

    /// Optional ceiling on retired instructions. `None` runs until the halt pattern.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Memory words included in the final state dump.
    #[serde(default = "Config::default_dump_words")]
    pub dump_words: usize,
}

impl Config {
    /// Returns the default number of dumped memory words.
    const fn default_dump_words() -> usize {
        DEFAULT_DUMP_WORDS
    }
}

impl Default for Config {
    /// No caches, no step ceiling, 128-word dump.
    fn default() -> Self {
        Self {
            cache: None,
            max_steps: None,
            dump_words: DEFAULT_DUMP_WORDS,
        }
    }
}
