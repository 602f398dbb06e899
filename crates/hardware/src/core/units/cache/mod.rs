//! Set-Associative Cache Simulator.
//!
//! This module implements a configurable set-associative cache level and the
//! one- or two-level hierarchy built from it. The caches are observational:
//! they hold tags only, never data, and classify every load and store as a
//! hit, a miss, or a store without affecting program results.
//!
//! For a level with size `S`, associativity `A`, and block size `B` (all in
//! words), there are `R = S / (B * A)` sets. An address maps to set
//! `(addr / B) mod R` with tag `addr / (B * R)`. `A = 1` is direct-mapped;
//! `R = 1` is fully associative.

/// One- or two-level cache hierarchy with an access event log.
pub mod hierarchy;

/// Cache replacement policy implementations.
pub mod policies;

use std::fmt;

use serde::Serialize;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::error::ConfigError;
use crate::config::CacheConfig;

pub use hierarchy::{AccessEvent, CacheHierarchy, CacheLevel};

/// Classification of one cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessStatus {
    /// A load found its tag in the level.
    Hit,
    /// A load did not find its tag; the tag was installed.
    Miss,
    /// Any store, whether or not the tag was present; the tag is installed.
    Store,
}

impl AccessStatus {
    /// Label used in the access log (`HIT`, `MISS`, `SW`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Store => "SW",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cache line entry containing a tag and its validity.
#[derive(Clone, Copy, Debug, Default)]
struct CacheLine {
    tag: usize,
    valid: bool,
}

/// A single set-associative cache level with LRU replacement.
#[derive(Debug)]
pub struct CacheSim {
    config: CacheConfig,
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
    block_size: usize,
    policy: Box<dyn ReplacementPolicy + Send + Sync>,
}

impl CacheSim {
    /// Creates an empty cache level.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any field is zero, no set fits in `size`,
    /// or the level would exceed the line limit.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let num_sets = config.rows();
        let ways = config.associativity;

        Ok(Self {
            config: *config,
            lines: vec![CacheLine::default(); num_sets * ways],
            num_sets,
            ways,
            block_size: config.block_size,
            policy: Box::new(LruPolicy::new(num_sets, ways)),
        })
    }

    /// The geometry this level was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of sets (rows).
    pub const fn rows(&self) -> usize {
        self.num_sets
    }

    /// Ways per set.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Set (row) that `addr` maps to.
    #[inline]
    pub const fn set_index(&self, addr: usize) -> usize {
        (addr / self.block_size) % self.num_sets
    }

    /// Tag stored for `addr`.
    #[inline]
    pub const fn tag(&self, addr: usize) -> usize {
        addr / (self.block_size * self.num_sets)
    }

    /// Checks if the block holding `addr` is resident, without touching LRU state.
    pub fn contains(&self, addr: usize) -> bool {
        self.find_way(self.set_index(addr), self.tag(addr)).is_some()
    }

    /// Tags currently resident in `set`, in way order.
    pub fn resident_tags(&self, set: usize) -> Vec<usize> {
        let base = set * self.ways;
        self.lines[base..base + self.ways]
            .iter()
            .filter(|line| line.valid)
            .map(|line| line.tag)
            .collect()
    }

    /// Invalidates every line and restores the initial LRU order.
    pub fn flush(&mut self) {
        self.lines.fill(CacheLine::default());
        self.policy = Box::new(LruPolicy::new(self.num_sets, self.ways));
    }

    /// Looks up `addr`, installs its tag on a miss, and updates LRU state.
    ///
    /// Placement prefers an invalid way of the set; once the set is full the
    /// least recently used way of that set is evicted. Stores are classified
    /// as [`AccessStatus::Store`] whether or not the tag was resident.
    pub fn classify(&mut self, addr: usize, is_store: bool) -> AccessStatus {
        let set = self.set_index(addr);
        let tag = self.tag(addr);

        let found = self.find_way(set, tag);
        let way = match found {
            Some(way) => way,
            None => {
                let way = self.victim(set);
                self.lines[set * self.ways + way] = CacheLine { tag, valid: true };
                way
            }
        };
        self.policy.update(set, way);

        if is_store {
            AccessStatus::Store
        } else if found.is_some() {
            AccessStatus::Hit
        } else {
            AccessStatus::Miss
        }
    }

    /// Returns the way of `set` holding `tag`, if any.
    fn find_way(&self, set: usize, tag: usize) -> Option<usize> {
        let base = set * self.ways;
        (0..self.ways).find(|&way| {
            let line = &self.lines[base + way];
            line.valid && line.tag == tag
        })
    }

    /// Chooses the way to fill: the first invalid way, else the LRU way.
    fn victim(&mut self, set: usize) -> usize {
        let base = set * self.ways;
        match (0..self.ways).find(|&way| !self.lines[base + way].valid) {
            Some(way) => way,
            None => self.policy.get_victim(set),
        }
    }
}
