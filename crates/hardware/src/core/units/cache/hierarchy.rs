//! Cache Hierarchy and Access Log.
//!
//! Composes one or two [`CacheSim`] levels. Every load and store probes L1;
//! L2 is probed only when L1 does not report a hit, which means loads that
//! miss L1 and every store. Each probe appends one [`AccessEvent`] to an
//! append-only log.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use super::{AccessStatus, CacheSim};
use crate::common::error::ConfigError;
use crate::config::CacheHierarchyConfig;

/// Position of a cache in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CacheLevel {
    /// First-level cache, probed on every access.
    L1,
    /// Second-level cache, probed when L1 does not hit.
    L2,
}

impl CacheLevel {
    /// Short name used in reports (`L1`, `L2`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified probe of one cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    /// Level that was probed.
    pub level: CacheLevel,
    /// Outcome of the probe.
    pub status: AccessStatus,
    /// Program counter of the `lw`/`sw` that caused the access.
    pub pc: u16,
    /// Effective 13-bit word address.
    pub address: u16,
    /// Set (row) the address maps to in this level.
    pub row: usize,
}

impl fmt::Display for AccessEvent {
    /// Formats the event as a log line, e.g. `L1 MISS  pc:    3\taddr:   64\trow:   0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} {}", self.level, self.status);
        write!(
            f,
            "{label:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
            self.pc, self.address, self.row
        )
    }
}

/// The configured cache levels and the log of their accesses.
#[derive(Debug)]
pub struct CacheHierarchy {
    levels: Vec<(CacheLevel, CacheSim)>,
    log: Vec<AccessEvent>,
}

impl CacheHierarchy {
    /// Builds empty caches for every level in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either level has invalid geometry.
    pub fn new(config: &CacheHierarchyConfig) -> Result<Self, ConfigError> {
        let mut levels = vec![(CacheLevel::L1, CacheSim::new(&config.l1)?)];
        if let Some(l2) = &config.l2 {
            levels.push((CacheLevel::L2, CacheSim::new(l2)?));
        }

        for (level, cache) in &levels {
            let geometry = cache.config();
            info!(
                level = %level,
                size = geometry.size,
                associativity = geometry.associativity,
                blocksize = geometry.block_size,
                rows = cache.rows(),
                "cache level configured"
            );
        }

        Ok(Self {
            levels,
            log: Vec::new(),
        })
    }

    /// Classifies an access by the instruction at `pc` to `address`.
    ///
    /// Probes L1, then L2 unless L1 hit. Returns the events appended by this
    /// access, in level order.
    pub fn access(&mut self, pc: u16, address: u16, is_store: bool) -> &[AccessEvent] {
        let start = self.log.len();
        let addr = address as usize;

        for (level, cache) in &mut self.levels {
            let row = cache.set_index(addr);
            let status = cache.classify(addr, is_store);
            debug!(level = %level, %status, pc, address, row, "cache access");

            self.log.push(AccessEvent {
                level: *level,
                status,
                pc,
                address,
                row,
            });

            if status == AccessStatus::Hit {
                break;
            }
        }

        &self.log[start..]
    }

    /// The configured levels, L1 first.
    pub fn levels(&self) -> impl Iterator<Item = (CacheLevel, &CacheSim)> {
        self.levels.iter().map(|(level, cache)| (*level, cache))
    }

    /// The cache at `level`, if configured.
    pub fn level(&self, level: CacheLevel) -> Option<&CacheSim> {
        self.levels
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, cache)| cache)
    }

    /// Every event recorded since construction or the last [`take_log`](Self::take_log).
    pub fn log(&self) -> &[AccessEvent] {
        &self.log
    }

    /// Empties every level and discards the event log.
    pub fn reset(&mut self) {
        for (_, cache) in &mut self.levels {
            cache.flush();
        }
        self.log.clear();
    }

    /// Removes and returns the recorded events.
    pub fn take_log(&mut self) -> Vec<AccessEvent> {
        std::mem::take(&mut self.log)
    }
}
