//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the E20 simulator. It provides:
//! 1. **Retirement:** Total instructions retired.
//! 2. **Instruction mix:** Counts by category (ALU, immediate, load, store, jump, branch, data).
//! 3. **Control flow:** Conditional branches taken.
//! 4. **Cache hierarchy:** Hit, miss, and store counts for L1 and L2.
//!
//! Statistics are deterministic: no host timing is recorded, so two runs of
//! the same image and configuration produce identical output.

use std::fmt;

use serde::Serialize;

use crate::core::units::cache::{AccessEvent, AccessStatus, CacheLevel};
use crate::isa::decode::InstructionClass;

/// Hit, miss, and store counts for one cache level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Loads that found their tag.
    pub hits: u64,
    /// Loads that did not find their tag.
    pub misses: u64,
    /// Stores observed by the level.
    pub stores: u64,
}

impl CacheStats {
    /// Total accesses observed by the level.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses + self.stores
    }

    /// Fraction of loads that hit, or `None` when no load reached the level.
    pub fn hit_rate(&self) -> Option<f64> {
        let loads = self.hits + self.misses;
        (loads > 0).then(|| self.hits as f64 / loads as f64)
    }
}

/// Simulation statistics structure tracking all execution metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of register-register ALU instructions retired.
    pub inst_alu: u64,
    /// Count of `addi`/`slti` instructions retired.
    pub inst_immediate: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of `j`/`jal`/`jr` instructions retired.
    pub inst_jump: u64,
    /// Count of `jeq` instructions retired.
    pub inst_branch: u64,
    /// Count of data words executed as no-ops.
    pub inst_data: u64,

    /// Number of `jeq` instructions whose branch was taken.
    pub branches_taken: u64,

    /// L1 cache counters.
    pub l1: CacheStats,
    /// L2 cache counters.
    pub l2: CacheStats,
}

impl SimStats {
    /// Records one retired instruction of class `class`.
    pub const fn record_instruction(&mut self, class: InstructionClass) {
        self.instructions_retired += 1;
        match class {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Immediate => self.inst_immediate += 1,
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Store => self.inst_store += 1,
            InstructionClass::Jump => self.inst_jump += 1,
            InstructionClass::Branch => self.inst_branch += 1,
            InstructionClass::Data => self.inst_data += 1,
        }
    }

    /// Records a taken conditional branch.
    pub const fn record_branch_taken(&mut self) {
        self.branches_taken += 1;
    }

    /// Records one cache probe.
    pub const fn record_cache(&mut self, event: &AccessEvent) {
        let level = match event.level {
            CacheLevel::L1 => &mut self.l1,
            CacheLevel::L2 => &mut self.l2,
        };
        match event.status {
            AccessStatus::Hit => level.hits += 1,
            AccessStatus::Miss => level.misses += 1,
            AccessStatus::Store => level.stores += 1,
        }
    }

    /// Counters for `level`.
    pub const fn cache(&self, level: CacheLevel) -> &CacheStats {
        match level {
            CacheLevel::L1 => &self.l1,
            CacheLevel::L2 => &self.l2,
        }
    }

    /// Serializes the statistics as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SimStats {
    /// Renders the human-readable statistics report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "E20 SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.immediate", self.inst_immediate),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.jump", self.inst_jump),
            ("op.branch", self.inst_branch),
            ("op.data", self.inst_data),
        ] {
            writeln!(f, "  {name:<21}{count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "  {:<21}{}", "branch.taken", self.branches_taken)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "MEMORY HIERARCHY")?;
        for (name, cache) in [("L1", &self.l1), ("L2", &self.l2)] {
            let rate = cache.hit_rate().map_or(0.0, |r| r * 100.0);
            writeln!(
                f,
                "  {name:<6} accesses: {:<10} | hits: {:<10} | misses: {:<10} | stores: {:<10} | hit_rate: {rate:.2}%",
                cache.accesses(),
                cache.hits,
                cache.misses,
                cache.stores,
            )?;
        }
        write!(f, "==========================================================")
    }
}
