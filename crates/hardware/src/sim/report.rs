//! Report Formatting.
//!
//! Renders the text the simulator prints on stdout:
//! 1. **Cache banner:** One `Cache L1 has size ...` line per configured level.
//! 2. **Final state:** The pc, every register, and the first memory words in hex.
//!
//! Access event lines are produced by [`AccessEvent`](crate::core::units::cache::AccessEvent)'s
//! `Display` implementation.

use std::fmt::Write;

use crate::common::constants::{DUMP_WORDS_PER_LINE, MEM_SIZE};
use crate::config::CacheConfig;
use crate::core::Cpu;
use crate::core::units::cache::{CacheHierarchy, CacheLevel};

/// Describes one cache level, e.g. `Cache L1 has size 64, associativity 1, blocksize 16, rows 4`.
pub fn cache_config_line(level: CacheLevel, config: &CacheConfig) -> String {
    format!(
        "Cache {level} has size {}, associativity {}, blocksize {}, rows {}",
        config.size,
        config.associativity,
        config.block_size,
        config.rows()
    )
}

/// One [`cache_config_line`] per level, L1 first, each terminated by a newline.
pub fn cache_banner(caches: &CacheHierarchy) -> String {
    caches
        .levels()
        .map(|(level, cache)| cache_config_line(level, cache.config()) + "\n")
        .collect()
}

/// Formats the final machine state.
///
/// ```text
/// Final state:
/// 	pc=    3
/// 	$0=    0
/// ...
/// 4005 0000 0000 0000 0000 0000 0000 0000
/// ```
///
/// At most `words` memory words are printed, eight per line.
pub fn final_state(cpu: &Cpu, words: usize) -> String {
    let mut out = String::from("Final state:\n");
    let _ = writeln!(out, "\tpc={:>5}", cpu.pc);
    for (reg, value) in cpu.regs.snapshot().iter().enumerate() {
        let _ = writeln!(out, "\t${reg}={value:>5}");
    }

    let dumped = &cpu.memory.words()[..words.min(MEM_SIZE)];
    for line in dumped.chunks(DUMP_WORDS_PER_LINE) {
        for word in line {
            let _ = write!(out, "{word:04x} ");
        }
        out.push('\n');
    }
    out
}
