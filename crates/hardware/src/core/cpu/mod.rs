//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! E20 machine state. It coordinates the following:
//! 1. **State Management:** Registers, memory, program counter, and the halt flag.
//! 2. **Decode Caching:** Per-slot memoization of decoded instructions.
//! 3. **Memory Hierarchy:** The optional observational cache hierarchy.
//! 4. **Statistics:** Instruction mix and cache counters.

/// Per-slot decode memoization.
pub mod decode_cache;

/// Fetch/decode/execute loop and per-opcode handlers.
pub mod execution;

use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::arch::{Gpr, Memory};
use crate::core::units::cache::CacheHierarchy;
use crate::isa::decode::Instruction;
use crate::stats::SimStats;

use self::decode_cache::DecodeCache;

/// Main CPU structure containing all processor state and components.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter (16 bits, masked to 13 bits when indexing memory).
    pub pc: u16,
    /// Main memory.
    pub memory: Memory,
    /// Cache hierarchy observing loads and stores, if configured.
    pub caches: Option<CacheHierarchy>,
    /// Execution statistics.
    pub stats: SimStats,

    decode_cache: DecodeCache,
    halted: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed state and no caches.
    pub fn new() -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            memory: Memory::new(),
            caches: None,
            stats: SimStats::default(),
            decode_cache: DecodeCache::new(),
            halted: false,
        }
    }

    /// Creates a CPU with the caches described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a cache level has invalid geometry.
    pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
        let mut cpu = Self::new();
        cpu.caches = config.cache.as_ref().map(CacheHierarchy::new).transpose()?;
        Ok(cpu)
    }

    /// Replaces memory with `image` (zero-filled past its end) and returns the
    /// machine to its power-on state: registers, pc, halt flag, decode cache,
    /// statistics, and cold caches with an empty event log.
    pub fn load_program(&mut self, image: &[u16]) {
        self.memory = Memory::from_words(image);
        self.regs = Gpr::new();
        self.pc = 0;
        self.halted = false;
        self.decode_cache.clear();
        self.stats = SimStats::default();
        if let Some(caches) = self.caches.as_mut() {
            caches.reset();
        }
    }

    /// Whether the halt pattern has executed.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Decodes the instruction in the slot addressed by the current pc.
    pub fn fetch(&mut self) -> Instruction {
        let slot = Memory::slot(self.pc);
        let word = self.memory.read(self.pc);
        self.decode_cache.get_or_decode(slot, word)
    }

    /// Writes a word to memory, dropping any cached decode of that slot.
    pub fn store_word(&mut self, addr: u16, value: u16) {
        self.memory.write(addr, value);
        self.decode_cache.invalidate(Memory::slot(addr));
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
