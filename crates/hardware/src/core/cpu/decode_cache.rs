//! Per-Slot Decode Cache.
//!
//! Memoizes decoded instructions by memory slot (`pc mod 8192`). A cached
//! decode stays authoritative until a store writes its slot, at which point the
//! entry is dropped and the next fetch decodes the new word.

use crate::common::constants::MEM_SIZE;
use crate::isa::decode::{Instruction, decode};

/// Decoded instructions indexed by memory slot (one entry per memory word).
#[derive(Clone)]
pub struct DecodeCache {
    slots: Box<[Option<Instruction>]>,
}

impl DecodeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slots: vec![None; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the decode of `word` for `slot`, decoding on first use.
    #[inline]
    pub fn get_or_decode(&mut self, slot: usize, word: u16) -> Instruction {
        *self.slots[slot].get_or_insert_with(|| decode(word))
    }

    /// Returns the cached decode for `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<Instruction> {
        self.slots[slot]
    }

    /// Drops the cached decode for `slot`.
    #[inline]
    pub fn invalidate(&mut self, slot: usize) {
        self.slots[slot] = None;
    }

    /// Drops every cached decode.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}

impl Default for DecodeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DecodeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("DecodeCache").field("cached", &cached).finish()
    }
}
