//! E20 Main Memory.
//!
//! Memory is a flat array of 8192 16-bit words. Every access reduces its
//! address modulo the memory size, so no address can fault.

use crate::common::constants::{ADDR_MASK, MEM_SIZE};

/// Word-addressed main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16; MEM_SIZE]>,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: Box::new([0; MEM_SIZE]),
        }
    }

    /// Creates a memory whose first words are `image`; the rest are zero.
    ///
    /// Words beyond `MEM_SIZE` are ignored; the loader rejects such images
    /// before they reach this point.
    pub fn from_words(image: &[u16]) -> Self {
        let mut memory = Self::new();
        memory.load(image);
        memory
    }

    /// Copies `image` into memory starting at address 0.
    pub fn load(&mut self, image: &[u16]) {
        let len = image.len().min(MEM_SIZE);
        self.words[..len].copy_from_slice(&image[..len]);
    }

    /// Reduces a 16-bit value to a memory slot index.
    #[inline]
    pub const fn slot(addr: u16) -> usize {
        (addr & ADDR_MASK) as usize
    }

    /// Reads the word at `addr` (modulo memory size).
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.words[Self::slot(addr)]
    }

    /// Writes `val` at `addr` (modulo memory size).
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.words[Self::slot(addr)] = val;
    }

    /// All memory words in address order.
    pub fn words(&self) -> &[u16] {
        self.words.as_slice()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &MEM_SIZE)
            .field("used", &used)
            .finish()
    }
}
