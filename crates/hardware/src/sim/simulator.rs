//! Simulator: owns the CPU and drives a run to completion.
//!
//! The façade applies the run-level parts of [`Config`] that the CPU itself
//! does not know about: the optional step ceiling and the dump size used by
//! the final report.

use std::path::Path;

use tracing::warn;

use super::{loader, report};
use crate::common::error::{ConfigError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::units::cache::AccessEvent;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The halt pattern executed.
    Halted {
        /// Instructions retired, including the halting `j`.
        retired: u64,
    },
    /// The configured step ceiling was reached before halting.
    StepLimit {
        /// Instructions retired.
        retired: u64,
    },
}

/// Top-level simulator: CPU state plus run configuration.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, caches, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a simulator with empty memory and the caches described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a cache level has invalid geometry.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            cpu: Cpu::with_config(config)?,
            config: config.clone(),
        })
    }

    /// Creates a simulator and loads the image file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] for invalid configuration or an unloadable image.
    pub fn from_image(config: &Config, path: impl AsRef<Path>) -> Result<Self, SimError> {
        let mut sim = Self::new(config)?;
        sim.load_image(path)?;
        Ok(sim)
    }

    /// The configuration this simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Loads a program given as words.
    pub fn load_words(&mut self, words: &[u16]) {
        self.cpu.load_program(words);
    }

    /// Parses and loads an image held in memory.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`](crate::common::LoadError) for a malformed image.
    pub fn load_str(&mut self, text: &str) -> Result<(), SimError> {
        let words = loader::parse_image(text)?;
        self.load_words(&words);
        Ok(())
    }

    /// Reads and loads the image file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`](crate::common::LoadError) if the file cannot be
    /// read or is malformed.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let words = loader::load_image(path)?;
        self.load_words(&words);
        Ok(())
    }

    /// Runs to halt (or the step ceiling). Cache events stay in the hierarchy's log.
    pub fn run(&mut self) -> RunOutcome {
        self.drive(None)
    }

    /// Runs to halt (or the step ceiling), handing each cache event to
    /// `on_access` as soon as the instruction that caused it retires.
    ///
    /// Events delivered to `on_access` are drained from the hierarchy's log.
    pub fn run_with<F>(&mut self, mut on_access: F) -> RunOutcome
    where
        F: FnMut(&AccessEvent),
    {
        self.drive(Some(&mut on_access))
    }

    fn drive(&mut self, mut on_access: Option<&mut dyn FnMut(&AccessEvent)>) -> RunOutcome {
        let limit = self.config.max_steps;
        let mut steps = 0u64;

        while !self.cpu.is_halted() {
            if limit.is_some_and(|max| steps >= max) {
                warn!(
                    max_steps = steps,
                    pc = self.cpu.pc,
                    "step limit reached before halt"
                );
                return RunOutcome::StepLimit {
                    retired: self.cpu.stats.instructions_retired,
                };
            }

            let _ = self.cpu.step();
            steps += 1;

            if let (Some(callback), Some(caches)) =
                (on_access.as_mut(), self.cpu.caches.as_mut())
            {
                for event in caches.take_log() {
                    callback(&event);
                }
            }
        }

        RunOutcome::Halted {
            retired: self.cpu.stats.instructions_retired,
        }
    }

    /// The cache configuration banner, one line per level, or empty without caches.
    pub fn cache_banner(&self) -> String {
        self.cpu
            .caches
            .as_ref()
            .map(report::cache_banner)
            .unwrap_or_default()
    }

    /// The final state report: pc, registers, and the configured number of memory words.
    pub fn final_state(&self) -> String {
        report::final_state(&self.cpu, self.config.dump_words)
    }
}
