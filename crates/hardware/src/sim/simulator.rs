//! Simulator: owns the CPU and the latency table side-by-side.
//!
//! The run loop is a two-state machine: it steps the CPU while it is running
//! and stops on `HALT` or on the first fatal fault. There is no step limit;
//! a program with neither runs forever.

use std::path::Path;

use tracing::info;

use crate::common::{Fault, LoadError, ReportError};
use crate::config::{LatencyConfig, LatencyTable};
use crate::core::{Cpu, StepOutcome};
use crate::io::Console;
use crate::sim::loader;
use crate::stats::{RunReport, Stats};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// `HALT` retired.
    Halted,
    /// A fatal fault stopped the run.
    Aborted {
        /// Address of the faulting instruction.
        pc: u16,
        /// What went wrong.
        fault: Fault,
    },
}

impl Termination {
    /// Whether the run completed normally.
    pub const fn is_halted(&self) -> bool {
        matches!(self, Self::Halted)
    }
}

/// Top-level simulator: CPU architectural state + latency table.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memories, counters).
    pub cpu: Cpu,
    /// Cycle costs, fixed for the life of the simulator.
    latencies: LatencyTable,
}

impl Simulator {
    /// Creates a simulator whose `PUT` output goes to stdout.
    pub fn new(config: &LatencyConfig) -> Self {
        Self {
            cpu: Cpu::new(),
            latencies: LatencyTable::from(config),
        }
    }

    /// Creates a simulator with a custom console.
    pub fn with_console(config: &LatencyConfig, console: Box<dyn Console>) -> Self {
        Self {
            cpu: Cpu::with_console(console),
            latencies: LatencyTable::from(config),
        }
    }

    /// Loads a program image into program memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image exceeds 64 KiB.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.cpu.load_program(image)?;
        info!("loaded {} program bytes ({} words)", image.len(), image.len().div_ceil(2));
        Ok(())
    }

    /// Reads a program image file and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read or parsed.
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_image(path)?;
        self.load_program(&image)
    }

    /// Reads a data image file and preloads data memory with it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read or parsed.
    pub fn load_data_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_image(path)?;
        self.cpu.load_data(&image)
    }

    /// Returns the machine to its initial state, keeping the loaded program.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Runs one fetch-execute step.
    pub fn step(&mut self) -> StepOutcome {
        self.cpu.step()
    }

    /// Runs until `HALT` or a fatal fault.
    pub fn run(&mut self) -> Termination {
        loop {
            match self.cpu.step() {
                StepOutcome::Continue => {}
                StepOutcome::Halted => return Termination::Halted,
                StepOutcome::Aborted { pc, fault } => return Termination::Aborted { pc, fault },
            }
        }
    }

    /// Aggregates the counters against the latency table.
    pub fn stats(&self) -> Stats {
        Stats::collect(&self.cpu.counters, &self.latencies)
    }

    /// Builds the output document for the current state.
    pub fn report(&self) -> RunReport {
        RunReport::new(self.cpu.regs.snapshot(), self.stats())
    }

    /// Writes the output document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or the write fails.
    pub fn write_report(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        self.report().write(path)
    }

    /// Writes data memory to `path` as an image.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the write fails.
    pub fn dump_data(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        loader::write_image(path, self.cpu.dmem.as_bytes())
    }
}
