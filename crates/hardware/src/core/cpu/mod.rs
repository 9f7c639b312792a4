//! CPU Definition and Initialization.
//!
//! This module defines the `Cpu` aggregate, the single owner of all X-ISA
//! architectural state. It coordinates the following:
//! 1. **State Management:** Register file, program counter, and halt flag.
//! 2. **Memories:** Separate 64 KiB program and data memories.
//! 3. **Accounting:** Per-opcode execution counters.
//! 4. **Output:** The console that receives `PUT` output.
//!
//! Handlers and the fetch-execute step take the CPU by exclusive reference;
//! there is no shared or global state.

/// Per-opcode instruction semantics.
pub mod handlers;

/// Fetch-decode-execute step and tracing.
pub mod execution;

/// Byte-addressable memory with word-alignment checks.
pub mod memory;

use std::fmt;

use crate::common::{Fault, LoadError, RegisterFile};
use crate::io::{Console, StdoutConsole};
use crate::stats::ExecCounters;

pub use self::memory::Memory;

/// Control-flow result of a successfully executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Continue at the given address.
    Next(u16),
    /// Stop the machine.
    Halt,
}

/// Result of one fetch-execute step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine is still running.
    Continue,
    /// `HALT` retired; the run completed.
    Halted,
    /// A fatal fault aborted the run.
    Aborted {
        /// Address of the faulting instruction.
        pc: u16,
        /// What went wrong.
        fault: Fault,
    },
}

/// X-ISA architectural state.
pub struct Cpu {
    /// Registers `r0`-`r7`.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u16,
    /// Program memory, holding big-endian instruction words.
    pub imem: Memory,
    /// Data memory, accessed by `LW` and `SW`.
    pub dmem: Memory,
    /// Retired-instruction counters.
    pub counters: ExecCounters,
    /// Set once `HALT` retires.
    pub halted: bool,
    console: Box<dyn Console>,
}

impl Cpu {
    /// Creates a CPU with zeroed state that prints `PUT` output to stdout.
    pub fn new() -> Self {
        Self::with_console(Box::new(StdoutConsole))
    }

    /// Creates a CPU with zeroed state and the given console.
    pub fn with_console(console: Box<dyn Console>) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            imem: Memory::new(),
            dmem: Memory::new(),
            counters: ExecCounters::new(),
            halted: false,
            console,
        }
    }

    /// Copies a program image into program memory at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image exceeds 64 KiB.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.imem.clear();
        self.imem.load(0, image)
    }

    /// Copies a data image into data memory at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image exceeds 64 KiB.
    pub fn load_data(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.dmem.load(0, image)
    }

    /// Returns the machine to its power-on state, keeping program memory.
    ///
    /// Registers, data memory, counters, the PC, and the halt flag are zeroed.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.pc = 0;
        self.dmem.clear();
        self.counters = ExecCounters::new();
        self.halted = false;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("pc", &format_args!("{:#06x}", self.pc))
            .field("counters", &self.counters)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}
