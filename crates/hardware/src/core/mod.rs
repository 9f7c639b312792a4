//! Core processor implementation.
//!
//! This module contains the architectural state of the X-ISA machine, the
//! per-opcode instruction handlers, the fetch-execute step, and the
//! functional units they use.

/// CPU state, memories, handlers, and execution step.
pub mod cpu;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::{Cpu, Flow, StepOutcome};
