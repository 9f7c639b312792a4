//! X-ISA functional simulator library.
//!
//! This crate implements a functional simulator for the 16-bit X-ISA:
//! 1. **ISA:** Field extraction, the 22-entry opcode table, decoding, and disassembly.
//! 2. **Core:** Register file, program/data memory, instruction handlers, and the
//!    fetch-execute step.
//! 3. **Configuration:** Per-opcode arithmetic latencies read from JSON.
//! 4. **Statistics:** Execution counters, cycle aggregation, and the output document.
//! 5. **Simulation:** Text image loading and the run loop.
//!
//! # Example
//!
//! ```
//! use xsim_core::config::LatencyConfig;
//! use xsim_core::io::BufferConsole;
//! use xsim_core::sim::{Simulator, Termination, loader};
//!
//! // LIZ r0, 5 ; LIZ r1, 3 ; ADD r2, r0, r1 ; HALT
//! let image = loader::parse_image("8005\n8103\n0204\n6800\n").unwrap();
//! let mut sim = Simulator::with_console(&LatencyConfig::default(), Box::new(BufferConsole::new()));
//! sim.load_program(&image).unwrap();
//!
//! assert_eq!(sim.run(), Termination::Halted);
//! assert_eq!(sim.cpu.regs.read(2), 8);
//! assert_eq!(sim.stats().cycles, 4);
//! ```

/// Common types and constants (memory geometry, errors, register file).
pub mod common;
/// Latency configuration.
pub mod config;
/// CPU core (state, handlers, execution step, functional units).
pub mod core;
/// Console output used by `PUT`.
pub mod io;
/// Instruction set (encoding, opcodes, decode, disassembly).
pub mod isa;
/// Image loader and run loop.
pub mod sim;
/// Execution statistics and the output document.
pub mod stats;

/// Latency configuration document; use `LatencyConfig::default()` or load from JSON.
pub use crate::config::LatencyConfig;
/// Main CPU type; holds registers, memories, and counters.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
