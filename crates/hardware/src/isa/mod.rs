//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the X-ISA encoding, opcode table, decoder, and disassembler.
//!
//! # Modules
//!
//! * `instruction`: Field layout and extraction for the R, I, and IX formats.
//! * `opcode`: The closed set of 22 instructions.
//! * `decode`: Opcode lookup for fetched words.
//! * `disasm`: Assembly text rendering for traces.

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode and arithmetic-operation enumerations.
pub mod opcode;

pub use decode::decode;
pub use instruction::{Format, InstructionBits};
pub use opcode::{ArithOp, Opcode};
