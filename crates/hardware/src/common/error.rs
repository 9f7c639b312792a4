//! Fault and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Faults:** Fatal, run-terminating conditions raised by instruction handlers.
//! 2. **Decode Errors:** Non-fatal failures to map an instruction word to an opcode.
//! 3. **I/O Errors:** Failures loading images, reading configuration, or writing reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Fatal conditions that abort a run.
///
/// A handler that raises a fault leaves the register file, data memory, and
/// execution counters exactly as they were before the instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A word access targeted an odd address.
    #[error("address {addr:#06x} not word aligned for {kind}")]
    UnalignedAccess {
        /// The kind of access that was attempted.
        kind: AccessType,
        /// The offending address.
        addr: u16,
    },

    /// `DIV` with a zero divisor.
    #[error("divide by zero")]
    DivideByZero,

    /// `MOD` with a zero divisor.
    #[error("modulo by zero")]
    ModuloByZero,
}

/// Failure to map an instruction word to a defined opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 5-bit opcode field names no instruction.
    #[error("invalid opcode {opcode:#04x} in word {word:#06x}")]
    UnknownOpcode {
        /// The opcode field value.
        opcode: u8,
        /// The full instruction word.
        word: u16,
    },
}

/// Errors raised while loading a program or data memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read image '{}': {source}", path.display())]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line contains a character that is not a hexadecimal digit.
    #[error("line {line}: invalid hex digit {found:?}")]
    InvalidDigit {
        /// 1-based line number.
        line: usize,
        /// The offending character.
        found: char,
    },

    /// A line carries half a byte.
    #[error("line {line}: odd number of hex digits")]
    OddDigits {
        /// 1-based line number.
        line: usize,
    },

    /// The image does not fit in the 64 KiB address space.
    #[error("image of {len} bytes does not fit in {capacity} bytes of memory")]
    TooLarge {
        /// Number of bytes in the image.
        len: usize,
        /// Capacity of the target memory.
        capacity: usize,
    },
}

/// Errors raised while reading the latency configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration document is not valid JSON for the expected shape.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while writing run output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be written.
    #[error("could not write '{}': {source}", path.display())]
    Io {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The report could not be serialized.
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
