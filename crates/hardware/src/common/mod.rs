//! Common utilities and types used throughout the X-ISA simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory geometry, instruction width, field masks, and sentinels.
//! 2. **Memory Access:** Classification of accesses (fetch, load, store) for fault reporting.
//! 3. **Error Handling:** Fatal faults, decode errors, and image/config/report errors.
//! 4. **Register Management:** The eight-entry signed 16-bit register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for faults, decoding, loading, configuration, and reporting.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{FATAL_PC, INSTRUCTION_BYTES, MEM_SIZE, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, DecodeError, Fault, LoadError, ReportError};
pub use reg::RegisterFile;
