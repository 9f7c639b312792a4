//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight signed
//! 16-bit X-ISA registers. It provides:
//! 1. **Storage:** Eight freely writable registers; none is hardwired to zero.
//! 2. **Access:** Indexed reads and writes by 3-bit register number.
//! 3. **Observability:** A snapshot for reporting.

use super::constants::NUM_REGS;

/// The X-ISA register file (`r0`-`r7`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Decoded fields are always in range.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or greater.
    #[inline]
    pub fn read(&self, idx: usize) -> i16 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The signed 16-bit value to store.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or greater.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i16) {
        self.regs[idx] = val;
    }

    /// Returns a copy of all eight registers, `r0` first.
    pub fn snapshot(&self) -> [i16; NUM_REGS] {
        self.regs
    }
}
