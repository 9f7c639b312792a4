//! Memory Access Types.
//!
//! Classifies memory accesses so that alignment faults can name what kind of
//! access tripped them.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch from program memory.
    Fetch,

    /// Word read from data memory (`LW`).
    Load,

    /// Word write to data memory (`SW`).
    Store,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Load => write!(f, "load"),
            Self::Store => write!(f, "store"),
        }
    }
}
