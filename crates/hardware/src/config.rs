//! Configuration for the X-ISA simulator.
//!
//! The only tunable of the machine is the cycle cost of its eight
//! arithmetic/logic instructions. This module provides:
//! 1. **Document:** [`LatencyConfig`], deserialized from a JSON object.
//! 2. **Loading:** Strict and lenient (missing file means defaults) readers.
//! 3. **Runtime table:** [`LatencyTable`], the immutable per-opcode cost lookup.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::common::ConfigError;
use crate::common::constants::{DEFAULT_LATENCY, NUM_ARITH_OPS};
use crate::isa::{ArithOp, Opcode};

/// Default configuration values.
mod defaults {
    use super::DEFAULT_LATENCY;

    /// Latency of an arithmetic instruction absent from the document.
    pub const fn latency() -> u64 {
        DEFAULT_LATENCY
    }
}

/// Arithmetic latency configuration, in cycles.
///
/// Every field is optional in the document and defaults to 1. Unknown keys
/// are ignored.
///
/// # Examples
///
/// ```
/// use xsim_core::config::LatencyConfig;
///
/// let config = LatencyConfig::from_json(r#"{ "mul": 4, "div": 12 }"#).unwrap();
/// assert_eq!(config.mul, 4);
/// assert_eq!(config.div, 12);
/// assert_eq!(config.add, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencyConfig {
    /// Latency of `ADD`.
    #[serde(default = "defaults::latency")]
    pub add: u64,
    /// Latency of `SUB`.
    #[serde(default = "defaults::latency")]
    pub sub: u64,
    /// Latency of `AND`.
    #[serde(default = "defaults::latency")]
    pub and: u64,
    /// Latency of `NOR`.
    #[serde(default = "defaults::latency")]
    pub nor: u64,
    /// Latency of `DIV`.
    #[serde(default = "defaults::latency")]
    pub div: u64,
    /// Latency of `MUL`.
    #[serde(default = "defaults::latency")]
    pub mul: u64,
    /// Latency of `MOD`.
    #[serde(rename = "mod", default = "defaults::latency")]
    pub modulo: u64,
    /// Latency of `EXP`.
    #[serde(default = "defaults::latency")]
    pub exp: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            add: defaults::latency(),
            sub: defaults::latency(),
            and: defaults::latency(),
            nor: defaults::latency(),
            div: defaults::latency(),
            mul: defaults::latency(),
            modulo: defaults::latency(),
            exp: defaults::latency(),
        }
    }
}

impl LatencyConfig {
    /// Parses a configuration document.
    ///
    /// A blank document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, non-object
    /// documents, or values that are not unsigned integers.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let doc: Map<String, Value> = serde_json::from_str(text)?;
        Ok(serde_json::from_value(Value::Object(doc))?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Like [`LatencyConfig::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Any failure other than the file not existing.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(&path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "config '{}' not found, using default latencies",
                    path.as_ref().display()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Configured latency of an arithmetic operation.
    pub const fn latency(&self, op: ArithOp) -> u64 {
        match op {
            ArithOp::Add => self.add,
            ArithOp::Sub => self.sub,
            ArithOp::And => self.and,
            ArithOp::Nor => self.nor,
            ArithOp::Div => self.div,
            ArithOp::Mul => self.mul,
            ArithOp::Mod => self.modulo,
            ArithOp::Exp => self.exp,
        }
    }
}

/// Immutable per-operation cycle costs used during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyTable {
    cycles: [u64; NUM_ARITH_OPS],
}

impl LatencyTable {
    /// Latency of an arithmetic operation.
    #[inline]
    pub const fn latency(&self, op: ArithOp) -> u64 {
        self.cycles[op.index()]
    }

    /// Cycle cost of one retirement of `op`.
    ///
    /// Non-arithmetic instructions always cost one cycle.
    pub const fn cost(&self, op: Opcode) -> u64 {
        match op.arith() {
            Some(a) => self.latency(a),
            None => DEFAULT_LATENCY,
        }
    }
}

impl Default for LatencyTable {
    fn default() -> Self {
        Self::from(&LatencyConfig::default())
    }
}

impl From<&LatencyConfig> for LatencyTable {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            cycles: ArithOp::ALL.map(|op| config.latency(op)),
        }
    }
}
