//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run executed and what it cost. It provides:
//! 1. **Counters:** One retired-instruction counter per opcode.
//! 2. **Aggregation:** Instruction total and latency-weighted cycle total.
//! 3. **Output record:** The serialized document holding final registers and stats.
//! 4. **Summary:** A human-readable breakdown printed to stdout.

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::common::constants::{NUM_OPCODES, NUM_REGS};
use crate::common::ReportError;
use crate::config::LatencyTable;
use crate::isa::Opcode;

/// Retired-instruction counters, one per opcode.
///
/// Counters only grow during a run. `HALT` is the exception: its counter is
/// set to exactly 1 rather than incremented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecCounters {
    counts: [u64; NUM_OPCODES],
}

impl ExecCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one retirement of `op`.
    pub fn record(&mut self, op: Opcode) {
        let slot = &mut self.counts[op.counter_index()];
        if op == Opcode::Halt {
            *slot = 1;
        } else {
            *slot += 1;
        }
    }

    /// Number of times `op` retired.
    #[inline]
    pub fn get(&self, op: Opcode) -> u64 {
        self.counts[op.counter_index()]
    }

    /// Iterates `(opcode, count)` pairs in counter order.
    pub fn iter(&self) -> impl Iterator<Item = (Opcode, u64)> + '_ {
        Opcode::ALL.iter().map(|&op| (op, self.get(op)))
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Aggregated run statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Per-opcode retirement counts.
    pub counts: ExecCounters,
    /// Total retired instructions.
    pub instructions: u64,
    /// Latency-weighted cycle total.
    pub cycles: u64,
}

impl Stats {
    /// Aggregates counters against a latency table.
    ///
    /// Each arithmetic opcode contributes `count * latency` cycles; every other
    /// opcode contributes `count` cycles. The total saturates at `u64::MAX`.
    pub fn collect(counts: &ExecCounters, latencies: &LatencyTable) -> Self {
        let cycles = counts
            .iter()
            .map(|(op, n)| n.saturating_mul(latencies.cost(op)))
            .fold(0u64, u64::saturating_add);
        Self {
            counts: counts.clone(),
            instructions: counts.total(),
            cycles,
        }
    }

    /// Cycles per instruction, or 0 for an empty run.
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions as f64
        }
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        let total = self.instructions.max(1) as f64;
        println!("\n==========================================================");
        println!("X-ISA SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_insts                {}", self.instructions);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        for (op, n) in self.counts.iter().filter(|&(_, n)| n > 0) {
            println!(
                "  op.{:<20} {} ({:.2}%)",
                op.stat_key(),
                n,
                (n as f64 / total) * 100.0
            );
        }
        println!("==========================================================");
    }
}

/// Final register values, serialized as `{"r0": .., .., "r7": ..}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterRecord(pub [i16; NUM_REGS]);

impl Serialize for RegisterRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const KEYS: [&str; NUM_REGS] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];
        let mut map = serializer.serialize_map(Some(NUM_REGS))?;
        for (key, val) in KEYS.iter().zip(self.0) {
            map.serialize_entry(key, &val)?;
        }
        map.end()
    }
}

impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_OPCODES + 2))?;
        for (op, n) in self.counts.iter() {
            map.serialize_entry(op.stat_key(), &n)?;
        }
        map.serialize_entry("instructions", &self.instructions)?;
        map.serialize_entry("cycles", &self.cycles)?;
        map.end()
    }
}

/// The output document of a run.
///
/// Each array holds a single object, matching the established file layout.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RunReport {
    /// Final register values.
    pub registers: Vec<RegisterRecord>,
    /// Per-opcode counts plus `instructions` and `cycles`.
    pub stats: Vec<Stats>,
}

impl RunReport {
    /// Builds a report from final registers and aggregated stats.
    pub fn new(registers: [i16; NUM_REGS], stats: Stats) -> Self {
        Self {
            registers: vec![RegisterRecord(registers)],
            stats: vec![stats],
        }
    }

    /// Serializes the report as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Writes the report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or the write fails.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
