//! Main Execution Step.
//!
//! This module implements the fetch-decode-execute cycle. Each step:
//! 1. **Fetch:** Reads the big-endian word at `pc` from program memory.
//! 2. **Decode:** Maps the opcode field to an [`Opcode`]; unknown opcodes are
//!    reported and skipped.
//! 3. **Execute:** Dispatches to the handler and installs the next PC.
//! 4. **Observability:** Emits one trace event per retired instruction.

use tracing::{debug, error, info, warn};

use super::{Cpu, Flow, StepOutcome};
use crate::common::{AccessType, FATAL_PC, Fault, INSTRUCTION_BYTES};
use crate::isa::{Opcode, decode, disasm};

impl Cpu {
    /// Fetches the instruction word at the current PC.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnalignedAccess`] with [`AccessType::Fetch`] if the PC
    /// is odd.
    pub fn fetch(&self) -> Result<u16, Fault> {
        self.imem.read_word(self.pc, AccessType::Fetch)
    }

    /// Runs one fetch-execute step.
    ///
    /// Stepping a halted CPU is a no-op that reports [`StepOutcome::Halted`].
    pub fn step(&mut self) -> StepOutcome {
        if self.halted {
            return StepOutcome::Halted;
        }
        let pc = self.pc;
        let word = match self.fetch() {
            Ok(word) => word,
            Err(fault) => return self.abort(pc, fault),
        };
        let op = match decode(word) {
            Ok(op) => op,
            Err(e) => {
                warn!("pc {pc:#06x}: {e}");
                self.pc = pc.wrapping_add(INSTRUCTION_BYTES);
                return StepOutcome::Continue;
            }
        };
        debug!("pc {pc:#06x}: {}", disasm::disassemble(word));

        match self.execute(op, word) {
            Ok(Flow::Next(next)) => {
                trace_retired(pc, word, op);
                self.pc = next;
                StepOutcome::Continue
            }
            Ok(Flow::Halt) => {
                trace_retired(pc, word, op);
                self.halted = true;
                StepOutcome::Halted
            }
            Err(fault) => self.abort(pc, fault),
        }
    }

    fn abort(&mut self, pc: u16, fault: Fault) -> StepOutcome {
        error!("pc {pc:#06x}: {fault}...terminating");
        self.pc = FATAL_PC;
        StepOutcome::Aborted { pc, fault }
    }
}

fn trace_retired(pc: u16, word: u16, op: Opcode) {
    info!(target: "xsim::trace", "{pc:#06x}  {word:04x}\t{op}");
}
