//! X-ISA disassembler.
//!
//! Renders an instruction word as assembly text for debug tracing and
//! diagnostics, e.g. `ADD r2, r0, r1`, `LIZ r0, 0x05`, `J 0x010`.

use crate::isa::decode::decode;
use crate::isa::instruction::{Format, InstructionBits};
use crate::isa::opcode::Opcode;

/// Disassembles an instruction word.
///
/// Words with an unassigned opcode render as `.word 0xNNNN`.
pub fn disassemble(word: u16) -> String {
    let Ok(op) = decode(word) else {
        return format!(".word {word:#06x}");
    };
    let m = op.mnemonic();
    match op.format() {
        Format::Ix => format!("{m} {:#05x}", word.imm11() << 1),
        Format::I if op.is_branch() => {
            format!("{m} r{}, {:#05x}", word.rd(), u16::from(word.imm8()) << 1)
        }
        Format::I => format!("{m} r{}, {:#04x}", word.rd(), word.imm8()),
        Format::R => disassemble_r(op, word),
    }
}

fn disassemble_r(op: Opcode, word: u16) -> String {
    let m = op.mnemonic();
    match op {
        Opcode::Lw => format!("{m} r{}, (r{})", word.rd(), word.rs()),
        Opcode::Sw => format!("{m} r{}, (r{})", word.rt(), word.rs()),
        Opcode::Jr | Opcode::Put => format!("{m} r{}", word.rs()),
        Opcode::Jalr => format!("{m} r{}, r{}", word.rd(), word.rs()),
        Opcode::Halt => m.to_string(),
        _ => format!("{m} r{}, r{}, r{}", word.rd(), word.rs(), word.rt()),
    }
}
