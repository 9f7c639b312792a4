//! X-ISA Instruction Decoder.
//!
//! Maps a fetched 16-bit word to its [`Opcode`]. Operand fields are not
//! pre-extracted: each handler reads the ones its format defines straight
//! from the word through [`InstructionBits`].

use crate::common::DecodeError;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcode::Opcode;

/// Decodes the opcode field of an instruction word.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] for the ten unassigned encodings
/// (`0x0A`, `0x0B`, `0x0F`, `0x19`-`0x1F`).
pub fn decode(word: u16) -> Result<Opcode, DecodeError> {
    let bits = word.opcode();
    Opcode::from_bits(bits).ok_or(DecodeError::UnknownOpcode { opcode: bits, word })
}
