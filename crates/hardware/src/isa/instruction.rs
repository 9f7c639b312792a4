//! Instruction encoding and field extraction.
//!
//! Every X-ISA instruction is a 16-bit word whose top five bits hold the
//! opcode. The remaining eleven bits are laid out in one of three shapes:
//!
//! ```text
//!  15    11 10  8 7   5 4   2 1 0
//! +--------+-----+-----+-----+---+
//! | opcode |  rd |  rs |  rt | - |   R-type
//! +--------+-----+-----+-----+---+
//! | opcode |  rd |     imm8      |   I-type
//! +--------+-----+---------------+
//! | opcode |        imm11        |   IX-type
//! +--------+---------------------+
//! ```
//!
//! Unused bits are ignored, never rejected.

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u16 = 11;
/// Bit mask for the 5-bit opcode field (after shifting).
pub const OPCODE_MASK: u16 = 0x1F;
/// Bit position of the destination register field.
pub const RD_SHIFT: u16 = 8;
/// Bit position of the first source register field.
pub const RS_SHIFT: u16 = 5;
/// Bit position of the second source register field.
pub const RT_SHIFT: u16 = 2;
/// Bit mask for a 3-bit register field (after shifting).
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the I-type 8-bit immediate.
pub const IMM8_MASK: u16 = 0x00FF;
/// Bit mask for the IX-type 11-bit immediate.
pub const IMM11_MASK: u16 = 0x07FF;

/// Field layout of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Three register fields.
    R,
    /// One register and an 8-bit immediate.
    I,
    /// One 11-bit immediate.
    Ix,
}

/// Trait for extracting instruction fields from encoded instruction words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 15-11).
    fn opcode(&self) -> u8;

    /// Extracts the destination register field (bits 10-8).
    ///
    /// Shared by R-type and I-type instructions.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 7-5).
    fn rs(&self) -> usize;

    /// Extracts the second source register field (bits 4-2).
    fn rt(&self) -> usize;

    /// Extracts the I-type 8-bit immediate (bits 7-0), unextended.
    fn imm8(&self) -> u8;

    /// Extracts the IX-type 11-bit immediate (bits 10-0), unextended.
    fn imm11(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm8(&self) -> u8 {
        (self & IMM8_MASK) as u8
    }

    #[inline(always)]
    fn imm11(&self) -> u16 {
        self & IMM11_MASK
    }
}

/// Builds an R-type instruction word.
///
/// Fields wider than their slot are truncated to fit.
pub const fn encode_r(opcode: u8, rd: u8, rs: u8, rt: u8) -> u16 {
    (((opcode as u16) & OPCODE_MASK) << OPCODE_SHIFT)
        | (((rd as u16) & REG_MASK) << RD_SHIFT)
        | (((rs as u16) & REG_MASK) << RS_SHIFT)
        | (((rt as u16) & REG_MASK) << RT_SHIFT)
}

/// Builds an I-type instruction word.
pub const fn encode_i(opcode: u8, rd: u8, imm8: u8) -> u16 {
    (((opcode as u16) & OPCODE_MASK) << OPCODE_SHIFT)
        | (((rd as u16) & REG_MASK) << RD_SHIFT)
        | imm8 as u16
}

/// Builds an IX-type instruction word.
pub const fn encode_ix(opcode: u8, imm11: u16) -> u16 {
    (((opcode as u16) & OPCODE_MASK) << OPCODE_SHIFT) | (imm11 & IMM11_MASK)
}
