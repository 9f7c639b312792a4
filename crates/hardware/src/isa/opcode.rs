//! X-ISA opcode table.
//!
//! The 22 defined instructions form a closed enumeration. Each variant's
//! discriminant is its 5-bit encoding; its position in [`Opcode::ALL`] is
//! its execution-counter slot.

use std::fmt;

use super::instruction::Format;

/// The eight instructions with a configurable latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `rd = rs + rt`
    Add,
    /// `rd = rs - rt`
    Sub,
    /// `rd = rs & rt`
    And,
    /// `rd = !(rs | rt)`
    Nor,
    /// `rd = rs / rt`
    Div,
    /// `rd = rs * rt`
    Mul,
    /// `rd = rs % rt`
    Mod,
    /// `rd = rs ** rt`
    Exp,
}

impl ArithOp {
    /// All arithmetic operations in latency-table order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Nor,
        Self::Div,
        Self::Mul,
        Self::Mod,
        Self::Exp,
    ];

    /// Slot of this operation in the latency table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A defined X-ISA instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Add.
    Add = 0x00,
    /// Subtract.
    Sub = 0x01,
    /// Bitwise and.
    And = 0x02,
    /// Bitwise nor.
    Nor = 0x03,
    /// Signed truncating divide.
    Div = 0x04,
    /// Multiply.
    Mul = 0x05,
    /// Signed remainder.
    Mod = 0x06,
    /// Exponentiate.
    Exp = 0x07,
    /// Load word from data memory.
    Lw = 0x08,
    /// Store word to data memory.
    Sw = 0x09,
    /// Jump to register.
    Jr = 0x0C,
    /// Halt the machine.
    Halt = 0x0D,
    /// Print a register.
    Put = 0x0E,
    /// Load zero-extended immediate.
    Liz = 0x10,
    /// Load sign-extended immediate.
    Lis = 0x11,
    /// Load upper immediate.
    Lui = 0x12,
    /// Jump and link register.
    Jalr = 0x13,
    /// Branch if positive.
    Bp = 0x14,
    /// Branch if negative.
    Bn = 0x15,
    /// Branch if non-zero.
    Bx = 0x16,
    /// Branch if zero.
    Bz = 0x17,
    /// Page-relative jump.
    J = 0x18,
}

impl Opcode {
    /// All instructions in execution-counter order.
    pub const ALL: [Self; 22] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Nor,
        Self::Div,
        Self::Mul,
        Self::Mod,
        Self::Exp,
        Self::Lw,
        Self::Sw,
        Self::Liz,
        Self::Lis,
        Self::Lui,
        Self::Bp,
        Self::Bn,
        Self::Bx,
        Self::Bz,
        Self::Jr,
        Self::Jalr,
        Self::J,
        Self::Halt,
        Self::Put,
    ];

    /// Maps a 5-bit opcode field to its instruction, if one is defined.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0x00 => Self::Add,
            0x01 => Self::Sub,
            0x02 => Self::And,
            0x03 => Self::Nor,
            0x04 => Self::Div,
            0x05 => Self::Mul,
            0x06 => Self::Mod,
            0x07 => Self::Exp,
            0x08 => Self::Lw,
            0x09 => Self::Sw,
            0x0C => Self::Jr,
            0x0D => Self::Halt,
            0x0E => Self::Put,
            0x10 => Self::Liz,
            0x11 => Self::Lis,
            0x12 => Self::Lui,
            0x13 => Self::Jalr,
            0x14 => Self::Bp,
            0x15 => Self::Bn,
            0x16 => Self::Bx,
            0x17 => Self::Bz,
            0x18 => Self::J,
            _ => return None,
        })
    }

    /// The 5-bit encoding of this instruction.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Slot of this instruction in the execution counters.
    pub const fn counter_index(self) -> usize {
        match self {
            Self::Add => 0,
            Self::Sub => 1,
            Self::And => 2,
            Self::Nor => 3,
            Self::Div => 4,
            Self::Mul => 5,
            Self::Mod => 6,
            Self::Exp => 7,
            Self::Lw => 8,
            Self::Sw => 9,
            Self::Liz => 10,
            Self::Lis => 11,
            Self::Lui => 12,
            Self::Bp => 13,
            Self::Bn => 14,
            Self::Bx => 15,
            Self::Bz => 16,
            Self::Jr => 17,
            Self::Jalr => 18,
            Self::J => 19,
            Self::Halt => 20,
            Self::Put => 21,
        }
    }

    /// The arithmetic operation this instruction performs, if any.
    pub const fn arith(self) -> Option<ArithOp> {
        match self {
            Self::Add => Some(ArithOp::Add),
            Self::Sub => Some(ArithOp::Sub),
            Self::And => Some(ArithOp::And),
            Self::Nor => Some(ArithOp::Nor),
            Self::Div => Some(ArithOp::Div),
            Self::Mul => Some(ArithOp::Mul),
            Self::Mod => Some(ArithOp::Mod),
            Self::Exp => Some(ArithOp::Exp),
            _ => None,
        }
    }

    /// Assembly mnemonic, as printed in the execution trace.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Nor => "NOR",
            Self::Div => "DIV",
            Self::Mul => "MUL",
            Self::Mod => "MOD",
            Self::Exp => "EXP",
            Self::Lw => "LW",
            Self::Sw => "SW",
            Self::Jr => "JR",
            Self::Halt => "HALT",
            Self::Put => "PUT",
            Self::Liz => "LIZ",
            Self::Lis => "LIS",
            Self::Lui => "LUI",
            Self::Jalr => "JALR",
            Self::Bp => "BP",
            Self::Bn => "BN",
            Self::Bx => "BX",
            Self::Bz => "BZ",
            Self::J => "J",
        }
    }

    /// Key under which this instruction's count appears in the output document.
    ///
    /// Matches the mnemonic in lower case except for `JALR`, reported as `jal`.
    pub const fn stat_key(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Nor => "nor",
            Self::Div => "div",
            Self::Mul => "mul",
            Self::Mod => "mod",
            Self::Exp => "exp",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Jr => "jr",
            Self::Halt => "halt",
            Self::Put => "put",
            Self::Liz => "liz",
            Self::Lis => "lis",
            Self::Lui => "lui",
            Self::Jalr => "jal",
            Self::Bp => "bp",
            Self::Bn => "bn",
            Self::Bx => "bx",
            Self::Bz => "bz",
            Self::J => "j",
        }
    }

    /// Whether this is one of the four conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Bp | Self::Bn | Self::Bx | Self::Bz)
    }

    /// Field layout used by this instruction.
    pub const fn format(self) -> Format {
        match self {
            Self::Liz | Self::Lis | Self::Lui | Self::Bp | Self::Bn | Self::Bx | Self::Bz => {
                Format::I
            }
            Self::J => Format::Ix,
            _ => Format::R,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
