//! Branch Resolution Unit (BRU).
//!
//! Computes next-PC values for the X-ISA control transfers:
//! 1. **Conditional branches:** `BP`, `BN`, `BX`, `BZ` test a register against
//!    zero and, when taken, go to the *absolute* address `(imm8 << 1) & 0x1FF`.
//!    They are not PC-relative; existing programs depend on this.
//! 2. **Page jump:** `J` keeps the top four bits of the PC and replaces the
//!    rest with `imm11 << 1`.

use crate::common::INSTRUCTION_BYTES;
use crate::common::constants::{BRANCH_TARGET_MASK, JUMP_PAGE_MASK};
use crate::isa::Opcode;
use crate::isa::instruction::IMM11_MASK;

/// Condition tested by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// Taken when the register is greater than zero (`BP`).
    Positive,
    /// Taken when the register is less than zero (`BN`).
    Negative,
    /// Taken when the register is not zero (`BX`).
    NonZero,
    /// Taken when the register is zero (`BZ`).
    Zero,
}

impl BranchCond {
    /// The condition tested by a branch opcode, if it is one.
    pub const fn of(op: Opcode) -> Option<Self> {
        match op {
            Opcode::Bp => Some(Self::Positive),
            Opcode::Bn => Some(Self::Negative),
            Opcode::Bx => Some(Self::NonZero),
            Opcode::Bz => Some(Self::Zero),
            _ => None,
        }
    }

    /// Evaluates the condition against a register value.
    #[inline]
    pub const fn holds(self, value: i16) -> bool {
        match self {
            Self::Positive => value > 0,
            Self::Negative => value < 0,
            Self::NonZero => value != 0,
            Self::Zero => value == 0,
        }
    }
}

/// Branch Resolution Unit.
#[derive(Debug, Clone, Copy)]
pub struct Bru;

impl Bru {
    /// Absolute target of a taken conditional branch.
    #[inline]
    pub const fn branch_target(imm8: u8) -> u16 {
        ((imm8 as u16) << 1) & BRANCH_TARGET_MASK
    }

    /// Resolves a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `cond`  - Condition encoded by the opcode.
    /// * `value` - Current value of the tested register.
    /// * `imm8`  - The instruction's 8-bit immediate.
    /// * `pc`    - Address of the branch itself.
    ///
    /// # Returns
    ///
    /// The branch target when the condition holds, `pc + 2` otherwise.
    pub const fn resolve(cond: BranchCond, value: i16, imm8: u8, pc: u16) -> u16 {
        if cond.holds(value) {
            Self::branch_target(imm8)
        } else {
            pc.wrapping_add(INSTRUCTION_BYTES)
        }
    }

    /// Target of the page-relative `J` instruction.
    #[inline]
    pub const fn jump_target(pc: u16, imm11: u16) -> u16 {
        (pc & JUMP_PAGE_MASK) | ((imm11 & IMM11_MASK) << 1)
    }
}
