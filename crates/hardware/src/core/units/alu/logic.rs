//! ALU bitwise logic operations.

use crate::isa::ArithOp;

/// Executes a bitwise operation. Non-logic opcodes return `a` unchanged.
pub(super) fn execute(op: ArithOp, a: i16, b: i16) -> i16 {
    match op {
        ArithOp::And => a & b,
        ArithOp::Nor => !(a | b),
        _ => a,
    }
}
