//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, truncating division,
//! remainder, and exponentiation on signed 16-bit values. Overflow wraps,
//! so `i16::MIN / -1` yields `i16::MIN` and `i16::MIN % -1` yields 0.

use crate::common::Fault;
use crate::isa::ArithOp;

/// Executes an arithmetic operation.
///
/// # Errors
///
/// Returns a fault for a zero divisor in `Div` or `Mod`. Logic operations
/// evaluate to their operand `a` unchanged; [`super::Alu`] routes them to
/// the logic unit instead.
pub(super) fn execute(op: ArithOp, a: i16, b: i16) -> Result<i16, Fault> {
    Ok(match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Sub => a.wrapping_sub(b),
        ArithOp::Mul => a.wrapping_mul(b),
        ArithOp::Div => {
            if b == 0 {
                return Err(Fault::DivideByZero);
            }
            a.wrapping_div(b)
        }
        ArithOp::Mod => {
            if b == 0 {
                return Err(Fault::ModuloByZero);
            }
            a.wrapping_rem(b)
        }
        ArithOp::Exp => power(a, b),
        ArithOp::And | ArithOp::Nor => a,
    })
}

/// Raises `base` to `exp`, truncated to 16 bits.
///
/// Non-negative exponents wrap modulo 2^16 (`0^0 == 1`). A negative exponent
/// gives the integer part of the real result: only bases of magnitude one
/// survive, everything else (including a zero base) truncates to 0.
pub fn power(base: i16, exp: i16) -> i16 {
    if exp >= 0 {
        return base.wrapping_pow(exp as u32);
    }
    match base {
        1 => 1,
        -1 if exp % 2 == 0 => 1,
        -1 => -1,
        _ => 0,
    }
}
