//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the eight X-ISA arithmetic and logic operations on
//! signed 16-bit operands. All results wrap in two's complement.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Div, Mul, Mod, Exp
//! - [`logic`]:      And, Nor

/// Integer arithmetic operations (add, subtract, multiply, divide, power).
pub mod arithmetic;

/// Bitwise logical operations (and, nor).
pub mod logic;

use crate::common::Fault;
use crate::isa::ArithOp;

/// Arithmetic Logic Unit for 16-bit register operations.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Executes an arithmetic or logic operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - Value of the first source register (`rs`).
    /// * `b`  - Value of the second source register (`rt`).
    ///
    /// # Errors
    ///
    /// Returns [`Fault::DivideByZero`] or [`Fault::ModuloByZero`] when `b` is
    /// zero for `Div` or `Mod`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsim_core::core::units::alu::Alu;
    /// use xsim_core::isa::ArithOp;
    ///
    /// assert_eq!(Alu::execute(ArithOp::Add, 5, 3), Ok(8));
    /// assert_eq!(Alu::execute(ArithOp::Add, i16::MAX, 1), Ok(i16::MIN));
    /// assert_eq!(Alu::execute(ArithOp::Nor, 0, 0), Ok(-1));
    /// assert_eq!(Alu::execute(ArithOp::Div, -7, 2), Ok(-3));
    /// assert!(Alu::execute(ArithOp::Mod, 1, 0).is_err());
    /// ```
    pub fn execute(op: ArithOp, a: i16, b: i16) -> Result<i16, Fault> {
        match op {
            ArithOp::Add
            | ArithOp::Sub
            | ArithOp::Div
            | ArithOp::Mul
            | ArithOp::Mod
            | ArithOp::Exp => arithmetic::execute(op, a, b),

            ArithOp::And | ArithOp::Nor => Ok(logic::execute(op, a, b)),
        }
    }
}
