//! Execution units.
//!
//! This module contains the functional units the instruction handlers lean
//! on: the ALU for the eight arithmetic/logic operations and the branch
//! resolution unit for conditional branches and page jumps.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for branch and jump targets.
pub mod bru;
