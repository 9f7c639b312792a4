//! Global System Constants.
//!
//! This module defines the constants that describe the X-ISA machine. It includes:
//! 1. **Memory Constants:** Size of the program and data address spaces.
//! 2. **Instruction Constants:** Instruction width and control-transfer masks.
//! 3. **Accounting Constants:** Counter and latency table sizes.

/// Size in bytes of both program memory and data memory (64 KiB each).
pub const MEM_SIZE: usize = 0x1_0000;

/// Width of one instruction word in bytes.
pub const INSTRUCTION_BYTES: u16 = 2;

/// Number of architectural registers (`r0`-`r7`).
pub const NUM_REGS: usize = 8;

/// Legacy next-PC value that signalled a fatal condition.
///
/// The run loop no longer tests for it; after an aborted run the program
/// counter is parked here so the final state matches the historical output.
pub const FATAL_PC: u16 = 0xFFFF;

/// Mask applied to `imm8 << 1` to form a conditional branch target.
pub const BRANCH_TARGET_MASK: u16 = 0x01FF;

/// Bits of the current PC kept by the page-relative `J` instruction.
pub const JUMP_PAGE_MASK: u16 = 0xF000;

/// Number of distinct instruction kinds with an execution counter.
pub const NUM_OPCODES: usize = 22;

/// Number of arithmetic/logic instructions with a configurable latency.
pub const NUM_ARITH_OPS: usize = 8;

/// Cycle cost of any instruction whose latency is not configured.
pub const DEFAULT_LATENCY: u64 = 1;
