//! ISA tests: field extraction, opcode table, decoding, disassembly.

pub mod disasm;
