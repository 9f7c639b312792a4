//! # Disassembler Tests

use rstest::rstest;
use xsim_core::isa::Opcode;
use xsim_core::isa::disasm::disassemble;

use crate::common::builder::*;

#[rstest]
#[case(add(2, 0, 1), "ADD r2, r0, r1")]
#[case(arith(Opcode::Exp, 7, 6, 5), "EXP r7, r6, r5")]
#[case(lw(3, 4), "LW r3, (r4)")]
#[case(sw(4, 3), "SW r3, (r4)")]
#[case(liz(0, 5), "LIZ r0, 0x05")]
#[case(lis(1, 0xFF), "LIS r1, 0xff")]
#[case(branch(Opcode::Bz, 2, 0x10), "BZ r2, 0x020")]
#[case(jr(6), "JR r6")]
#[case(jalr(7, 1), "JALR r7, r1")]
#[case(j(0x008), "J 0x010")]
#[case(halt(), "HALT")]
#[case(put(3), "PUT r3")]
#[case(0x5000, ".word 0x5000")]
fn test_disassemble(#[case] word: u16, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}
