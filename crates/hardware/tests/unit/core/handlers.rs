//! Instruction Handler Tests
//!
//! Each test loads a short program, runs it step by step through
//! `TestContext`, and checks architectural effects: destination registers,
//! data memory, next PC, and counters.

use proptest::prelude::*;
use rstest::rstest;
use xsim_core::common::{AccessType, FATAL_PC, Fault};
use xsim_core::core::StepOutcome;
use xsim_core::isa::Opcode;

use crate::common::builder::*;
use crate::common::harness::TestContext;

fn one(word: u16) -> TestContext {
    TestContext::new().load_program(&[word, halt()])
}

// ══════════════════════════════════════════════════════════
// Arithmetic
// ══════════════════════════════════════════════════════════

#[test]
fn test_add_reads_before_write_when_rd_is_source() {
    let mut ctx = one(add(1, 1, 1));
    ctx.set_reg(1, 21);
    assert_eq!(ctx.step(), StepOutcome::Continue);
    assert_eq!(ctx.get_reg(1), 42);
    assert_eq!(ctx.pc(), 2);
}

#[test]
fn test_div_by_zero_aborts_without_side_effects() {
    let mut ctx = one(div(2, 0, 1));
    ctx.set_reg(0, 10);
    ctx.set_reg(2, 99);

    let outcome = ctx.step();

    assert_eq!(
        outcome,
        StepOutcome::Aborted {
            pc: 0,
            fault: Fault::DivideByZero
        }
    );
    assert_eq!(ctx.get_reg(2), 99);
    assert_eq!(ctx.sim.cpu.counters.get(Opcode::Div), 0);
    assert_eq!(ctx.pc(), FATAL_PC);
}

#[test]
fn test_mod_by_zero_aborts() {
    let mut ctx = one(modulo(2, 0, 1));
    ctx.set_reg(0, 10);
    assert_eq!(
        ctx.step(),
        StepOutcome::Aborted {
            pc: 0,
            fault: Fault::ModuloByZero
        }
    );
    assert_eq!(ctx.sim.cpu.counters.total(), 0);
}

proptest! {
    #[test]
    fn prop_arith_touches_only_rd(
        op in prop::sample::select(vec![
            Opcode::Add, Opcode::Sub, Opcode::And, Opcode::Nor,
            Opcode::Mul, Opcode::Exp,
        ]),
        rd in 0u8..8,
        rs in 0u8..8,
        rt in 0u8..8,
        init in prop::array::uniform8(any::<i16>()),
    ) {
        let mut ctx = one(arith(op, rd, rs, rt));
        for (i, v) in init.iter().enumerate() {
            ctx.set_reg(i, *v);
        }

        prop_assert_eq!(ctx.step(), StepOutcome::Continue);

        for i in 0..8 {
            if i != usize::from(rd) {
                prop_assert_eq!(ctx.get_reg(i), init[i]);
            }
        }
        prop_assert_eq!(ctx.pc(), 2);
        prop_assert_eq!(ctx.sim.cpu.counters.get(op), 1);
    }
}

// ══════════════════════════════════════════════════════════
// Memory
// ══════════════════════════════════════════════════════════

#[test]
fn test_sw_then_lw_round_trips_through_data_memory() {
    let mut ctx = TestContext::new().load_program(&[sw(1, 2), lw(3, 1), halt()]);
    ctx.set_reg(1, 0x0040);
    ctx.set_reg(2, -2);

    let _ = ctx.step();
    assert_eq!(ctx.sim.cpu.dmem.read_byte(0x40), 0xFF);
    assert_eq!(ctx.sim.cpu.dmem.read_byte(0x41), 0xFE);

    let _ = ctx.step();
    assert_eq!(ctx.get_reg(3), -2);
}

#[test]
fn test_lw_treats_register_as_unsigned_address() {
    let mut ctx = one(lw(0, 1));
    ctx.sim.cpu.dmem.write_word(0xFFFE, 0x1234).unwrap();
    ctx.set_reg(1, -2);
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(0), 0x1234);
}

#[test]
fn test_lw_misaligned_aborts() {
    let mut ctx = one(lw(0, 1));
    ctx.set_reg(0, 7);
    ctx.set_reg(1, 0x0011);
    assert_eq!(
        ctx.step(),
        StepOutcome::Aborted {
            pc: 0,
            fault: Fault::UnalignedAccess {
                kind: AccessType::Load,
                addr: 0x0011
            }
        }
    );
    assert_eq!(ctx.get_reg(0), 7);
    assert_eq!(ctx.sim.cpu.counters.get(Opcode::Lw), 0);
}

#[test]
fn test_sw_misaligned_leaves_memory_unchanged() {
    let mut ctx = one(sw(1, 2));
    ctx.set_reg(1, 0x0021);
    ctx.set_reg(2, 0x7777);
    assert!(matches!(ctx.step(), StepOutcome::Aborted { .. }));
    assert!(ctx.sim.cpu.dmem.as_bytes().iter().all(|&b| b == 0));
}

// ══════════════════════════════════════════════════════════
// Immediates
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0x00, 0)]
#[case(0x7F, 127)]
#[case(0xFF, 255)]
fn test_liz_zero_extends(#[case] imm: u8, #[case] expected: i16) {
    let mut ctx = one(liz(4, imm));
    ctx.set_reg(4, -1);
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(4), expected);
}

#[rstest]
#[case(0x00, 0)]
#[case(0x7F, 127)]
#[case(0x80, -128)]
#[case(0xFF, -1)]
fn test_lis_sign_extends(#[case] imm: u8, #[case] expected: i16) {
    let mut ctx = one(lis(4, imm));
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(4), expected);
}

#[test]
fn test_lui_keeps_low_byte() {
    let mut ctx = one(lui(5, 0xAB));
    ctx.set_reg(5, 0x12CD);
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(5) as u16, 0xABCD);
}

#[test]
fn test_liz_then_lui_builds_full_word() {
    let mut ctx = TestContext::new().load_program(&[liz(1, 0x34), lui(1, 0x12), halt()]);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(1), 0x1234);
}

// ══════════════════════════════════════════════════════════
// Control flow
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(Opcode::Bp, 5, true)]
#[case(Opcode::Bp, 0, false)]
#[case(Opcode::Bn, -5, true)]
#[case(Opcode::Bn, 5, false)]
#[case(Opcode::Bx, 1, true)]
#[case(Opcode::Bx, 0, false)]
#[case(Opcode::Bz, 0, true)]
#[case(Opcode::Bz, -1, false)]
fn test_branch(#[case] op: Opcode, #[case] value: i16, #[case] taken: bool) {
    let mut ctx = one(branch(op, 3, 0x10));
    ctx.set_reg(3, value);
    let _ = ctx.step();
    assert_eq!(ctx.pc(), if taken { 0x020 } else { 0x002 });
    assert_eq!(ctx.sim.cpu.counters.get(op), 1);
}

#[test]
fn test_jr() {
    let mut ctx = one(jr(6));
    ctx.set_reg(6, 0x0100);
    let _ = ctx.step();
    assert_eq!(ctx.pc(), 0x0100);
}

#[test]
fn test_jalr_links_and_jumps() {
    let mut ctx = one(jalr(7, 1));
    ctx.set_reg(1, 0x0040);
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(7), 2);
    assert_eq!(ctx.pc(), 0x0040);
    assert_eq!(ctx.sim.cpu.counters.get(Opcode::Jalr), 1);
}

#[test]
fn test_jalr_same_register_falls_through() {
    let mut ctx = one(jalr(2, 2));
    ctx.set_reg(2, 0x0100);
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.pc(), 2);
}

#[test]
fn test_j_stays_in_page() {
    let mut ctx = one(j(0x008));
    let _ = ctx.step();
    assert_eq!(ctx.pc(), 0x0010);
}

#[test]
fn test_halt_stops_and_counts_once() {
    let mut ctx = TestContext::new().load_program(&[halt()]);
    assert_eq!(ctx.step(), StepOutcome::Halted);
    assert_eq!(ctx.step(), StepOutcome::Halted);
    assert_eq!(ctx.sim.cpu.counters.get(Opcode::Halt), 1);
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_put_writes_console_line() {
    let mut ctx = one(put(3));
    ctx.set_reg(3, -42);
    let _ = ctx.step();
    assert_eq!(ctx.output(), vec!["\t$R3: -42".to_string()]);
    assert_eq!(ctx.sim.cpu.counters.get(Opcode::Put), 1);
}
