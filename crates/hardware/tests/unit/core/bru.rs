//! # Branch Resolution Tests

use rstest::rstest;
use xsim_core::core::units::bru::{BranchCond, Bru};
use xsim_core::isa::Opcode;

#[rstest]
#[case(BranchCond::Positive, 1, true)]
#[case(BranchCond::Positive, 0, false)]
#[case(BranchCond::Positive, -1, false)]
#[case(BranchCond::Negative, -32768, true)]
#[case(BranchCond::Negative, 0, false)]
#[case(BranchCond::NonZero, -5, true)]
#[case(BranchCond::NonZero, 0, false)]
#[case(BranchCond::Zero, 0, true)]
#[case(BranchCond::Zero, 32767, false)]
fn test_condition(#[case] cond: BranchCond, #[case] value: i16, #[case] taken: bool) {
    assert_eq!(cond.holds(value), taken);
}

#[test]
fn test_branch_target_is_absolute_and_masked() {
    assert_eq!(Bru::branch_target(0x00), 0x000);
    assert_eq!(Bru::branch_target(0x10), 0x020);
    assert_eq!(Bru::branch_target(0xFF), 0x1FE);
}

#[test]
fn test_resolve_ignores_pc_when_taken() {
    assert_eq!(Bru::resolve(BranchCond::Zero, 0, 0x04, 0x4000), 0x008);
    assert_eq!(Bru::resolve(BranchCond::Zero, 1, 0x04, 0x4000), 0x4002);
}

#[test]
fn test_resolve_not_taken_wraps() {
    assert_eq!(Bru::resolve(BranchCond::Positive, 0, 0x04, 0xFFFE), 0x0000);
}

#[rstest]
#[case(0x0000, 0x000, 0x0000)]
#[case(0x0010, 0x7FF, 0x0FFE)]
#[case(0x3ABC, 0x001, 0x3002)]
#[case(0xF000, 0x400, 0xF800)]
fn test_jump_target_is_page_relative(#[case] pc: u16, #[case] imm11: u16, #[case] target: u16) {
    assert_eq!(Bru::jump_target(pc, imm11), target);
}

#[test]
fn test_condition_of_opcode() {
    assert_eq!(BranchCond::of(Opcode::Bp), Some(BranchCond::Positive));
    assert_eq!(BranchCond::of(Opcode::Bn), Some(BranchCond::Negative));
    assert_eq!(BranchCond::of(Opcode::Bx), Some(BranchCond::NonZero));
    assert_eq!(BranchCond::of(Opcode::Bz), Some(BranchCond::Zero));
    assert_eq!(BranchCond::of(Opcode::J), None);
}
