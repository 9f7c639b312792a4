//! ALU Operation Tests
//!
//! Boundary vectors for the eight X-ISA arithmetic/logic operations, plus
//! property tests over the full signed 16-bit range.

use proptest::prelude::*;
use rstest::rstest;
use xsim_core::common::Fault;
use xsim_core::core::units::alu::Alu;
use xsim_core::core::units::alu::arithmetic::power;
use xsim_core::isa::ArithOp;

const MAX: i16 = i16::MAX;
const MIN: i16 = i16::MIN;

fn alu(op: ArithOp, a: i16, b: i16) -> i16 {
    Alu::execute(op, a, b).expect("no fault")
}

#[rstest]
#[case(ArithOp::Add, 5, 3, 8)]
#[case(ArithOp::Add, MAX, 1, MIN)]
#[case(ArithOp::Add, -1, -1, -2)]
#[case(ArithOp::Sub, 3, 5, -2)]
#[case(ArithOp::Sub, MIN, 1, MAX)]
#[case(ArithOp::And, 0x0F0F, 0x00FF, 0x000F)]
#[case(ArithOp::And, -1, 0x1234, 0x1234)]
#[case(ArithOp::Nor, 0, 0, -1)]
#[case(ArithOp::Nor, 0x00F0, 0x000F, !0x00FF)]
#[case(ArithOp::Div, 7, 2, 3)]
#[case(ArithOp::Div, -7, 2, -3)]
#[case(ArithOp::Div, MIN, -1, MIN)]
#[case(ArithOp::Mul, 300, 300, 90000_i32 as i16)]
#[case(ArithOp::Mul, -4, 5, -20)]
#[case(ArithOp::Mod, 7, 3, 1)]
#[case(ArithOp::Mod, -7, 3, -1)]
#[case(ArithOp::Mod, 7, -3, 1)]
#[case(ArithOp::Mod, MIN, -1, 0)]
#[case(ArithOp::Exp, 2, 10, 1024)]
#[case(ArithOp::Exp, 3, 10, 59049_i32 as i16)]
#[case(ArithOp::Exp, 0, 0, 1)]
#[case(ArithOp::Exp, -2, 3, -8)]
fn test_alu_vectors(#[case] op: ArithOp, #[case] a: i16, #[case] b: i16, #[case] expected: i16) {
    assert_eq!(alu(op, a, b), expected);
}

#[test]
fn test_divide_by_zero_faults() {
    assert_eq!(Alu::execute(ArithOp::Div, 10, 0), Err(Fault::DivideByZero));
}

#[test]
fn test_modulo_by_zero_faults() {
    assert_eq!(Alu::execute(ArithOp::Mod, 10, 0), Err(Fault::ModuloByZero));
}

#[rstest]
#[case(1, -5, 1)]
#[case(-1, -2, 1)]
#[case(-1, -3, -1)]
#[case(2, -1, 0)]
#[case(0, -1, 0)]
#[case(-7, -4, 0)]
fn test_negative_exponent_truncates(#[case] base: i16, #[case] exp: i16, #[case] expected: i16) {
    assert_eq!(power(base, exp), expected);
}

proptest! {
    #[test]
    fn prop_add_wraps(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(alu(ArithOp::Add, a, b), a.wrapping_add(b));
    }

    #[test]
    fn prop_sub_wraps(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(alu(ArithOp::Sub, a, b), a.wrapping_sub(b));
    }

    #[test]
    fn prop_mul_matches_truncated_product(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(alu(ArithOp::Mul, a, b), (i32::from(a) * i32::from(b)) as i16);
    }

    #[test]
    fn prop_nor_is_not_or(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(alu(ArithOp::Nor, a, b), !(a | b));
    }

    #[test]
    fn prop_div_mod_reconstruct(a in any::<i16>(), b in any::<i16>().prop_filter("non-zero", |b| *b != 0)) {
        let q = alu(ArithOp::Div, a, b);
        let r = alu(ArithOp::Mod, a, b);
        prop_assert_eq!(q.wrapping_mul(b).wrapping_add(r), a);
        prop_assert!(r == 0 || r.signum() == a.signum());
    }
}
