//! Branch Resolution Unit Tests.

use e20_core::core::units::bru::Bru;
use rstest::rstest;

#[test]
fn fall_through_wraps_at_16_bits() {
    assert_eq!(Bru::fall_through(0), 1);
    assert_eq!(Bru::fall_through(0xFFFF), 0);
}

#[rstest]
#[case::forward(10, 5, 16)]
#[case::zero_offset(10, 0, 11)]
#[case::backward(10, 0xFFFF, 10)]
#[case::backward_far(3, 0xFFC0, 0xFFC4)]
#[case::wraps(0xFFFE, 3, 2)]
fn branch_target_is_pc_plus_one_plus_offset(
    #[case] pc: u16,
    #[case] offset: u16,
    #[case] expected: u16,
) {
    assert_eq!(Bru::branch_target(pc, offset), expected);
}

#[test]
fn halt_compares_memory_slot() {
    assert!(Bru::is_halt(5, 5));
    assert!(!Bru::is_halt(5, 6));
    // pc past 8191 halts on its own slot.
    assert!(Bru::is_halt(8192 + 5, 5));
    assert!(!Bru::is_halt(8192 + 5, 8192 + 5));
}
