//! General-Purpose Register File Tests.

use e20_core::core::arch::Gpr;

#[test]
fn registers_start_at_zero() {
    let gpr = Gpr::new();
    assert_eq!(gpr.snapshot(), [0; 8]);
}

#[test]
fn register_zero_ignores_writes() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0x1234);
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.snapshot()[0], 0);
}

#[test]
fn other_registers_hold_full_words() {
    let mut gpr = Gpr::new();
    for reg in 1..8 {
        gpr.write(reg, 0xFFF0 | reg as u16);
    }
    for reg in 1..8 {
        assert_eq!(gpr.read(reg), 0xFFF0 | reg as u16, "${reg}");
    }
}
