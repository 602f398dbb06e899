//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the register-register operations of opcode 0 and
//! the comparison used by `slti`. All arithmetic wraps at 16 bits and all
//! comparisons are unsigned.

use crate::isa::decode::AluOp;

/// Arithmetic Logic Unit (ALU) for 16-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use e20_core::core::units::alu::Alu;
    /// use e20_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 0xFFFF);
    /// assert_eq!(Alu::execute(AluOp::Slt, 1, 0xFFFF), 1);
    /// ```
    #[inline]
    pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Or => a | b,
            AluOp::And => a & b,
            AluOp::Slt => Self::less_than(a, b),
        }
    }

    /// Unsigned set-if-less-than: 1 when `a < b`, else 0.
    #[inline]
    pub const fn less_than(a: u16, b: u16) -> u16 {
        (a < b) as u16
    }
}
