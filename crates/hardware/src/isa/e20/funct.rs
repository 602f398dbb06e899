//! E20 Function Codes.
//!
//! Defines the function codes (bits 3-0) used with `OP_REG`. Any other value
//! executes as a no-op, which is how `.fill` data words behave.

/// Addition (ADD).
pub const ADD: u16 = 0b0000;

/// Subtraction (SUB).
pub const SUB: u16 = 0b0001;

/// Bitwise OR (OR).
pub const OR: u16 = 0b0010;

/// Bitwise AND (AND).
pub const AND: u16 = 0b0011;

/// Set if less than, unsigned (SLT).
pub const SLT: u16 = 0b0100;

/// Jump to register (JR).
pub const JR: u16 = 0b1000;
