//! E20 encoding tables.
//!
//! Opcodes occupy bits 15-13. Function codes (bits 3-0) are only meaningful
//! for opcode 0, the register-register class.

/// Function codes for opcode 0.
pub mod funct;

/// Major opcodes (bits 15-13).
pub mod opcodes;
