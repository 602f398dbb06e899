//! E20 Opcodes.
//!
//! Defines the major opcodes (bits 15-13) of the E20 instruction set.

/// Register-register instructions (ADD, SUB, OR, AND, SLT, JR); see `funct`.
pub const OP_REG: u16 = 0b000;

/// Add immediate (ADDI).
pub const OP_ADDI: u16 = 0b001;

/// Absolute jump (J). A jump to its own address is the halt pattern.
pub const OP_J: u16 = 0b010;

/// Jump and link (JAL); the return address goes to `$7`.
pub const OP_JAL: u16 = 0b011;

/// Load word (LW).
pub const OP_LW: u16 = 0b100;

/// Store word (SW).
pub const OP_SW: u16 = 0b101;

/// Branch if equal (JEQ), pc-relative.
pub const OP_JEQ: u16 = 0b110;

/// Set if less than immediate (SLTI).
pub const OP_SLTI: u16 = 0b111;
