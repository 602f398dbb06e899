//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction for the E20 instruction fields and the sign/zero
//! extension helpers used to widen the 7- and 13-bit immediates to 16 bits.
//!
//! ```text
//!  15   13 12   10 9     7 6     4 3      0
//! +-------+-------+-------+-------+--------+
//! |  op   |  rA   |  rB   |  rD   |  func  |   register-register
//! +-------+-------+-------+-------+--------+
//! |  op   |  rA   |  rB   |     imm7       |   immediate / memory / branch
//! +-------+-------+-------+----------------+
//! |  op   |            imm13               |   j / jal
//! +-------+--------------------------------+
//! ```

/// Bit shift for the opcode field (bits 13-15).
pub const OPCODE_SHIFT: u16 = 13;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0x7;
/// Bit shift for register A (bits 10-12).
pub const REG_A_SHIFT: u16 = 10;
/// Bit shift for register B (bits 7-9).
pub const REG_B_SHIFT: u16 = 7;
/// Bit shift for the destination register (bits 4-6).
pub const REG_DST_SHIFT: u16 = 4;
/// Bit mask for any 3-bit register field after shifting.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the function code (bits 0-3).
pub const FUNC_MASK: u16 = 0xF;
/// Bit mask for the 7-bit immediate (bits 0-6).
pub const IMM7_MASK: u16 = 0x7F;
/// Bit mask for the 13-bit immediate (bits 0-12).
pub const IMM13_MASK: u16 = 0x1FFF;

/// Sign bit of a 7-bit immediate.
const IMM7_SIGN: u16 = 1 << 6;
/// Sign bit of a 13-bit immediate.
const IMM13_SIGN: u16 = 1 << 12;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every field is extracted unconditionally; which ones are meaningful depends
/// on the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 13-15).
    fn opcode(&self) -> u16;

    /// Extracts the first source register field (bits 10-12).
    fn reg_a(&self) -> usize;

    /// Extracts the second register field (bits 7-9).
    ///
    /// Source for register-register ops and `jeq`; destination for `addi`,
    /// `slti`, and `lw`; the stored value for `sw`.
    fn reg_b(&self) -> usize;

    /// Extracts the destination register field of register-register ops (bits 4-6).
    fn reg_dst(&self) -> usize;

    /// Extracts the function code (bits 0-3).
    fn func(&self) -> u16;

    /// Extracts the raw 7-bit immediate (bits 0-6).
    fn imm7(&self) -> u16;

    /// Extracts the raw 13-bit immediate (bits 0-12).
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_dst(&self) -> usize {
        ((self >> REG_DST_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn func(&self) -> u16 {
        self & FUNC_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}

/// Sign-extends a 7-bit immediate to 16 bits by replicating bit 6 into bits 7-15.
///
/// Bits above 6 in the input are ignored.
#[inline]
pub const fn sign_extend7(value: u16) -> u16 {
    let value = value & IMM7_MASK;
    if value & IMM7_SIGN == 0 {
        value
    } else {
        value | !IMM7_MASK
    }
}

/// Sign-extends a 13-bit immediate to 16 bits by replicating bit 12 into bits 13-15.
#[inline]
pub const fn sign_extend13(value: u16) -> u16 {
    let value = value & IMM13_MASK;
    if value & IMM13_SIGN == 0 {
        value
    } else {
        value | !IMM13_MASK
    }
}

/// Zero-extends a 13-bit immediate to 16 bits by clearing bits 13-15.
#[inline]
pub const fn zero_extend13(value: u16) -> u16 {
    value & IMM13_MASK
}
