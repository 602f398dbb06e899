//! E20 Instruction Decoder.
//!
//! This module decodes a 16-bit E20 word into a tagged [`Instruction`]. It
//! extracts register indices and applies the extension each immediate needs:
//! 7-bit immediates are sign-extended, 13-bit jump targets are zero-extended.
//!
//! Decoding is total. Every bit pattern yields an instruction; opcode 0 with an
//! unassigned function code decodes to [`Instruction::Fill`], a data word that
//! executes as a no-op.

use crate::isa::e20::{funct, opcodes};
use crate::isa::instruction::{InstructionBits, sign_extend7, zero_extend13};

/// Register-register ALU operation selected by the function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Unsigned set-if-less-than.
    Slt,
}

impl AluOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Or => "or",
            Self::And => "and",
            Self::Slt => "slt",
        }
    }
}

/// A decoded E20 instruction.
///
/// Register fields are indices into the register file. Immediates are stored
/// already extended to 16 bits, so arithmetic on them is plain wrapping
/// arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `$rd = $ra <op> $rb`.
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        ra: usize,
        /// Second source register.
        rb: usize,
    },
    /// `pc = $ra`.
    Jr {
        /// Register holding the target.
        ra: usize,
    },
    /// `$rb = $ra + imm`.
    Addi {
        /// Destination register.
        rb: usize,
        /// Source register.
        ra: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// `pc = target`; halts when `target` is the instruction's own address.
    J {
        /// Zero-extended absolute target.
        target: u16,
    },
    /// `$7 = pc + 1; pc = target`.
    Jal {
        /// Zero-extended absolute target.
        target: u16,
    },
    /// `$rb = mem[$ra + imm]`.
    Lw {
        /// Destination register.
        rb: usize,
        /// Base address register.
        ra: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `mem[$ra + imm] = $rb`.
    Sw {
        /// Register holding the stored value.
        rb: usize,
        /// Base address register.
        ra: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `if $ra == $rb { pc = pc + 1 + imm }`.
    Jeq {
        /// First compared register.
        ra: usize,
        /// Second compared register.
        rb: usize,
        /// Sign-extended pc-relative offset.
        imm: u16,
    },
    /// `$rb = $ra < imm` (unsigned comparison against the extended immediate).
    Slti {
        /// Destination register.
        rb: usize,
        /// Source register.
        ra: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// Opcode 0 with an unassigned function code; the raw word is kept.
    Fill(u16),
}

/// Coarse instruction category for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Register-register arithmetic and logic.
    Alu,
    /// Register-immediate arithmetic (`addi`, `slti`).
    Immediate,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
    /// Unconditional control transfer (`j`, `jal`, `jr`).
    Jump,
    /// Conditional branch (`jeq`).
    Branch,
    /// Data word executed as a no-op.
    Data,
}

impl Instruction {
    /// Returns the statistics category of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Self::Alu { .. } => InstructionClass::Alu,
            Self::Addi { .. } | Self::Slti { .. } => InstructionClass::Immediate,
            Self::Lw { .. } => InstructionClass::Load,
            Self::Sw { .. } => InstructionClass::Store,
            Self::J { .. } | Self::Jal { .. } | Self::Jr { .. } => InstructionClass::Jump,
            Self::Jeq { .. } => InstructionClass::Branch,
            Self::Fill(_) => InstructionClass::Data,
        }
    }

    /// Returns `true` for instructions observed by the cache hierarchy.
    pub const fn accesses_memory(&self) -> bool {
        matches!(self, Self::Lw { .. } | Self::Sw { .. })
    }
}

/// Decodes a 16-bit word into an [`Instruction`].
pub fn decode(word: u16) -> Instruction {
    let ra = word.reg_a();
    let rb = word.reg_b();
    let imm = sign_extend7(word.imm7());

    match word.opcode() {
        opcodes::OP_REG => decode_reg(word),
        opcodes::OP_ADDI => Instruction::Addi { rb, ra, imm },
        opcodes::OP_J => Instruction::J {
            target: zero_extend13(word.imm13()),
        },
        opcodes::OP_JAL => Instruction::Jal {
            target: zero_extend13(word.imm13()),
        },
        opcodes::OP_LW => Instruction::Lw { rb, ra, imm },
        opcodes::OP_SW => Instruction::Sw { rb, ra, imm },
        opcodes::OP_JEQ => Instruction::Jeq { ra, rb, imm },
        opcodes::OP_SLTI => Instruction::Slti { rb, ra, imm },
        // `opcode()` yields three bits, so every value is matched above.
        _ => Instruction::Fill(word),
    }
}

/// Decodes the register-register class by function code.
fn decode_reg(word: u16) -> Instruction {
    let alu = |op| Instruction::Alu {
        op,
        rd: word.reg_dst(),
        ra: word.reg_a(),
        rb: word.reg_b(),
    };

    match word.func() {
        funct::ADD => alu(AluOp::Add),
        funct::SUB => alu(AluOp::Sub),
        funct::OR => alu(AluOp::Or),
        funct::AND => alu(AluOp::And),
        funct::SLT => alu(AluOp::Slt),
        funct::JR => Instruction::Jr { ra: word.reg_a() },
        _ => Instruction::Fill(word),
    }
}
