//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, field extraction, decoding,
//! and disassembly for the 16-bit E20 instruction set.
//!
//! # Encoding
//!
//! Every instruction is one 16-bit word. Bits 15-13 select the opcode; opcode 0
//! is further dispatched on the function code in bits 3-0.

/// Instruction decoding into the tagged [`decode::Instruction`] form.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// E20 opcode and function-code tables.
pub mod e20;

/// Bit extraction utilities and immediate extension.
pub mod instruction;

pub use decode::{AluOp, Instruction, InstructionClass, decode};
pub use instruction::{InstructionBits, sign_extend7, sign_extend13, zero_extend13};
