//! Instruction Disassembler for E20.
//!
//! Converts a decoded instruction back into assembly text for debug tracing,
//! logging, and test diagnostics. Immediates are printed signed; `jeq` and the
//! self-jump are rendered the way the assembler accepts them (absolute branch
//! target, `halt`).
//!
//! # Usage
//!
//! ```
//! use e20_core::isa::{decode, disasm::disassemble};
//!
//! // addi $1, $0, -5
//! let text = disassemble(&decode(0b001_000_001_1111011), 0);
//! assert_eq!(text, "addi $1, $0, -5");
//! ```

use crate::common::constants::ADDR_MASK;
use crate::isa::decode::Instruction;

/// Renders `instruction`, located at `pc`, as E20 assembly.
pub fn disassemble(instruction: &Instruction, pc: u16) -> String {
    match *instruction {
        Instruction::Alu { op, rd, ra, rb } => {
            format!("{} ${rd}, ${ra}, ${rb}", op.mnemonic())
        }
        Instruction::Jr { ra } => format!("jr ${ra}"),
        Instruction::Addi { rb, ra, imm } => format!("addi ${rb}, ${ra}, {}", imm as i16),
        Instruction::J { target } if target == pc & ADDR_MASK => "halt".to_string(),
        Instruction::J { target } => format!("j {target}"),
        Instruction::Jal { target } => format!("jal {target}"),
        Instruction::Lw { rb, ra, imm } => format!("lw ${rb}, {}(${ra})", imm as i16),
        Instruction::Sw { rb, ra, imm } => format!("sw ${rb}, {}(${ra})", imm as i16),
        Instruction::Jeq { ra, rb, imm } => {
            let target = pc.wrapping_add(1).wrapping_add(imm);
            format!("jeq ${ra}, ${rb}, {target}")
        }
        Instruction::Slti { rb, ra, imm } => format!("slti ${rb}, ${ra}, {}", imm as i16),
        Instruction::Fill(word) => format!(".fill {word}"),
    }
}
