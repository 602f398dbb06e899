//! Instruction Decode Tests.
//!
//! Every opcode and function code decodes to the expected variant with
//! extended immediates; unassigned function codes decode to data words.

use crate::common::builder::instruction::inst;
use e20_core::isa::{AluOp, Instruction, InstructionClass, decode};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::add(inst().add(3, 1, 2).build(), AluOp::Add)]
#[case::sub(inst().sub(3, 1, 2).build(), AluOp::Sub)]
#[case::or(inst().or(3, 1, 2).build(), AluOp::Or)]
#[case::and(inst().and(3, 1, 2).build(), AluOp::And)]
#[case::slt(inst().slt(3, 1, 2).build(), AluOp::Slt)]
fn register_operations(#[case] word: u16, #[case] op: AluOp) {
    assert_eq!(
        decode(word),
        Instruction::Alu {
            op,
            rd: 3,
            ra: 1,
            rb: 2
        }
    );
}

#[test]
fn jr() {
    assert_eq!(decode(inst().jr(7).build()), Instruction::Jr { ra: 7 });
}

#[test]
fn immediate_forms_sign_extend() {
    assert_eq!(
        decode(inst().addi(1, 2, -5).build()),
        Instruction::Addi {
            rb: 1,
            ra: 2,
            imm: 0xFFFB
        }
    );
    assert_eq!(
        decode(inst().lw(4, 5, 63).build()),
        Instruction::Lw {
            rb: 4,
            ra: 5,
            imm: 63
        }
    );
    assert_eq!(
        decode(inst().sw(6, 0, -64).build()),
        Instruction::Sw {
            rb: 6,
            ra: 0,
            imm: 0xFFC0
        }
    );
    assert_eq!(
        decode(inst().jeq(1, 2, -1).build()),
        Instruction::Jeq {
            ra: 1,
            rb: 2,
            imm: 0xFFFF
        }
    );
    assert_eq!(
        decode(inst().slti(3, 4, 10).build()),
        Instruction::Slti {
            rb: 3,
            ra: 4,
            imm: 10
        }
    );
}

#[test]
fn top_opcode_is_slti() {
    // 111 ra=7 rb=7 imm=0x7F
    assert_eq!(
        decode(0xFFFF),
        Instruction::Slti {
            rb: 7,
            ra: 7,
            imm: 0xFFFF
        }
    );
}

#[test]
fn jump_targets_zero_extend() {
    assert_eq!(
        decode(inst().j(8191).build()),
        Instruction::J { target: 8191 }
    );
    assert_eq!(
        decode(inst().jal(4096).build()),
        Instruction::Jal { target: 4096 }
    );
}

#[rstest]
#[case(5)]
#[case(6)]
#[case(7)]
#[case(9)]
#[case(15)]
fn unassigned_function_codes_are_data(#[case] func: u16) {
    let word = inst().opcode(0).func(func).rd(1).ra(2).rb(3).build();
    assert_eq!(decode(word), Instruction::Fill(word));
    assert_eq!(decode(word).class(), InstructionClass::Data);
}

#[test]
fn classes() {
    assert_eq!(decode(inst().add(1, 1, 1).build()).class(), InstructionClass::Alu);
    assert_eq!(decode(inst().slti(1, 1, 1).build()).class(), InstructionClass::Immediate);
    assert_eq!(decode(inst().lw(1, 1, 1).build()).class(), InstructionClass::Load);
    assert_eq!(decode(inst().sw(1, 1, 1).build()).class(), InstructionClass::Store);
    assert_eq!(decode(inst().jr(1).build()).class(), InstructionClass::Jump);
    assert_eq!(decode(inst().jeq(1, 1, 1).build()).class(), InstructionClass::Branch);
    assert!(decode(inst().lw(1, 1, 1).build()).accesses_memory());
    assert!(!decode(inst().jal(1).build()).accesses_memory());
}

proptest! {
    #[test]
    fn decode_is_total_and_registers_in_range(word in any::<u16>()) {
        match decode(word) {
            Instruction::Alu { rd, ra, rb, .. } => {
                prop_assert!(rd < 8 && ra < 8 && rb < 8);
            }
            Instruction::Jr { ra } => prop_assert!(ra < 8),
            Instruction::J { target } | Instruction::Jal { target } => {
                prop_assert!(target < 8192);
            }
            Instruction::Addi { rb, ra, .. }
            | Instruction::Lw { rb, ra, .. }
            | Instruction::Sw { rb, ra, .. }
            | Instruction::Jeq { ra, rb, .. }
            | Instruction::Slti { rb, ra, .. } => prop_assert!(ra < 8 && rb < 8),
            Instruction::Fill(raw) => prop_assert_eq!(raw, word),
        }
    }
}
