//! Disassembler Output Tests.

use crate::common::builder::instruction::inst;
use e20_core::isa::decode;
use e20_core::isa::disasm::disassemble;
use rstest::rstest;

#[rstest]
#[case::add(inst().add(3, 1, 2).build(), 0, "add $3, $1, $2")]
#[case::slt(inst().slt(7, 0, 6).build(), 0, "slt $7, $0, $6")]
#[case::jr(inst().jr(7).build(), 0, "jr $7")]
#[case::addi(inst().addi(1, 0, -5).build(), 0, "addi $1, $0, -5")]
#[case::slti(inst().slti(2, 3, 63).build(), 0, "slti $2, $3, 63")]
#[case::lw(inst().lw(2, 1, 4).build(), 0, "lw $2, 4($1)")]
#[case::sw(inst().sw(2, 1, -1).build(), 0, "sw $2, -1($1)")]
#[case::j(inst().j(12).build(), 0, "j 12")]
#[case::halt(inst().j(12).build(), 12, "halt")]
#[case::jal(inst().jal(100).build(), 0, "jal 100")]
#[case::jeq_forward(inst().jeq(1, 2, 3).build(), 10, "jeq $1, $2, 14")]
#[case::jeq_backward(inst().jeq(1, 2, -4).build(), 4, "jeq $1, $2, 1")]
#[case::fill(0x0005, 0, ".fill 5")]
#[case::fill_large(0x1FFF, 0, ".fill 8191")]
fn renders(#[case] word: u16, #[case] pc: u16, #[case] expected: &str) {
    assert_eq!(disassemble(&decode(word), pc), expected);
}
