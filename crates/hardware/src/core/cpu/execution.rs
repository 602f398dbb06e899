//! Main Execution Loop.
//!
//! This module implements the fetch/decode/execute cycle of the E20. It performs the following:
//! 1. **Fetch and Decode:** Reads the slot at `pc mod 8192` through the decode cache.
//! 2. **Dispatch:** One handler per instruction variant, each returning the next pc.
//! 3. **Cache Observation:** Loads and stores are classified by the cache hierarchy
//!    before memory is touched, using the same effective address.
//! 4. **Halt Detection:** A `j` whose target is its own slot sets the halt flag.
//!
//! Execution never faults. Every encoding has defined behavior.

use tracing::{info, trace};

use super::Cpu;
use crate::common::constants::LINK_REG;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::decode::{AluOp, Instruction};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Executes one instruction.
    ///
    /// Does nothing once the CPU has halted. Returns `true` if the CPU is
    /// halted after this call.
    pub fn step(&mut self) -> bool {
        if self.halted {
            return true;
        }

        let pc = self.pc;
        let inst = self.fetch();
        trace!(pc, inst = %disassemble(&inst, pc), "execute");

        self.pc = self.execute(pc, inst);
        self.stats.record_instruction(inst.class());

        if self.halted {
            info!(
                pc = self.pc,
                retired = self.stats.instructions_retired,
                "halted"
            );
        }
        self.halted
    }

    /// Runs until the halt pattern executes.
    ///
    /// Programs without the halt pattern never return, as on the hardware.
    pub fn run(&mut self) {
        while !self.step() {}
    }

    /// Runs until halt or until `max_steps` more instructions have retired.
    ///
    /// Returns `true` if the CPU halted.
    pub fn run_bounded(&mut self, max_steps: u64) -> bool {
        for _ in 0..max_steps {
            if self.step() {
                return true;
            }
        }
        self.halted
    }

    /// Applies `inst`, located at `pc`, to the machine state and returns the next pc.
    pub fn execute(&mut self, pc: u16, inst: Instruction) -> u16 {
        match inst {
            Instruction::Alu { op, rd, ra, rb } => self.exec_alu(pc, op, rd, ra, rb),
            Instruction::Jr { ra } => self.regs.read(ra),
            Instruction::Addi { rb, ra, imm } => {
                self.regs.write(rb, self.regs.read(ra).wrapping_add(imm));
                Bru::fall_through(pc)
            }
            Instruction::J { target } => self.exec_jump(pc, target),
            Instruction::Jal { target } => {
                self.regs.write(LINK_REG, Bru::fall_through(pc));
                target
            }
            Instruction::Lw { rb, ra, imm } => self.exec_load(pc, rb, ra, imm),
            Instruction::Sw { rb, ra, imm } => self.exec_store(pc, rb, ra, imm),
            Instruction::Jeq { ra, rb, imm } => self.exec_branch(pc, ra, rb, imm),
            Instruction::Slti { rb, ra, imm } => {
                self.regs.write(rb, Alu::less_than(self.regs.read(ra), imm));
                Bru::fall_through(pc)
            }
            Instruction::Fill(_) => Bru::fall_through(pc),
        }
    }

    fn exec_alu(&mut self, pc: u16, op: AluOp, rd: usize, ra: usize, rb: usize) -> u16 {
        let result = Alu::execute(op, self.regs.read(ra), self.regs.read(rb));
        self.regs.write(rd, result);
        Bru::fall_through(pc)
    }

    fn exec_jump(&mut self, pc: u16, target: u16) -> u16 {
        if Bru::is_halt(pc, target) {
            self.halted = true;
        }
        target
    }

    fn exec_branch(&mut self, pc: u16, ra: usize, rb: usize, imm: u16) -> u16 {
        if self.regs.read(ra) == self.regs.read(rb) {
            self.stats.record_branch_taken();
            Bru::branch_target(pc, imm)
        } else {
            Bru::fall_through(pc)
        }
    }

    fn exec_load(&mut self, pc: u16, rb: usize, ra: usize, imm: u16) -> u16 {
        let addr = Lsu::effective_address(self.regs.read(ra), imm);
        self.observe_access(pc, addr, false);
        self.regs.write(rb, self.memory.read(addr));
        Bru::fall_through(pc)
    }

    fn exec_store(&mut self, pc: u16, rb: usize, ra: usize, imm: u16) -> u16 {
        let addr = Lsu::effective_address(self.regs.read(ra), imm);
        self.observe_access(pc, addr, true);
        self.store_word(addr, self.regs.read(rb));
        Bru::fall_through(pc)
    }

    /// Lets the cache hierarchy classify an access; never changes data.
    fn observe_access(&mut self, pc: u16, addr: u16, is_store: bool) {
        if let Some(caches) = self.caches.as_mut() {
            for event in caches.access(pc, addr, is_store) {
                self.stats.record_cache(event);
            }
        }
    }
}
