//! Instruction Handlers.
//!
//! One handler per X-ISA opcode. Each reads its operand fields from the raw
//! word, mutates architectural state, and reports where execution continues.
//! A handler that faults leaves registers, data memory, and counters as they
//! were; counting happens in [`Cpu::execute`] only after success.

use tracing::debug;

use super::{Cpu, Flow};
use crate::common::{AccessType, Fault, INSTRUCTION_BYTES};
use crate::core::units::alu::Alu;
use crate::core::units::bru::{BranchCond, Bru};
use crate::isa::{ArithOp, InstructionBits, Opcode};

impl Cpu {
    /// Executes one decoded instruction and records it in the counters.
    ///
    /// # Arguments
    ///
    /// * `op`   - The decoded opcode of `inst`.
    /// * `inst` - The raw instruction word.
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`Fault`]; the instruction is then not counted.
    pub fn execute(&mut self, op: Opcode, inst: u16) -> Result<Flow, Fault> {
        let flow = match op {
            Opcode::Add => self.exec_arith(ArithOp::Add, inst)?,
            Opcode::Sub => self.exec_arith(ArithOp::Sub, inst)?,
            Opcode::And => self.exec_arith(ArithOp::And, inst)?,
            Opcode::Nor => self.exec_arith(ArithOp::Nor, inst)?,
            Opcode::Div => self.exec_arith(ArithOp::Div, inst)?,
            Opcode::Mul => self.exec_arith(ArithOp::Mul, inst)?,
            Opcode::Mod => self.exec_arith(ArithOp::Mod, inst)?,
            Opcode::Exp => self.exec_arith(ArithOp::Exp, inst)?,
            Opcode::Lw => self.exec_lw(inst)?,
            Opcode::Sw => self.exec_sw(inst)?,
            Opcode::Liz => self.exec_liz(inst),
            Opcode::Lis => self.exec_lis(inst),
            Opcode::Lui => self.exec_lui(inst),
            Opcode::Bp => self.exec_branch(BranchCond::Positive, inst),
            Opcode::Bn => self.exec_branch(BranchCond::Negative, inst),
            Opcode::Bx => self.exec_branch(BranchCond::NonZero, inst),
            Opcode::Bz => self.exec_branch(BranchCond::Zero, inst),
            Opcode::Jr => self.exec_jr(inst),
            Opcode::Jalr => self.exec_jalr(inst),
            Opcode::J => self.exec_j(inst),
            Opcode::Halt => Flow::Halt,
            Opcode::Put => self.exec_put(inst),
        };
        self.counters.record(op);
        Ok(flow)
    }

    #[inline]
    const fn fall_through(&self) -> Flow {
        Flow::Next(self.pc.wrapping_add(INSTRUCTION_BYTES))
    }

    /// `ADD`..`EXP`: `rd = rs <op> rt`.
    ///
    /// # Errors
    ///
    /// `DIV` and `MOD` fault on a zero `rt` without writing `rd`.
    pub fn exec_arith(&mut self, op: ArithOp, inst: u16) -> Result<Flow, Fault> {
        let (rd, rs, rt) = (inst.rd(), inst.rs(), inst.rt());
        let (a, b) = (self.regs.read(rs), self.regs.read(rt));
        let result = Alu::execute(op, a, b)?;
        self.regs.write(rd, result);
        debug!("{op:?}: r{rd} = {result} (r{rs}={a}, r{rt}={b})");
        Ok(self.fall_through())
    }

    /// `LW`: `rd = mem[rs] << 8 | mem[rs + 1]`.
    ///
    /// # Errors
    ///
    /// Faults if the address in `rs` is odd.
    pub fn exec_lw(&mut self, inst: u16) -> Result<Flow, Fault> {
        let (rd, rs) = (inst.rd(), inst.rs());
        let addr = self.regs.read(rs) as u16;
        let val = self.dmem.read_word(addr, AccessType::Load)?;
        self.regs.write(rd, val as i16);
        debug!("LW: r{rd} = mem[{addr:#06x}] = {val:#06x}");
        Ok(self.fall_through())
    }

    /// `SW`: `mem[rs] = rt >> 8; mem[rs + 1] = rt & 0xFF`.
    ///
    /// # Errors
    ///
    /// Faults if the address in `rs` is odd.
    pub fn exec_sw(&mut self, inst: u16) -> Result<Flow, Fault> {
        let (rs, rt) = (inst.rs(), inst.rt());
        let addr = self.regs.read(rs) as u16;
        let val = self.regs.read(rt) as u16;
        self.dmem.write_word(addr, val)?;
        debug!("SW: mem[{addr:#06x}] = r{rt} = {val:#06x}");
        Ok(self.fall_through())
    }

    /// `LIZ`: `rd = zext(imm8)`.
    pub fn exec_liz(&mut self, inst: u16) -> Flow {
        let (rd, imm8) = (inst.rd(), inst.imm8());
        self.regs.write(rd, i16::from(imm8));
        debug!("LIZ: r{rd} = {imm8}");
        self.fall_through()
    }

    /// `LIS`: `rd = sext(imm8)`.
    pub fn exec_lis(&mut self, inst: u16) -> Flow {
        let (rd, imm8) = (inst.rd(), inst.imm8());
        let val = i16::from(imm8 as i8);
        self.regs.write(rd, val);
        debug!("LIS: r{rd} = {val}");
        self.fall_through()
    }

    /// `LUI`: `rd = imm8 << 8 | (rd & 0xFF)`.
    pub fn exec_lui(&mut self, inst: u16) -> Flow {
        let (rd, imm8) = (inst.rd(), inst.imm8());
        let low = self.regs.read(rd) as u16 & 0x00FF;
        let val = (u16::from(imm8) << 8) | low;
        self.regs.write(rd, val as i16);
        debug!("LUI: r{rd} = {val:#06x}");
        self.fall_through()
    }

    /// `BP`, `BN`, `BX`, `BZ`: absolute branch on the sign of `rd`.
    pub fn exec_branch(&mut self, cond: BranchCond, inst: u16) -> Flow {
        let (rd, imm8) = (inst.rd(), inst.imm8());
        let value = self.regs.read(rd);
        let next = Bru::resolve(cond, value, imm8, self.pc);
        debug!("{cond:?}: r{rd}={value} -> pc {next:#06x}");
        Flow::Next(next)
    }

    /// `JR`: `pc = rs`.
    pub fn exec_jr(&mut self, inst: u16) -> Flow {
        let rs = inst.rs();
        let next = self.regs.read(rs) as u16;
        debug!("JR: pc = r{rs} = {next:#06x}");
        Flow::Next(next)
    }

    /// `JALR`: `rd = pc + 2; pc = rs`.
    ///
    /// The link is written before `rs` is read, so `JALR rX, rX` continues
    /// at `pc + 2`.
    pub fn exec_jalr(&mut self, inst: u16) -> Flow {
        let (rd, rs) = (inst.rd(), inst.rs());
        let link = self.pc.wrapping_add(INSTRUCTION_BYTES);
        self.regs.write(rd, link as i16);
        let next = self.regs.read(rs) as u16;
        debug!("JALR: r{rd} = {link:#06x}, pc = r{rs} = {next:#06x}");
        Flow::Next(next)
    }

    /// `J`: `pc = pc[15:12] | imm11 << 1`.
    pub fn exec_j(&mut self, inst: u16) -> Flow {
        let next = Bru::jump_target(self.pc, inst.imm11());
        debug!("J: pc = {next:#06x}");
        Flow::Next(next)
    }

    /// `PUT`: print `rs` to the console.
    pub fn exec_put(&mut self, inst: u16) -> Flow {
        let rs = inst.rs();
        self.console.put(rs, self.regs.read(rs));
        self.fall_through()
    }
}
