//! Primary-table handlers.
//!
//! Every handler has the [`Instruction`](super::Instruction) signature so it
//! can sit directly in a dispatch slot. Handlers never report cycles: the
//! engine charges the slot's base cost, or its branch cost when the handler
//! set `branch_taken`.
mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) {}

    /// Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD) hard-lock
    /// the CPU until power-off. We rewind PC onto the opcode so every later
    /// step fetches and executes it again.
    pub(in crate::cpu) fn exec_illegal(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        let opcode_addr = self.regs.pc.wrapping_sub(1);
        if !self.locked {
            log::error!(
                "SM83 locked: illegal opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                opcode = opcode,
                pc = opcode_addr,
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
        }
        self.locked = true;
        self.regs.pc = opcode_addr;
    }
}
