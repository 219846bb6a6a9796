use crate::cpu::alu::AluOp;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r over 0x80–0xBF.
    pub(in crate::cpu) fn exec_alu_reg_group(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_reg8(bus, opcode);
        self.alu8(AluOp::from_opcode(opcode), value);
    }

    /// The same eight operations with a d8 operand (0xC6, 0xCE, ..., 0xFE).
    pub(in crate::cpu) fn exec_alu_imm(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let value = self.fetch8(bus);
        self.alu8(AluOp::from_opcode(opcode), value);
    }

    /// RLCA / RRCA / RLA / RRA: the CB rotates applied to A, with Z forced
    /// clear.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        self.regs.a = self.alu_rotate(opcode >> 3, self.regs.a);
        self.set_flag(Flag::Z, false);
    }

    /// ADD HL, rr
    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.read_rp(opcode >> 4);
        self.alu_add16_hl(value);
    }

    /// ADD SP, r8
    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.alu_daa();
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }
}
