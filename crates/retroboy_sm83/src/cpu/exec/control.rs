use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// Condition encoded in bits 4..3 of JR/JP/CALL/RET cc.
    #[inline]
    fn cc_condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z), // NZ
            1 => self.get_flag(Flag::Z),  // Z
            2 => !self.get_flag(Flag::C), // NC
            _ => self.get_flag(Flag::C),  // C
        }
    }

    pub(in crate::cpu) fn exec_jr(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.jr(bus, true);
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cond = self.cc_condition(opcode);
        self.jr(bus, cond);
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cond = self.cc_condition(opcode);
        self.jp_cond(bus, cond);
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.jp_cond(bus, true);
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.pc = self.regs.hl();
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cond = self.cc_condition(opcode);
        self.call_cond(bus, cond);
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cond = self.cc_condition(opcode);
        self.ret_cond(bus, cond);
    }
}
