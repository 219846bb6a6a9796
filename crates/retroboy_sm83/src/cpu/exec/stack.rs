use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// PUSH BC/DE/HL/AF
    pub(in crate::cpu) fn exec_push_rr(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = match (opcode >> 4) & 0x03 {
            3 => self.regs.af(),
            rp => self.read_rp(rp),
        };
        self.push_u16(bus, value);
    }

    /// POP BC/DE/HL/AF. POP AF drops the low nibble of F.
    pub(in crate::cpu) fn exec_pop_rr(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            3 => self.regs.set_af(value),
            rp => self.write_rp(rp, value),
        }
    }

    /// RST n: call to one of the eight fixed restart vectors.
    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.call_cond(bus, true);
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.ret_cond(bus, true);
    }

    /// RETI: return and re-enable interrupts in one go.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
    }
}
