use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// LD rr, d16
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16(bus);
        self.write_rp(opcode >> 4, value);
    }

    /// LD r, d8 and LD (HL), d8
    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let value = self.fetch8(bus);
        self.write_reg8(bus, opcode >> 3, value);
    }

    /// LD r, r' over 0x40–0x7F (0x76 is HALT and dispatched separately).
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let value = self.read_reg8(bus, opcode);
        self.write_reg8(bus, opcode >> 3, value);
    }

    /// LD (a16), SP
    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    /// LDH (a8),A / LDH A,(a8)
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = 0xFF00 | self.fetch8(bus) as u16;
        self.transfer_a(bus, addr, opcode & 0x10 == 0);
    }

    /// LDH (C),A / LDH A,(C)
    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = 0xFF00 | self.regs.c as u16;
        self.transfer_a(bus, addr, opcode & 0x10 == 0);
    }

    /// LD (a16),A / LD A,(a16)
    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = self.fetch16(bus);
        self.transfer_a(bus, addr, opcode & 0x10 == 0);
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
    }

    /// LD SP, HL
    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.regs.sp = self.regs.hl();
    }

    /// LD HL, SP+r8
    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }

    /// Store A to `addr` when `store` is set, otherwise load A from it.
    #[inline]
    fn transfer_a(&mut self, bus: &mut dyn Bus, addr: u16, store: bool) {
        if store {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
    }

    /// Address operand of the `(BC)`, `(DE)`, `(HL+)`, `(HL-)` forms. The
    /// HL forms post-increment or post-decrement HL.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }
}
