use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// HALT: stop fetching until `IE & IF` becomes non-zero.
    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        log::trace!("SM83 HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
    }

    /// STOP is a 2-byte instruction; the padding byte is fetched and
    /// discarded. The low-power state itself belongs to the joypad and LCD
    /// hardware outside this core, so STOP otherwise behaves as a NOP.
    pub(in crate::cpu) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) {
        let _padding = self.fetch8(bus);
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.ime = false;
    }

    /// EI takes effect immediately: an interrupt that is already pending is
    /// serviced at the start of the next step.
    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) {
        self.ime = true;
    }
}
