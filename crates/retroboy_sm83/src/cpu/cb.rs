use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Extended-table handler for every CB-prefixed opcode (bit operations,
    /// shifts and rotates).
    ///
    /// The opcode splits as `xx yyy zzz`: `x` picks the group, `y` the
    /// operation or bit number, `z` the register (6 = (HL)).
    pub(in crate::cpu) fn exec_cb(&mut self, bus: &mut dyn Bus, opcode: u8) {
        let y = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let value = self.read_reg8(bus, z);

        match opcode >> 6 {
            0 => {
                let result = self.alu_rotate(y, value);
                self.write_reg8(bus, z, result);
            }
            1 => {
                // BIT y, r: Z from the tested bit, N=0, H=1, C preserved.
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            2 => self.write_reg8(bus, z, value & !(1 << y)),
            _ => self.write_reg8(bus, z, value | (1 << y)),
        }
    }
}
