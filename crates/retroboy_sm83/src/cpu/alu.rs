use super::{Cpu, Flag};

/// 8-bit accumulator operations, in opcode order (bits 5..3 of the
/// 0x80–0xBF block and of the `op A,d8` immediates).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub(super) fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

impl Cpu {
    /// Overwrite all four flags at once.
    #[inline]
    pub(super) fn set_znhc(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.clear_flags();
        self.set_flag(Flag::Z, z);
        self.set_flag(Flag::N, n);
        self.set_flag(Flag::H, h);
        self.set_flag(Flag::C, c);
    }

    #[inline]
    fn carry_in(&self) -> u8 {
        self.get_flag(Flag::C) as u8
    }

    /// Apply `op` to A and `value`, updating A (except for CP) and flags.
    pub(super) fn alu8(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        match op {
            AluOp::Add | AluOp::Adc => {
                let carry = if op == AluOp::Adc { self.carry_in() } else { 0 };
                let half = (a & 0x0F) + (value & 0x0F) + carry;
                let full = a as u16 + value as u16 + carry as u16;
                let result = full as u8;
                self.regs.a = result;
                self.set_znhc(result == 0, false, half > 0x0F, full > 0xFF);
            }
            AluOp::Sub | AluOp::Sbc | AluOp::Cp => {
                let carry = if op == AluOp::Sbc { self.carry_in() } else { 0 };
                let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry as i16;
                let full = a as i16 - value as i16 - carry as i16;
                let result = full as u8;
                if op != AluOp::Cp {
                    self.regs.a = result;
                }
                self.set_znhc(result == 0, true, half < 0, full < 0);
            }
            AluOp::And => {
                let result = a & value;
                self.regs.a = result;
                self.set_znhc(result == 0, false, true, false);
            }
            AluOp::Xor => {
                let result = a ^ value;
                self.regs.a = result;
                self.set_znhc(result == 0, false, false, false);
            }
            AluOp::Or => {
                let result = a | value;
                self.regs.a = result;
                self.set_znhc(result == 0, false, false, false);
            }
        }
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if self.get_flag(Flag::N) {
            a = a.wrapping_sub(adjust);
        } else {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        }

        self.regs.a = a;
        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, adjust >= 0x60);
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: Z untouched, N cleared, H from bit 11, C from bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, carry);
        self.regs.set_hl(result);
    }

    /// `SP + r8` as used by ADD SP,r8 and LD HL,SP+r8. Z and N are cleared;
    /// H and C come from the unsigned low-byte addition.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let h = (base & 0x000F) + (offset & 0x000F) > 0x000F;
        let c = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
        self.set_znhc(false, false, h, c);
        base.wrapping_add(offset)
    }

    /// Shared rotate/shift core for the CB block (x = 0) and the A-only
    /// rotates. `op` is bits 5..3 of the CB opcode. Returns the result and
    /// sets Z from it; callers that must clear Z do so afterwards.
    pub(super) fn alu_rotate(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op & 0x07 {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };
        self.set_znhc(result == 0, false, false, carry);
        result
    }
}
