use std::fmt;

use lazy_static::lazy_static;

use super::{Bus, Cpu};

/// A single dispatch-table entry.
///
/// Entries receive the opcode byte they were dispatched for, so one handler
/// can serve a whole family of encodings (e.g. `LD r,r'`). Costs are not
/// returned by the handler; they come from the tables that sit alongside it.
pub type Instruction = fn(&mut Cpu, &mut dyn Bus, u8);

/// Primary opcodes that hard-lock the CPU on real hardware.
pub const ILLEGAL_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// Instruction dispatch tables.
///
/// `primary`, `base_cycles` and `branch_cycles` are indexed by the first
/// opcode byte; `extended` and `extended_cycles` by the byte following the
/// 0xCB escape. Every slot is populated. All costs are in T-cycles.
pub struct OpcodeTable {
    pub primary: [Instruction; 256],
    /// Cost of a primary opcode whose handler left `branch_taken` clear.
    pub base_cycles: [u32; 256],
    /// Cost of a primary opcode whose handler set `branch_taken`.
    pub branch_cycles: [u32; 256],
    pub extended: [Instruction; 256],
    pub extended_cycles: [u32; 256],
}

lazy_static! {
    static ref LR35902: OpcodeTable = OpcodeTable::lr35902();
}

impl OpcodeTable {
    /// The built-in instruction set, shared by every CPU created with
    /// [`Cpu::new`].
    pub fn shared() -> &'static OpcodeTable {
        &LR35902
    }

    /// Build the LR35902 instruction set.
    pub fn lr35902() -> Self {
        Self {
            primary: std::array::from_fn(|opcode| primary_instruction(opcode as u8)),
            base_cycles: BASE_CYCLES,
            branch_cycles: BRANCH_CYCLES,
            extended: [Cpu::exec_cb as Instruction; 256],
            extended_cycles: EXTENDED_CYCLES,
        }
    }
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpcodeTable")
            .field("base_cycles", &self.base_cycles)
            .field("branch_cycles", &self.branch_cycles)
            .field("extended_cycles", &self.extended_cycles)
            .finish_non_exhaustive()
    }
}

fn primary_instruction(opcode: u8) -> Instruction {
    match opcode {
        0x00 => Cpu::exec_nop,

        // 16-bit immediate loads.
        0x01 | 0x11 | 0x21 | 0x31 => Cpu::exec_ld_rr_d16,

        // LD (BC/DE/HL±), A
        0x02 | 0x12 | 0x22 | 0x32 => Cpu::exec_ld_indirect_a,

        // LD A, (BC/DE/HL±)
        0x0A | 0x1A | 0x2A | 0x3A => Cpu::exec_ld_a_indirect,

        0x03 | 0x13 | 0x23 | 0x33 => Cpu::exec_inc16_rr,
        0x0B | 0x1B | 0x2B | 0x3B => Cpu::exec_dec16_rr,

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Cpu::exec_inc8_reg,
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Cpu::exec_dec8_reg,

        // LD r, d8 (and LD (HL), d8)
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Cpu::exec_ld_r_d8,

        // RLCA / RRCA / RLA / RRA
        0x07 | 0x0F | 0x17 | 0x1F => Cpu::exec_rotate_a,

        0x08 => Cpu::exec_ld_a16_sp,
        0x09 | 0x19 | 0x29 | 0x39 => Cpu::exec_add_hl_rr,
        0x10 => Cpu::exec_stop,

        0x18 => Cpu::exec_jr,
        0x20 | 0x28 | 0x30 | 0x38 => Cpu::exec_jr_cc,

        0x27 => Cpu::exec_daa,
        0x2F => Cpu::exec_cpl,
        0x37 => Cpu::exec_scf,
        0x3F => Cpu::exec_ccf,

        // HALT sits in the middle of the LD r,r block.
        0x76 => Cpu::exec_halt,
        0x40..=0x7F => Cpu::exec_ld_r_r,

        // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r,(HL)
        0x80..=0xBF => Cpu::exec_alu_reg_group,
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => Cpu::exec_alu_imm,

        0xC0 | 0xC8 | 0xD0 | 0xD8 => Cpu::exec_ret_cc,
        0xC2 | 0xCA | 0xD2 | 0xDA => Cpu::exec_jp_cc,
        0xC4 | 0xCC | 0xD4 | 0xDC => Cpu::exec_call_cc,
        0xC3 => Cpu::exec_jp_a16,
        0xE9 => Cpu::exec_jp_hl,
        0xCD => Cpu::exec_call_a16,
        0xC9 => Cpu::exec_ret,
        0xD9 => Cpu::exec_reti,
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Cpu::exec_rst,

        0xC1 | 0xD1 | 0xE1 | 0xF1 => Cpu::exec_pop_rr,
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Cpu::exec_push_rr,

        // Never dispatched: `step` consumes 0xCB as the extended escape.
        0xCB => Cpu::exec_nop,

        0xE0 | 0xF0 => Cpu::exec_ldh_a8,
        0xE2 | 0xF2 => Cpu::exec_ldh_c,
        0xEA | 0xFA => Cpu::exec_ld_a16_a,
        0xE8 => Cpu::exec_add_sp_r8,
        0xF8 => Cpu::exec_ld_hl_sp_r8,
        0xF9 => Cpu::exec_ld_sp_hl,

        0xF3 => Cpu::exec_di,
        0xFB => Cpu::exec_ei,

        // D3 DB DD E3 E4 EB EC ED F4 FC FD
        _ => Cpu::exec_illegal,
    }
}

#[rustfmt::skip]
const BASE_CYCLES: [u32; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
     8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 2x
     8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 3x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
     8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  4, 12, 24,  8, 16, // Cx
     8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // Dx
    12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // Ex
    12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // Fx
];

const BRANCH_CYCLES: [u32; 256] = branch_cycles();

const EXTENDED_CYCLES: [u32; 256] = extended_cycles();

/// Conditional JR/JP/CALL/RET cost more when the condition holds; every
/// other opcode costs the same either way.
const fn branch_cycles() -> [u32; 256] {
    let mut table = BASE_CYCLES;
    table[0x20] = 12;
    table[0x28] = 12;
    table[0x30] = 12;
    table[0x38] = 12;
    table[0xC0] = 20;
    table[0xC8] = 20;
    table[0xD0] = 20;
    table[0xD8] = 20;
    table[0xC2] = 16;
    table[0xCA] = 16;
    table[0xD2] = 16;
    table[0xDA] = 16;
    table[0xC4] = 24;
    table[0xCC] = 24;
    table[0xD4] = 24;
    table[0xDC] = 24;
    table
}

/// 8 cycles on a register, 16 on (HL), except BIT b,(HL) which only reads.
const fn extended_cycles() -> [u32; 256] {
    let mut table = [8; 256];
    let mut opcode = 0;
    while opcode < 256 {
        if opcode & 0x07 == 6 {
            table[opcode] = if opcode >> 6 == 1 { 12 } else { 16 };
        }
        opcode += 1;
    }
    table
}
