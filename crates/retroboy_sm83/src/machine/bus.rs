use crate::cpu::interrupts::{request_interrupt, Interrupt, IE_ADDR, IF_ADDR};
use crate::cpu::Bus;
use crate::memory::FlatMemory;
use crate::timer::{DIV_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR};

use super::serial::Serial;

/// Serial transfer data (FF01).
pub const SB_ADDR: u16 = 0xFF01;
/// Serial transfer control (FF02).
pub const SC_ADDR: u16 = 0xFF02;

/// Bus used by [`Machine`](super::Machine): flat memory with SB/SC routed to
/// a capturing serial port. Everything else, timer and interrupt registers
/// included, is plain memory driven by the CPU core.
#[derive(Debug)]
pub struct MachineBus {
    pub(crate) memory: FlatMemory,
    pub(crate) serial: Serial,
}

impl MachineBus {
    pub(super) fn new() -> Self {
        let mut bus = Self {
            memory: FlatMemory::new(),
            serial: Serial::default(),
        };
        bus.apply_dmg_initial_io_state();
        bus
    }

    /// Initialize I/O registers to the DMG state at PC=0x0100.
    fn apply_dmg_initial_io_state(&mut self) {
        // Joypad: no group selected.
        self.memory.write8(0xFF00, 0xCF);

        self.serial.sb = 0x00;
        self.serial.sc = 0x7E;

        self.memory.write8(DIV_ADDR, 0xAB);
        self.memory.write8(TIMA_ADDR, 0x00);
        self.memory.write8(TMA_ADDR, 0x00);
        self.memory.write8(TAC_ADDR, 0xF8);

        // IF's upper 3 bits read as 1; VBlank happens to be requested at
        // hand-off.
        self.memory.write8(IF_ADDR, 0xE1);
        self.memory.write8(IE_ADDR, 0x00);

        self.memory.write8(0xFF40, 0x91); // LCDC
        self.memory.write8(0xFF41, 0x85); // STAT
        self.memory.write8(0xFF47, 0xFC); // BGP
    }

    #[inline]
    pub fn memory(&self) -> &FlatMemory {
        &self.memory
    }

    #[inline]
    pub fn memory_mut(&mut self) -> &mut FlatMemory {
        &mut self.memory
    }
}

impl Bus for MachineBus {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            SB_ADDR => self.serial.sb,
            SC_ADDR => self.serial.read_sc(),
            _ => self.memory.read8(addr),
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            SB_ADDR => self.serial.write_sb(value),
            SC_ADDR => {
                if self.serial.write_sc(value) {
                    request_interrupt(&mut self.memory, Interrupt::Serial);
                }
            }
            _ => self.memory.write8(addr, value),
        }
    }
}
