//! Interrupt controller.
//!
//! IE and IF live on the bus; everything here reads and writes them through
//! [`Bus`] on every use. Priority is purely positional: when several lines
//! are pending the lowest bit index always wins.
mod service;

use bitflags::bitflags;

use super::Bus;

/// Interrupt-flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Interrupt-enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;

/// Cost of entering an interrupt service routine, in T-cycles.
pub const SERVICE_CYCLES: u32 = 20;

bitflags! {
    /// The five interrupt lines as they appear in IE and IF.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// Interrupt sources, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit index in IE/IF.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.index()
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.mask())
    }

    /// Service routine entry point: 0x40, 0x48, 0x50, 0x58, 0x60.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self.index() as u16) * 8
    }

    /// Highest-priority interrupt among `flags`, if any.
    pub fn highest(flags: InterruptFlags) -> Option<Interrupt> {
        if flags.is_empty() {
            return None;
        }
        Self::ALL
            .get(flags.bits().trailing_zeros() as usize)
            .copied()
    }
}

/// Raise `interrupt` by setting its bit in IF.
///
/// This is the entry point for peripherals (PPU, timer, serial, joypad).
/// Call it between CPU steps, never from inside one.
pub fn request_interrupt<B: Bus + ?Sized>(bus: &mut B, interrupt: Interrupt) {
    let iflags = bus.read8(IF_ADDR);
    bus.write8(IF_ADDR, iflags | interrupt.mask());
}

/// Lines that are both enabled in IE and requested in IF.
#[inline]
pub fn pending_flags<B: Bus + ?Sized>(bus: &mut B) -> InterruptFlags {
    let ie = bus.read8(IE_ADDR);
    let iflags = bus.read8(IF_ADDR);
    InterruptFlags::from_bits_truncate(ie & iflags)
}

/// Highest-priority interrupt that is enabled and requested, regardless of
/// IME. VBlank > LCD STAT > Timer > Serial > Joypad.
pub fn pending_interrupt<B: Bus + ?Sized>(bus: &mut B) -> Option<Interrupt> {
    Interrupt::highest(pending_flags(bus))
}
