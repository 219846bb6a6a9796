//! Timer / divider unit.
//!
//! DIV, TIMA, TMA and TAC live on the bus. [`Timer`] only owns the two
//! cycle accumulators that carry remainders from one step to the next, and
//! turns the cycles reported by each CPU step into register increments.
use crate::cpu::interrupts::{request_interrupt, Interrupt};
use crate::cpu::Bus;

/// Divider register (FF04).
pub const DIV_ADDR: u16 = 0xFF04;
/// Timer counter (FF05).
pub const TIMA_ADDR: u16 = 0xFF05;
/// Timer modulo (FF06).
pub const TMA_ADDR: u16 = 0xFF06;
/// Timer control (FF07).
pub const TAC_ADDR: u16 = 0xFF07;

/// T-cycles per DIV increment.
pub const DIV_PERIOD: u32 = 256;

/// TAC bit 2: counter enable.
const TAC_ENABLE: u8 = 0x04;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    /// Cycles not yet turned into DIV increments.
    div_cycles: u32,
    /// Cycles not yet turned into TIMA increments. Only grows while the
    /// counter is enabled.
    tima_cycles: u32,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn div_cycles(&self) -> u32 {
        self.div_cycles
    }

    #[inline]
    pub fn tima_cycles(&self) -> u32 {
        self.tima_cycles
    }

    /// T-cycles per TIMA increment for the clock select in TAC[1:0]:
    /// - 00 → 1024 (4096 Hz)
    /// - 01 → 16 (262144 Hz)
    /// - 10 → 64 (65536 Hz)
    /// - 11 → 256 (16384 Hz)
    #[inline]
    pub const fn counter_period(tac: u8) -> u32 {
        match tac & 0x03 {
            0x00 => 1024,
            0x01 => 16,
            0x02 => 64,
            _ => 256,
        }
    }

    /// Consume the cycles produced by one CPU step.
    ///
    /// A single step can span several periods (a 24-cycle CALL at the
    /// 16-cycle rate, or a long run of idle HALT steps), so every threshold
    /// crossing is applied individually and each one may overflow TIMA.
    pub fn advance<B: Bus + ?Sized>(&mut self, bus: &mut B, cycles: u32) {
        self.div_cycles += cycles;
        while self.div_cycles >= DIV_PERIOD {
            self.div_cycles -= DIV_PERIOD;
            let div = bus.read8(DIV_ADDR);
            bus.write8(DIV_ADDR, div.wrapping_add(1));
        }

        let tac = bus.read8(TAC_ADDR);
        if tac & TAC_ENABLE == 0 {
            return;
        }

        self.tima_cycles += cycles;
        let period = Self::counter_period(tac);
        while self.tima_cycles >= period {
            self.tima_cycles -= period;
            self.increment_tima(bus);
        }
    }

    /// Increment TIMA. Past 0xFF it reloads from TMA and requests INT $50.
    fn increment_tima<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let tima = bus.read8(TIMA_ADDR);
        match tima.checked_add(1) {
            Some(next) => bus.write8(TIMA_ADDR, next),
            None => {
                let tma = bus.read8(TMA_ADDR);
                bus.write8(TIMA_ADDR, tma);
                request_interrupt(bus, Interrupt::Timer);
            }
        }
    }
}
