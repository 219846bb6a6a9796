use super::super::{Bus, Cpu};
use super::{pending_interrupt, Interrupt, IF_ADDR, SERVICE_CYCLES};

impl Cpu {
    /// Service the highest-priority pending interrupt if IME is set.
    ///
    /// Returns `Some(cycles)` if a service routine was entered, or `None`
    /// otherwise.
    pub(in crate::cpu) fn handle_interrupts<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime {
            return None;
        }
        let interrupt = pending_interrupt(bus)?;
        Some(self.service_interrupt(bus, interrupt))
    }

    /// Enter the service routine for `interrupt`.
    ///
    /// Acknowledges the line in IF, clears IME, pushes the current PC and
    /// jumps to the interrupt's vector. The cost is always
    /// [`SERVICE_CYCLES`]. The engine only calls this with IME set; calling
    /// it directly bypasses that check.
    pub fn service_interrupt<B: Bus + ?Sized>(&mut self, bus: &mut B, interrupt: Interrupt) -> u32 {
        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !interrupt.mask());
        self.ime = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "SM83 interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
            iflags & 0x1F,
        );

        SERVICE_CYCLES
    }
}
