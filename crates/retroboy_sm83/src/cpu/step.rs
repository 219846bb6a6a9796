use super::interrupts::pending_interrupt;
use super::{Bus, Cpu, CB_PREFIX};

/// Cost of one step spent halted with nothing to wake up for.
pub const HALT_IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Advance the machine by one step and return the T-cycles it took.
    ///
    /// A step is exactly one of: a halted idle period, an interrupt service
    /// entry, or one fetched instruction. The timer is then advanced by the
    /// cycles charged, so it may request a Timer interrupt that becomes
    /// visible on the next step.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let mut cycles = 0;

        if self.halted {
            // Any enabled and requested line wakes the CPU, even with IME
            // clear. In that case execution resumes without servicing.
            if pending_interrupt(bus).is_some() {
                self.halted = false;
                log::trace!("SM83 woke from HALT at PC=0x{:04X}", self.regs.pc);
            } else {
                cycles += HALT_IDLE_CYCLES;
            }
        }

        if !self.halted {
            cycles += match self.handle_interrupts(bus) {
                Some(service_cycles) => service_cycles,
                None => self.execute_next(bus),
            };
        }

        self.timer.advance(bus, cycles);
        cycles
    }

    /// Fetch, decode and execute the instruction at PC through the dispatch
    /// tables, returning its cost.
    fn execute_next(&mut self, bus: &mut dyn Bus) -> u32 {
        let table = self.table;
        let opcode = self.fetch8(bus);
        log::trace!(
            "SM83 PC=0x{:04X} OP=0x{:02X}",
            self.regs.pc.wrapping_sub(1),
            opcode
        );

        if opcode == CB_PREFIX {
            let opcode = self.fetch8(bus);
            (table.extended[opcode as usize])(self, bus, opcode);
            return table.extended_cycles[opcode as usize];
        }

        self.branch_taken = false;
        (table.primary[opcode as usize])(self, bus, opcode);
        if self.branch_taken {
            table.branch_cycles[opcode as usize]
        } else {
            table.base_cycles[opcode as usize]
        }
    }
}
