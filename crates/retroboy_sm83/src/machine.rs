mod bus;
mod serial;

use anyhow::{bail, Context, Result};

use crate::cpu::interrupts::{request_interrupt, Interrupt};
use crate::cpu::Cpu;
use crate::CYCLES_PER_FRAME;

pub use bus::MachineBus;

/// Size of the fixed cartridge ROM window (0x0000–0x7FFF).
pub const ROM_WINDOW_SIZE: usize = 0x8000;

/// Headless machine: the CPU core plus a flat bus with a serial port.
///
/// There is no PPU, APU or cartridge mapper. It is enough to run CPU test
/// ROMs that report over serial, and to drive the core from a host loop.
#[derive(Debug)]
pub struct Machine {
    pub cpu: Cpu,
    pub(crate) bus: MachineBus,
    cycles: u64,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MachineBus::new(),
            cycles: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus = MachineBus::new();
        self.cycles = 0;
    }

    /// Load a ROM image into the cartridge ROM window.
    ///
    /// Only unbanked (32 KiB) images fit the flat bus.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > ROM_WINDOW_SIZE {
            bail!(
                "ROM is {} bytes; only {} bytes fit without a mapper",
                rom.len(),
                ROM_WINDOW_SIZE
            );
        }
        self.bus
            .memory
            .load(0x0000, rom)
            .context("failed to map ROM")?;
        // PC is already at 0x0100 from the simulated boot state.
        Ok(())
    }

    /// Run a single CPU step and return its cost in T-cycles.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.cycles += cycles as u64;
        cycles
    }

    /// Step until at least `budget` T-cycles have elapsed or the CPU locks
    /// up. Returns the cycles actually run.
    pub fn run_cycles(&mut self, budget: u64) -> u64 {
        let start = self.cycles;
        while self.cycles - start < budget {
            if self.cpu.is_locked() {
                log::warn!(
                    "SM83 locked at PC=0x{:04X}; stopping after {} cycles",
                    self.cpu.regs.pc,
                    self.cycles - start
                );
                break;
            }
            self.step();
        }
        self.cycles - start
    }

    /// Run until an illegal opcode locks the CPU, giving up after
    /// `max_cycles`. Returns the cycles it took to lock, or `None` if the
    /// budget ran out first.
    pub fn run_until_locked(&mut self, max_cycles: u64) -> Option<u64> {
        let ran = self.run_cycles(max_cycles);
        self.cpu.is_locked().then_some(ran)
    }

    /// Advance by one DMG frame's worth of time (70224 T-cycles).
    pub fn step_frame(&mut self) -> u64 {
        self.run_cycles(CYCLES_PER_FRAME as u64)
    }

    /// Raise an interrupt line from outside the CPU, e.g. a host-side
    /// peripheral model. Takes effect on the next step.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        request_interrupt(&mut self.bus, interrupt);
    }

    /// Total T-cycles run since power-on or the last reset.
    #[inline]
    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }

    /// Bytes shifted out over the serial port so far.
    #[inline]
    pub fn serial_output(&self) -> &[u8] {
        &self.bus.serial.output
    }

    #[inline]
    pub fn bus(&self) -> &MachineBus {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut MachineBus {
        &mut self.bus
    }
}
