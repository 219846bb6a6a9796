use crate::timer::Timer;

use super::{Cpu, OpcodeTable, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in its DMG power-on state, dispatching through the
    /// built-in LR35902 instruction set.
    pub fn new() -> Self {
        Self::with_table(OpcodeTable::shared())
    }

    /// Create a CPU in its DMG power-on state that dispatches through
    /// `table` instead of the built-in instruction set.
    pub fn with_table(table: &'static OpcodeTable) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            branch_taken: false,
            locked: false,
            timer: Timer::default(),
            table,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to its power-on state. The dispatch table is kept.
    pub fn reset(&mut self) {
        self.halted = false;
        self.branch_taken = false;
        self.locked = false;
        self.timer = Timer::default();
        self.apply_dmg_boot_state();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code.
    fn apply_dmg_boot_state(&mut self) {
        self.regs = Registers::dmg();

        // IME is clear when control reaches 0x0100; the program enables
        // interrupts itself via EI/RETI.
        self.ime = false;
    }
}
