mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
pub mod interrupts;
mod regs;
mod step;
mod table;

pub use bus::Bus;
pub use regs::{Flag, Registers};
pub use step::HALT_IDLE_CYCLES;
pub use table::{Instruction, OpcodeTable, ILLEGAL_OPCODES};

use crate::timer::Timer;

/// Escape byte that routes the following opcode through the extended table.
pub const CB_PREFIX: u8 = 0xCB;

/// Game Boy CPU core.
///
/// Owns the register file, the control flags (`ime`, `halted`,
/// `branch_taken`) and the timer accumulators. Memory, IO registers and the
/// IE/IF pair live behind the [`Bus`] passed to [`Cpu::step`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    /// Set by conditional control-flow instructions when the branch was
    /// taken. Selects the branch cost table for the current opcode; cleared
    /// before every primary dispatch.
    pub branch_taken: bool,
    /// Set once an illegal opcode has hard-locked the CPU. The illegal entry
    /// keeps re-executing itself, so this only tracks the condition for
    /// callers and for one-shot logging.
    locked: bool,
    timer: Timer,
    table: &'static OpcodeTable,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag.mask();
        } else {
            self.regs.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Whether an illegal opcode has locked the CPU.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    #[inline]
    pub fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }

    #[inline]
    pub fn table(&self) -> &'static OpcodeTable {
        self.table
    }

    /// Swap the dispatch tables used by subsequent steps.
    pub fn set_table(&mut self, table: &'static OpcodeTable) {
        self.table = table;
    }
}
