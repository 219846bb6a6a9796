pub mod cpu;
pub mod machine;
pub mod memory;
pub mod timer;

pub use cpu::interrupts::{pending_interrupt, request_interrupt, Interrupt, InterruptFlags};
pub use cpu::{Bus, Cpu, Flag, OpcodeTable, Registers};
pub use machine::Machine;
pub use memory::FlatMemory;
pub use timer::Timer;

/// T-cycles per DMG frame (154 lines of 456 dots).
pub const CYCLES_PER_FRAME: u32 = 70_224;
/// DMG CPU clock in T-cycles per second.
pub const CLOCK_HZ: u32 = 4_194_304;
