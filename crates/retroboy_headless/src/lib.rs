use std::path::PathBuf;

use anyhow::{Context, Result};
use typed_builder::TypedBuilder;

use retroboy_sm83::{Machine, Registers, CLOCK_HZ};

/// Default budget: about ten emulated seconds.
pub const DEFAULT_CYCLES: u64 = CLOCK_HZ as u64 * 10;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub rom: PathBuf,
    #[builder(default = DEFAULT_CYCLES)]
    pub cycles: u64,
    #[builder(default = true)]
    pub print_serial: bool,
}

/// What a headless run left behind.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub cycles: u64,
    pub serial: Vec<u8>,
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    pub locked: bool,
}

impl RunSummary {
    /// Serial output as text, with non-UTF-8 bytes replaced.
    pub fn serial_text(&self) -> String {
        String::from_utf8_lossy(&self.serial).into_owned()
    }

    pub fn register_dump(&self) -> String {
        let r = &self.regs;
        format!(
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} IME={} HALT={} LOCKED={}",
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.sp,
            r.pc,
            self.ime as u8,
            self.halted as u8,
            self.locked as u8
        )
    }
}

/// Run a ROM image that is already in memory.
pub fn run_rom(rom: &[u8], cycles: u64) -> Result<RunSummary> {
    let mut machine = Machine::new();
    machine.load_rom(rom)?;

    let ran = machine.run_cycles(cycles);
    log::info!("Ran {} T-cycles ({} requested)", ran, cycles);

    Ok(RunSummary {
        cycles: ran,
        serial: machine.serial_output().to_vec(),
        regs: machine.cpu.regs,
        ime: machine.cpu.ime,
        halted: machine.cpu.halted,
        locked: machine.cpu.is_locked(),
    })
}

/// Load the ROM named by `config`, run it, and report serial output and the
/// final register state on stdout.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    log::info!("Playing ROM path: '{}'", config.rom.display());
    let rom = std::fs::read(&config.rom)
        .with_context(|| format!("failed to read ROM '{}'", config.rom.display()))?;

    let summary = run_rom(&rom, config.cycles)
        .with_context(|| format!("failed to run ROM '{}'", config.rom.display()))?;

    if config.print_serial && !summary.serial.is_empty() {
        println!("{}", summary.serial_text());
    }
    println!("{}", summary.register_dump());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with_entry(program: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
        rom
    }

    #[test]
    fn config_defaults() {
        let config = RunConfig::builder().rom("test.gb").build();
        assert_eq!(config.cycles, DEFAULT_CYCLES);
        assert!(config.print_serial);
        assert_eq!(config.rom, PathBuf::from("test.gb"));
    }

    #[test]
    fn run_rom_collects_serial_output() {
        #[rustfmt::skip]
        let rom = rom_with_entry(&[
            0x3E, b'h',  // LD A,'h'
            0xE0, 0x01,  // LDH (SB),A
            0x3E, 0x81,  // LD A,0x81
            0xE0, 0x02,  // LDH (SC),A
            0x76,        // HALT
        ]);
        let summary = run_rom(&rom, 1_000).unwrap();
        assert_eq!(summary.serial_text(), "h");
        assert!(summary.halted);
        assert!(!summary.locked);
        assert!(summary.cycles >= 1_000);
    }

    #[test]
    fn locked_run_is_reported() {
        let summary = run_rom(&rom_with_entry(&[0xFC]), 1_000).unwrap();
        assert!(summary.locked);
        assert_eq!(summary.cycles, 4);
        assert!(summary.register_dump().contains("PC=0100"));
        assert!(summary.register_dump().contains("LOCKED=1"));
    }

    #[test]
    fn missing_rom_file_is_an_error() {
        let config = RunConfig::builder()
            .rom("/nonexistent/retroboy_headless.gb")
            .print_serial(false)
            .build();
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read ROM"));
    }

    #[test]
    fn oversized_rom_is_an_error() {
        assert!(run_rom(&vec![0u8; 0x8001], 100).is_err());
    }
}
