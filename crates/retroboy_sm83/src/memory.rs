use std::fmt;

use anyhow::{bail, Result};

use crate::cpu::Bus;

/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat 64 KiB memory with no mapping or IO side effects.
///
/// Every address, including DIV/TIMA/TMA/TAC and IF/IE, is a plain byte.
/// That makes it the reference bus for exercising the CPU core on its own.
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Copy `bytes` into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) -> Result<()> {
        let start = addr as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            bail!(
                "{} bytes at 0x{:04X} run past the end of the address space",
                bytes.len(),
                addr
            );
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMemory")
            .field("len", &self.data.len())
            .finish()
    }
}
