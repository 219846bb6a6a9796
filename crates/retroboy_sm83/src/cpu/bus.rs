/// Abstraction over the Game Boy bus (memory and IO).
///
/// Both accesses are total over the 16-bit address space. The CPU core reads
/// and writes the timer and interrupt registers (DIV, TIMA, TMA, TAC, IF, IE)
/// exclusively through this trait and never caches them, so whatever the
/// implementation does on those addresses is what the core observes.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

