/// Very small serial interface modelled via SB/SC.
///
/// We only care about test ROMs writing bytes over the serial port. When a
/// transfer is started on SC with the internal clock selected (bits 7 and 0
/// set), the current SB value is captured immediately and the transfer is
/// reported as complete.
#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Serial {
    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// Returns `true` when the write completed a transfer, in which case the
    /// caller raises the Serial interrupt.
    pub(super) fn write_sc(&mut self, value: u8) -> bool {
        self.sc = value;
        if (self.sc & 0x81) != 0x81 {
            return false;
        }
        self.output.push(self.sb);
        // Clear transfer start bit.
        self.sc &= !0x80;
        true
    }

    /// Unused SC bits read back as 1 on DMG.
    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }
}
