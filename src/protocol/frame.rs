use ufmt_macros::uDebug;

use crate::Slot;

/// Byte which ends each command, and (doubled) the whole frame.
pub const SEPARATOR: u8 = 0xFF;

/// Most commands a frame can carry. Any more are dropped.
pub const MAX_COMMANDS: usize = 10;

/// One pour: a volume from a slot.
///
/// The slot number is kept raw; commands for slots that do not exist are
/// skipped when the frame is executed.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub struct PourCommand {
    pub slot: u8,
    pub volume_ml: u8,
}
impl PourCommand {
    pub const fn new(slot: u8, volume_ml: u8) -> Self {
        Self { slot, volume_ml }
    }

    /// The slot, if it exists.
    pub fn slot(&self) -> Option<Slot> {
        Slot::new(self.slot)
    }
}

/// An ordered list of pours, executed first to last.
pub type Frame = heapless::Vec<PourCommand, MAX_COMMANDS>;
