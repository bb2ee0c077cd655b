use core::mem;

use crate::protocol::frame::{Frame, PourCommand, SEPARATOR};
use crate::Error;
use crate::Slot;

/// Where the parser is within a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting a slot number.
    ///
    /// `after_separator` is set if the previous byte closed a command, in
    /// which case another separator ends the frame.
    WaitSlot { after_separator: bool },
    /// Expecting the volume for `slot`.
    WaitVolume { slot: u8 },
    /// Expecting the separator which closes a command.
    WaitSeparator { slot: u8, volume_ml: u8 },
}

/// Byte-at-a-time assembler of frames.
///
/// A frame on the wire is up to ten `[slot][volume][0xFF]` commands,
/// followed by one more `0xFF`. Bytes which cannot start a command are
/// skipped while waiting for a slot.
pub struct FrameParser {
    state: State,
    frame: Frame,
}
impl FrameParser {
    pub fn new() -> Self {
        Self {
            state: State::WaitSlot {
                after_separator: false,
            },
            frame: Frame::new(),
        }
    }

    /// Number of commands buffered in the frame being assembled.
    pub fn pending(&self) -> usize {
        self.frame.len()
    }

    /// Feeds one byte to the parser.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(frame))`: if the byte completed a frame. The parser is
    ///   reset and ready for the next one.
    /// - `Ok(None)`: if more bytes are needed.
    /// - `Err(Error::ProtocolViolation)`: if a command was not followed by a
    ///   separator. The partial frame, and the offending byte, are
    ///   discarded.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, Error> {
        match self.state {
            State::WaitSlot { after_separator } => {
                if byte == SEPARATOR {
                    if after_separator {
                        self.state = State::WaitSlot {
                            after_separator: false,
                        };
                        return Ok(Some(mem::take(&mut self.frame)));
                    }
                } else if Slot::new(byte).is_some() {
                    self.state = State::WaitVolume { slot: byte };
                } else {
                    // Noise between commands does not end the frame, but
                    // it does break up a double separator.
                    self.state = State::WaitSlot {
                        after_separator: false,
                    };
                }
                Ok(None)
            }
            State::WaitVolume { slot } => {
                self.state = State::WaitSeparator {
                    slot,
                    volume_ml: byte,
                };
                Ok(None)
            }
            State::WaitSeparator { slot, volume_ml } => {
                if byte == SEPARATOR {
                    // Past the tenth command, commands are dropped.
                    let _ = self.frame.push(PourCommand::new(slot, volume_ml));
                    self.state = State::WaitSlot {
                        after_separator: true,
                    };
                    Ok(None)
                } else {
                    self.reset();
                    Err(Error::ProtocolViolation)
                }
            }
        }
    }

    /// Discards any partial frame.
    pub fn reset(&mut self) {
        self.state = State::WaitSlot {
            after_separator: false,
        };
        self.frame.clear();
    }
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}
