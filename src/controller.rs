use crate::Frame;
use crate::FrameParser;

/// Something which executes completed frames.
pub trait FrameHandler {
    /// Executes a frame. Returns once every command has been carried out.
    fn handle_frame(&mut self, frame: &Frame);
}

/// Feeds received bytes to a [FrameParser] and hands each completed frame
/// to a [FrameHandler].
///
/// Malformed frames are dropped without any reply; the host notices the
/// missing acknowledgment and resends.
pub struct Controller<H> {
    parser: FrameParser,
    handler: H,
}
impl<H: FrameHandler> Controller<H> {
    pub fn new(handler: H) -> Self {
        Self {
            parser: FrameParser::new(),
            handler,
        }
    }

    /// Processes one received byte.
    ///
    /// If the byte completes a frame, this blocks until the handler has
    /// executed it, and returns `true`.
    pub fn push_byte(&mut self, byte: u8) -> bool {
        match self.parser.push(byte) {
            Ok(Some(frame)) => {
                self.handler.handle_frame(&frame);
                true
            }
            Ok(None) | Err(_) => false,
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
