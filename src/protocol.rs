mod frame;
mod parser;

pub use frame::Frame;
pub use frame::PourCommand;
pub use frame::MAX_COMMANDS;
pub use frame::SEPARATOR;
pub use parser::FrameParser;
