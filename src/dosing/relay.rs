/// A pump relay.
///
/// Energized means the pump is running.
pub trait Relay {
    fn set_energized(&mut self, energized: bool);
}

#[cfg(test)]
pub use self::test::TestRelay;
