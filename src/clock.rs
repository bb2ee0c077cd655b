use crate::MilliSeconds;

/// Millisecond time source and blocking wait.
///
/// Everything that waits for a human-scale duration (dispensing, settling,
/// pausing between cycles) or bounds an operation by time (homing) goes
/// through a `Clock`.
pub trait Clock {
    /// Current time on a free-running millisecond counter.
    fn now(&mut self) -> MilliSeconds;

    /// Blocks for `duration`.
    fn delay_ms(&mut self, duration: MilliSeconds);
}

#[cfg(test)]
pub use self::test::TestClock;
