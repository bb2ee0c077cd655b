use crate::MicroSeconds;

/// Abstraction for synchronous timing delays between stepper pulses.
pub trait Delay {
    /// Blocks for the specified number of microseconds before returning.
    ///
    /// # Parameters
    ///
    /// - `microseconds`: Number of microseconds to delay.
    fn delay_us(microseconds: MicroSeconds);
}

/// Delay which returns immediately, for running motion in tests.
#[cfg(test)]
pub struct NoDelay;
#[cfg(test)]
impl Delay for NoDelay {
    fn delay_us(_microseconds: MicroSeconds) {}
}
