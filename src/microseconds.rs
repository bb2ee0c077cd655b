/// Time in microseconds.
///
/// Used for the short, busy-waited delays between stepper pulses.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MicroSeconds(u32);
impl MicroSeconds {
    /// Creates a new `MicroSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }

    /// Interval between pulses for a given step rate.
    ///
    /// # Parameters
    ///
    /// - `steps_per_second`: Step rate; the sign is ignored.
    ///
    /// # Returns
    ///
    /// - `Some(interval)`: for a non-zero rate.
    /// - `None`: if the rate is zero (or not a number), meaning no stepping.
    pub fn pulse_interval(steps_per_second: f32) -> Option<Self> {
        let rate = micromath::F32Ext::abs(steps_per_second);
        if rate > 0.0 {
            Some(Self((1_000_000.0 / rate) as u32))
        } else {
            None
        }
    }
}
