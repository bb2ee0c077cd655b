use crate::Direction;

/// Stepper motor driver.
///
/// This is the lowest level of motion: one call produces one pulse on the
/// step line, with the direction line set first. It has no notion of
/// position; see [crate::ConstantSpeedStepper] for that.
pub trait Stepper {
    /// Takes a single step in the supplied direction.
    ///
    /// # Parameters
    ///
    /// - `direction`: Direction in which to take the step.
    fn step(&mut self, direction: Direction);
}

#[cfg(test)]
pub use self::tests::TestStepper;
