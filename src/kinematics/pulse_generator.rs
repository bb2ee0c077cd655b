use crate::Steps;

/// Step-pulse generator for one axis.
///
/// The generator keeps its own step counter and a target. Motion only ever
/// happens inside [PulseGenerator::run] and [PulseGenerator::run_speed], one
/// step per call at most, so the caller gets control back between steps.
pub trait PulseGenerator {
    /// Sets an absolute target position, in steps. Does not move.
    fn move_to(&mut self, target: Steps);

    /// Advances towards the target by at most one step.
    ///
    /// # Returns
    ///
    /// - `true`: if there is still distance to go after this call.
    /// - `false`: if the target has been reached.
    fn run(&mut self) -> bool;

    /// Sets the rate used by [PulseGenerator::run_speed], in steps per
    /// second. The sign gives the direction.
    fn set_speed(&mut self, steps_per_second: f32);

    /// Takes one step at the rate set by [PulseGenerator::set_speed],
    /// ignoring the target.
    ///
    /// # Returns
    ///
    /// - `true`: if a step was taken.
    /// - `false`: if the speed is zero.
    fn run_speed(&mut self) -> bool;

    /// Signed number of steps from the current position to the target.
    fn distance_to_go(&self) -> Steps;

    /// Current position, in steps.
    fn current_position(&self) -> Steps;

    /// Redefines the current position without moving.
    ///
    /// The target is set to the same position and the speed to zero, so the
    /// generator is left idle.
    fn set_current_position(&mut self, position: Steps);

    /// Returns `true` if there is no outstanding distance to go.
    fn is_idle(&self) -> bool {
        self.distance_to_go().is_zero()
    }
}
