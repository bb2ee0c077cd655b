use core::marker::PhantomData;

use crate::Delay;
use crate::Direction;
use crate::MicroSeconds;
use crate::PulseGenerator;
use crate::Stepper;
use crate::Steps;

/// Pulse generator which tracks its own position and steps at a constant
/// rate.
///
/// A `ConstantSpeedStepper` executes its stepping commands by wrapping some
/// underlying [Stepper], and paces them with a [Delay]. Targeted moves run
/// at a fixed maximum speed with no acceleration ramp.
///
/// # Type Parameters
///
/// - `S`: the underlying [Stepper].
/// - `D`: the [Delay] used between pulses.
pub struct ConstantSpeedStepper<S, D> {
    stepper: S,
    position: Steps,
    target: Steps,
    move_interval: MicroSeconds,
    speed_interval: Option<(Direction, MicroSeconds)>,
    _delay: PhantomData<D>,
}
impl<S: Stepper, D: Delay> ConstantSpeedStepper<S, D> {
    /// Creates a new constant-speed stepper.
    ///
    /// The new stepper has an initial position and target of zero.
    ///
    /// # Parameters
    ///
    /// - `stepper`: The underlying stepper to use.
    /// - `max_speed`: Rate for targeted moves, in steps per second.
    pub fn new(stepper: S, max_speed: f32) -> Self {
        Self {
            stepper,
            position: Steps::zero(),
            target: Steps::zero(),
            move_interval: MicroSeconds::pulse_interval(max_speed)
                .unwrap_or(MicroSeconds::new(0)),
            speed_interval: None,
            _delay: PhantomData,
        }
    }

    /// Take a step.
    ///
    /// This takes a step with the underlying stepper provided that doing so
    /// would not overflow the step count.
    ///
    /// # Returns
    ///
    /// - `true`: if the step was taken.
    /// - `false`: if no step could be taken without overflowing.
    fn step(&mut self, direction: Direction, interval: MicroSeconds) -> bool {
        let next_position_option = match direction {
            Direction::Negative => self.position.dec(),
            Direction::Positive => self.position.inc(),
        };

        match next_position_option {
            Some(next_position) => {
                self.stepper.step(direction);
                self.position = next_position;
                D::delay_us(interval);
                true
            }
            None => false,
        }
    }
}

impl<S: Stepper, D: Delay> PulseGenerator for ConstantSpeedStepper<S, D> {
    fn move_to(&mut self, target: Steps) {
        self.target = target;
    }

    fn run(&mut self) -> bool {
        if let Some(direction) = Direction::towards(self.position, self.target)
        {
            // The target is itself a valid position, so this cannot overflow.
            self.step(direction, self.move_interval);
        }
        !self.is_idle()
    }

    fn set_speed(&mut self, steps_per_second: f32) {
        let direction = if steps_per_second < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        };
        self.speed_interval = MicroSeconds::pulse_interval(steps_per_second)
            .map(|interval| (direction, interval));
    }

    fn run_speed(&mut self) -> bool {
        let (direction, interval) = match self.speed_interval {
            None => return false,
            Some(speed) => speed,
        };
        let stepped = self.step(direction, interval);
        // Continuous stepping never leaves a target behind.
        self.target = self.position;
        stepped
    }

    fn distance_to_go(&self) -> Steps {
        self.target - self.position
    }

    fn current_position(&self) -> Steps {
        self.position
    }

    fn set_current_position(&mut self, position: Steps) {
        self.position = position;
        self.target = position;
        self.speed_interval = None;
    }
}
