use arduino_hal::{
    delay_us,
    port::{mode::Output, Pin, PinOps},
};
use pourengine::{Direction, MicroSeconds};

/// Step/direction stepper driver.
///
/// # Type Parameters
///
/// - `P`: step pin
/// - `D`: direction pin
pub struct Stepper<P, D> {
    pin_step: Pin<Output, P>,
    pin_direction: Pin<Output, D>,
    /// Direction currently driven on the direction pin.
    direction: Direction,
    /// Width of the high and low halves of a step pulse.
    pulse_width: MicroSeconds,
    /// Setup and hold time around a direction change.
    direction_settle: MicroSeconds,
}

impl<P: PinOps, D: PinOps> Stepper<P, D> {
    /// Creates a new `Stepper`.
    ///
    /// # Parameters
    ///
    /// - `pin_step`: Pin to use for step pulses.
    /// - `pin_direction`: Pin to use for the direction signal.
    /// - `pulse_width`: Width of each half of a step pulse.
    /// - `direction_settle`: Delay either side of a direction change.
    pub fn new(
        pin_step: Pin<Output, P>,
        pin_direction: Pin<Output, D>,
        pulse_width: MicroSeconds,
        direction_settle: MicroSeconds,
    ) -> Self {
        let direction = Direction::Negative;
        let mut stepper = Self {
            pin_step,
            pin_direction,
            direction,
            pulse_width,
            direction_settle,
        };

        // The pin state is unknown at power-on.
        stepper.force_set_direction(direction);

        stepper
    }

    fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction {
            self.force_set_direction(direction);
        }
    }

    fn force_set_direction(&mut self, direction: Direction) {
        delay_us(self.direction_settle.get_value());
        match direction {
            Direction::Negative => self.pin_direction.set_low(),
            Direction::Positive => self.pin_direction.set_high(),
        }
        self.direction = direction;
        delay_us(self.direction_settle.get_value());
    }
}

impl<P: PinOps, D: PinOps> pourengine::Stepper for Stepper<P, D> {
    fn step(&mut self, direction: Direction) {
        self.set_direction(direction);
        self.pin_step.set_high();
        delay_us(self.pulse_width.get_value());
        self.pin_step.set_low();
        delay_us(self.pulse_width.get_value());
    }
}
