use pourengine::MicroSeconds;

/// Busy-wait delay on the Uno, used to pace step pulses.
pub struct Delay;

impl pourengine::Delay for Delay {
    fn delay_us(microseconds: MicroSeconds) {
        arduino_hal::delay_us(microseconds.get_value());
    }
}
