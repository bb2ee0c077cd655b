use arduino_hal::{
    port::{mode::Output, Pin},
    prelude::*,
};
use embedded_hal::digital::{OutputPin, PinState};

/// The `MS0`, `MS1` and `MS2` lines, shared by both stepper drivers.
pub struct MicrostepPins {
    pins: [Pin<Output>; 3],
}
impl MicrostepPins {
    pub fn new(ms0: Pin<Output>, ms1: Pin<Output>, ms2: Pin<Output>) -> Self {
        Self {
            pins: [ms0, ms1, ms2],
        }
    }
}

impl pourengine::MicrostepPins for MicrostepPins {
    fn write_levels(&mut self, levels: [bool; 3]) {
        for (pin, level) in self.pins.iter_mut().zip(levels) {
            pin.set_state(PinState::from(level)).unwrap_infallible();
        }
    }
}
