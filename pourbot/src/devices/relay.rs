use arduino_hal::port::{mode::Output, Pin};

/// Active-high pump relay input.
pub struct Relay {
    pin: Pin<Output>,
}
impl Relay {
    pub fn new(pin: Pin<Output>) -> Self {
        Self { pin }
    }
}

impl pourengine::Relay for Relay {
    fn set_energized(&mut self, energized: bool) {
        if energized {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
