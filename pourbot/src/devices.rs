mod clock;
mod delay;
mod hx711;
mod limitswitch;
mod microstep_pins;
mod relay;
mod stepper;

pub use clock::Clock;
pub use delay::Delay;
pub use hx711::Hx711;
pub use limitswitch::LimitSwitch;
pub use microstep_pins::MicrostepPins;
pub use relay::Relay;
pub use stepper::Stepper;
