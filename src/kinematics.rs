mod axis;
mod carriage;
mod constant_speed_stepper;
mod delay;
mod direction;
mod homing;
mod lead_screw;
mod limit_switch;
mod microstep;
mod pulse_generator;
mod stepper;
mod steps;

pub use axis::Axis;
pub use axis::AxisId;
pub use axis::Drive;
pub use axis::RelativeMove;
pub use carriage::Carriage;
pub use constant_speed_stepper::ConstantSpeedStepper;
pub use delay::Delay;
pub use direction::Direction;
pub use lead_screw::LeadScrew;
pub use limit_switch::LimitSwitch;
pub use limit_switch::LimitSwitchState;
pub use microstep::MicrostepDependent;
pub use microstep::MicrostepMode;
pub use microstep::MicrostepPins;
pub use microstep::MicrostepSelector;
pub use pulse_generator::PulseGenerator;
pub use stepper::Stepper;
pub use steps::Steps;

#[cfg(test)]
pub use delay::NoDelay;
#[cfg(test)]
pub use limit_switch::TestLimitSwitch;
#[cfg(test)]
pub use microstep::TestMicrostepPins;
#[cfg(test)]
pub use stepper::TestStepper;
