#![cfg_attr(not(test), no_std)]

mod clock;
mod config;
mod controller;
mod dosing;
mod error;
mod grams;
mod kinematics;
mod log;
mod microseconds;
mod millimetres;
mod milliseconds;
mod protocol;
mod sequencer;
mod slot;

#[cfg(test)]
mod testing;

pub use clock::Clock;
pub use config::AxisConfig;
pub use config::DosingConfig;
pub use config::HomingConfig;
pub use config::MachineConfig;
pub use config::SequenceConfig;
pub use config::WeighingConfig;
pub use controller::Controller;
pub use controller::FrameHandler;
pub use dosing::Dispenser;
pub use dosing::LoadCell;
pub use dosing::PumpId;
pub use dosing::Relay;
pub use dosing::Scale;
pub use dosing::WeightCheck;
pub use dosing::PUMP_COUNT;
pub use error::Error;
pub use grams::Grams;
pub use kinematics::Axis;
pub use kinematics::AxisId;
pub use kinematics::Carriage;
pub use kinematics::ConstantSpeedStepper;
pub use kinematics::Delay;
pub use kinematics::Direction;
pub use kinematics::Drive;
pub use kinematics::LeadScrew;
pub use kinematics::LimitSwitch;
pub use kinematics::LimitSwitchState;
pub use kinematics::MicrostepDependent;
pub use kinematics::MicrostepMode;
pub use kinematics::MicrostepPins;
pub use kinematics::MicrostepSelector;
pub use kinematics::PulseGenerator;
pub use kinematics::RelativeMove;
pub use kinematics::Stepper;
pub use kinematics::Steps;
pub use microseconds::MicroSeconds;
pub use millimetres::Millimetres;
pub use milliseconds::MilliSeconds;
pub use protocol::Frame;
pub use protocol::FrameParser;
pub use protocol::PourCommand;
pub use protocol::MAX_COMMANDS;
pub use protocol::SEPARATOR;
pub use sequencer::Board;
pub use sequencer::Parts;
pub use sequencer::PourSequencer;
pub use slot::Slot;
pub use slot::SlotKind;
pub use slot::SlotTable;
pub use slot::SLOT_COUNT;

#[cfg(test)]
pub use clock::TestClock;
#[cfg(test)]
pub use dosing::TestLoadCell;
#[cfg(test)]
pub use dosing::TestRelay;
#[cfg(test)]
pub use kinematics::NoDelay;
#[cfg(test)]
pub use kinematics::TestLimitSwitch;
#[cfg(test)]
pub use kinematics::TestMicrostepPins;
#[cfg(test)]
pub use kinematics::TestStepper;
