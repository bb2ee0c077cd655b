mod dispenser;
mod load_cell;
mod relay;
mod weighing;

pub use dispenser::Dispenser;
pub use dispenser::PumpId;
pub use dispenser::PUMP_COUNT;
pub use load_cell::LoadCell;
pub use relay::Relay;
pub use weighing::Scale;
pub use weighing::WeightCheck;

#[cfg(test)]
pub use load_cell::TestLoadCell;
#[cfg(test)]
pub use relay::TestRelay;
