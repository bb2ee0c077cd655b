//! Machine configuration.
//!
//! Everything here is fixed at build time. [MachineConfig::default] holds
//! the values for the production carriage.

use crate::Direction;
use crate::LeadScrew;
use crate::MicrostepMode;
use crate::MilliSeconds;
use crate::Millimetres;
use crate::SlotTable;

/// Full steps per revolution of every motor on the carriage.
const FULL_STEPS_PER_REVOLUTION: u32 = 200;

/// Configuration of the whole machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineConfig {
    pub x: AxisConfig,
    pub z: AxisConfig,
    /// Mode the microstep select lines are driven to at power-on.
    pub initial_mode: MicrostepMode,
    pub slots: SlotTable,
    pub sequence: SequenceConfig,
    pub dosing: DosingConfig,
    pub weighing: WeighingConfig,
}
impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            x: AxisConfig {
                screw: LeadScrew::new(
                    FULL_STEPS_PER_REVOLUTION,
                    Millimetres::new(4.0),
                ),
                inverted: true,
                mode: MicrostepMode::Quarter,
                max_speed: 2500.0,
                homing: HomingConfig {
                    speed: 800.0,
                    direction: Direction::Positive,
                    timeout: MilliSeconds::new(200_000),
                },
            },
            z: AxisConfig {
                screw: LeadScrew::new(
                    FULL_STEPS_PER_REVOLUTION,
                    Millimetres::new(2.0),
                ),
                inverted: true,
                mode: MicrostepMode::Half,
                max_speed: 800.0,
                homing: HomingConfig {
                    speed: 400.0,
                    direction: Direction::Positive,
                    timeout: MilliSeconds::new(200_000),
                },
            },
            initial_mode: MicrostepMode::Quarter,
            slots: SlotTable::default(),
            sequence: SequenceConfig::default(),
            dosing: DosingConfig::default(),
            weighing: WeighingConfig::default(),
        }
    }
}

/// Configuration of one linear axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub screw: LeadScrew,
    /// If `true`, internal coordinates are the negation of physical ones.
    pub inverted: bool,
    /// Microstep mode the axis moves and homes in.
    pub mode: MicrostepMode,
    /// Speed of targeted moves, in steps per second.
    pub max_speed: f32,
    pub homing: HomingConfig,
}

/// How an axis finds its home switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingConfig {
    /// Steps per second.
    pub speed: f32,
    /// Direction of travel, in steps, towards the home switch.
    pub direction: Direction,
    pub timeout: MilliSeconds,
}

/// Geometry and timing of a pour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceConfig {
    /// How far Z rises to trigger one cycle of a cycled dispenser.
    pub lift_height: Millimetres,
    /// Volume delivered by one cycle.
    pub cycle_volume_ml: u8,
    /// Pause between consecutive cycles.
    pub cycle_pause: MilliSeconds,
    /// How far Z rises to place the cup under a pump outlet.
    pub pump_clearance: Millimetres,
}
impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            lift_height: Millimetres::new(35.0),
            cycle_volume_ml: 35,
            cycle_pause: MilliSeconds::new(5000),
            pump_clearance: Millimetres::new(20.0),
        }
    }
}

/// Pump flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DosingConfig {
    pub flow_ml_per_minute: u32,
}
impl DosingConfig {
    /// How long a relay is held per millilitre.
    pub fn ms_per_ml(&self) -> MilliSeconds {
        MilliSeconds::new(60_000 / self.flow_ml_per_minute.max(1))
    }
}
impl Default for DosingConfig {
    fn default() -> Self {
        Self {
            flow_ml_per_minute: 2000,
        }
    }
}

/// Load cell and weight check settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeighingConfig {
    /// Raw counts per gram of the load cell amplifier.
    pub calibration: f32,
    /// Number of readings averaged per tare or measurement.
    pub samples: u8,
    /// Wait after dispensing before weighing.
    pub settle_time: MilliSeconds,
    /// Largest deficit, in grams, accepted without a top-up.
    pub tolerance: f32,
    /// Smallest top-up worth dispensing.
    pub min_topup_ml: u8,
}
impl Default for WeighingConfig {
    fn default() -> Self {
        Self {
            calibration: -928.29,
            samples: 10,
            settle_time: MilliSeconds::new(800),
            tolerance: 5.0,
            min_topup_ml: 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ms_per_ml() {
        assert_eq!(MilliSeconds::new(30), DosingConfig::default().ms_per_ml());
        let stalled = DosingConfig {
            flow_ml_per_minute: 0,
        };
        assert_eq!(MilliSeconds::new(60_000), stalled.ms_per_ml());
    }

    #[test]
    fn test_axis_modes() {
        let config = MachineConfig::default();
        assert_eq!(MicrostepMode::Quarter, config.x.mode);
        assert_eq!(MicrostepMode::Half, config.z.mode);
        assert_eq!(MicrostepMode::Quarter, config.initial_mode);
    }
}
