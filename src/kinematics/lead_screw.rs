use micromath::F32Ext;

use crate::MicrostepMode;
use crate::Millimetres;
use crate::Steps;

/// Conversions for a lead-screw driven linear axis.
///
/// This converts:
/// - Millimetres to steps.
/// - Steps to millimetres.
///
/// Both depend on the microstep mode the driver is in at the time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadScrew {
    full_steps_per_revolution: u32,
    pitch: Millimetres,
}

impl LeadScrew {
    /// Creates a new lead screw.
    ///
    /// # Parameters
    ///
    /// - `full_steps_per_revolution`: Full steps of the motor per turn.
    /// - `pitch`: Carriage travel per turn of the screw.
    pub const fn new(full_steps_per_revolution: u32, pitch: Millimetres) -> Self {
        Self {
            full_steps_per_revolution,
            pitch,
        }
    }

    /// Number of (micro)steps per millimetre of travel in a given mode.
    pub fn steps_per_mm(&self, mode: MicrostepMode) -> f32 {
        (self.full_steps_per_revolution * mode.multiplier()) as f32
            / self.pitch.get_value()
    }

    /// Converts a value in [Millimetres] to a value in [Steps], rounding to
    /// the nearest step.
    pub fn to_steps(&self, mm: Millimetres, mode: MicrostepMode) -> Steps {
        Steps::new(
            F32Ext::round(mm.get_value() * self.steps_per_mm(mode)) as i32,
        )
    }

    /// Converts a value in [Steps] to a value in [Millimetres].
    pub fn to_millimetres(
        &self,
        steps: Steps,
        mode: MicrostepMode,
    ) -> Millimetres {
        Millimetres::new(steps.get_value() as f32 / self.steps_per_mm(mode))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::millimetres::test::millimetres;
    use proptest::prelude::*;

    const X_SCREW: LeadScrew = LeadScrew::new(200, Millimetres::new(4.0));
    const Z_SCREW: LeadScrew = LeadScrew::new(200, Millimetres::new(2.0));

    fn mode() -> impl Strategy<Value = MicrostepMode> {
        prop_oneof![Just(MicrostepMode::Half), Just(MicrostepMode::Quarter)]
    }

    #[test]
    fn test_steps_per_mm() {
        assert_eq!(100.0, X_SCREW.steps_per_mm(MicrostepMode::Half));
        assert_eq!(200.0, X_SCREW.steps_per_mm(MicrostepMode::Quarter));
        assert_eq!(200.0, Z_SCREW.steps_per_mm(MicrostepMode::Half));
        assert_eq!(400.0, Z_SCREW.steps_per_mm(MicrostepMode::Quarter));
    }

    #[test]
    fn test_to_steps() {
        let half = MicrostepMode::Half;
        let quarter = MicrostepMode::Quarter;
        let mm = Millimetres::new;
        assert_eq!(Steps::new(18000), X_SCREW.to_steps(mm(90.0), quarter));
        assert_eq!(Steps::new(-68000), X_SCREW.to_steps(mm(-340.0), quarter));
        assert_eq!(Steps::new(7000), Z_SCREW.to_steps(mm(35.0), half));
        assert_eq!(Steps::zero(), Z_SCREW.to_steps(Millimetres::zero(), half));
    }

    #[test]
    fn test_to_steps_rounds_to_nearest() {
        let half = MicrostepMode::Half;
        let mm = Millimetres::new;
        // 100 steps/mm: 0.004mm is 0.4 steps, 0.006mm is 0.6 steps.
        assert_eq!(Steps::new(0), X_SCREW.to_steps(mm(0.004), half));
        assert_eq!(Steps::new(1), X_SCREW.to_steps(mm(0.006), half));
        assert_eq!(Steps::new(-1), X_SCREW.to_steps(mm(-0.006), half));
    }

    proptest! {
        #[test]
        fn test_roundtrip(mm in millimetres(), mode in mode()) {
            for screw in [X_SCREW, Z_SCREW] {
                let steps = screw.to_steps(mm, mode);
                let back = screw.to_millimetres(steps, mode);

                // Within half a step of the original value.
                let tolerance = 0.5 / screw.steps_per_mm(mode) + 1e-3;
                assert!((back.get_value() - mm.get_value()).abs() <= tolerance);
            }
        }
    }

    proptest! {
        #[test]
        fn test_roundtrip_whole_millimetres(
            whole in -1000i32..1000,
            mode in mode()
        ) {
            for screw in [X_SCREW, Z_SCREW] {
                let mm = Millimetres::new(whole as f32);
                let back = screw.to_millimetres(screw.to_steps(mm, mode), mode);
                assert_eq!(mm.get_value().round(), back.get_value().round());
            }
        }
    }
}
