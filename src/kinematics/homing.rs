use crate::Axis;
use crate::Clock;
use crate::Error;
use crate::LimitSwitch;
use crate::PulseGenerator;

impl<P: PulseGenerator, L: LimitSwitch> Axis<P, L> {
    /// Drives the axis onto its home switch and zeroes it there.
    ///
    /// The axis runs at its homing speed, in its homing direction, until the
    /// switch engages or the homing timeout elapses. The drivers must
    /// already be in [Axis::required_mode].
    ///
    /// # Returns
    ///
    /// - `Ok(())`: if the switch engaged; the position is now zero.
    /// - `Err(Error::HomingTimeout)`: if it did not. The position in
    ///   millimetres is unchanged, and the step count still includes the
    ///   steps taken while searching.
    pub fn home<C: Clock>(&mut self, clock: &mut C) -> Result<(), Error> {
        let homing = self.config().homing;
        let start = clock.now();
        self.generator_mut()
            .set_speed(homing.speed * homing.direction.signum());

        while !self.at_home() {
            if clock.now().since(start) > homing.timeout {
                self.generator_mut().set_speed(0.0);
                return Err(Error::HomingTimeout(self.id()));
            }
            self.generator_mut().run_speed();
        }

        self.generator_mut().set_speed(0.0);
        self.zero();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kinematics::axis::test::{test_axis, TestAxis};
    use crate::testing::EventLog;
    use crate::{
        AxisConfig, AxisId, MachineConfig, MilliSeconds, Millimetres, Steps,
        TestClock, TestStepper,
    };

    fn short_timeout(mut config: AxisConfig) -> AxisConfig {
        config.homing.timeout = MilliSeconds::new(50);
        config
    }

    fn x_axis(stepper: &TestStepper, switch_at: i128) -> TestAxis {
        test_axis(
            AxisId::X,
            short_timeout(MachineConfig::default().x),
            stepper,
            switch_at,
        )
    }

    #[test]
    fn test_home_finds_switch() {
        let events = EventLog::new();
        let mut clock = TestClock::new(&events);
        let stepper = TestStepper::new(-30);
        let mut axis =
            test_axis(AxisId::X, MachineConfig::default().x, &stepper, 0);
        axis.move_to_physical(Millimetres::new(90.0));

        assert_eq!(Ok(()), axis.home(&mut clock));
        assert_eq!(0, stepper.get_position());
        assert_eq!(18030, stepper.get_travel() - 18000);
        assert_eq!(Millimetres::zero(), axis.position());
        assert_eq!(Steps::zero(), axis.generator().current_position());
        assert!(axis.generator().is_idle());
    }

    #[test]
    fn test_home_already_there() {
        let events = EventLog::new();
        let mut clock = TestClock::new(&events);
        let stepper = TestStepper::new(0);
        let mut axis = x_axis(&stepper, 0);

        assert_eq!(Ok(()), axis.home(&mut clock));
        assert_eq!(0, stepper.get_travel());
    }

    #[test]
    fn test_home_timeout() {
        let events = EventLog::new();
        let mut clock = TestClock::new(&events);
        let stepper = TestStepper::new(0);
        let mut axis = x_axis(&stepper, i128::MAX);
        axis.move_to_physical(Millimetres::new(140.0));
        let travel = stepper.get_travel();

        assert_eq!(
            Err(Error::HomingTimeout(AxisId::X)),
            axis.home(&mut clock)
        );
        // It tried, for about as many steps as there were milliseconds.
        let tried = (stepper.get_travel() - travel) as i32;
        assert!(tried > 40 && tried <= 50, "tried {} steps", tried);
        assert_eq!(Millimetres::new(-140.0), axis.position());
        assert_eq!(
            Steps::new(-28000 + tried),
            axis.generator().current_position()
        );
        assert_eq!((-28000 + tried) as i128, stepper.get_position());
        assert!(axis.generator().is_idle());
    }

    #[test]
    fn test_return_to_zero_after_timeout() {
        let events = EventLog::new();
        let mut clock = TestClock::new(&events);
        let stepper = TestStepper::new(0);
        let mut axis = x_axis(&stepper, i128::MAX);
        axis.move_to_physical(Millimetres::new(140.0));

        assert!(axis.home(&mut clock).is_err());
        assert_ne!(-28000, stepper.get_position());

        axis.move_to_physical(Millimetres::zero());
        assert_eq!(0, stepper.get_position());
        assert_eq!(Millimetres::zero(), axis.position());
        assert_eq!(Steps::zero(), axis.generator().current_position());
    }
}
