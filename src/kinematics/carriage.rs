use crate::Axis;
use crate::Clock;
use crate::Error;
use crate::LimitSwitch;
use crate::MicrostepDependent;
use crate::MicrostepMode;
use crate::MicrostepPins;
use crate::MicrostepSelector;
use crate::Millimetres;
use crate::PulseGenerator;
use crate::RelativeMove;

/// The two-axis carriage.
///
/// Both axes share one set of microstep select lines, so every move first
/// puts the drivers into the moving axis's mode, draining and resyncing
/// both axes if that is a change.
pub struct Carriage<PX, LX, PZ, LZ, M> {
    x: Axis<PX, LX>,
    z: Axis<PZ, LZ>,
    selector: MicrostepSelector<M>,
}
impl<PX, LX, PZ, LZ, M> Carriage<PX, LX, PZ, LZ, M>
where
    PX: PulseGenerator,
    LX: LimitSwitch,
    PZ: PulseGenerator,
    LZ: LimitSwitch,
    M: MicrostepPins,
{
    /// Creates a new carriage, projecting both axes for the selector's
    /// current mode.
    pub fn new(
        mut x: Axis<PX, LX>,
        mut z: Axis<PZ, LZ>,
        selector: MicrostepSelector<M>,
    ) -> Self {
        x.resync(selector.mode());
        z.resync(selector.mode());
        Self { x, z, selector }
    }

    pub fn x(&self) -> &Axis<PX, LX> {
        &self.x
    }

    pub fn z(&self) -> &Axis<PZ, LZ> {
        &self.z
    }

    pub fn mode(&self) -> MicrostepMode {
        self.selector.mode()
    }

    /// Switches the shared microstep mode for both axes.
    ///
    /// Returns `true` if the mode changed.
    pub fn set_microstep_mode(&mut self, mode: MicrostepMode) -> bool {
        let Self { x, z, selector } = self;
        selector.set_mode(mode, &mut [x as &mut dyn MicrostepDependent, z])
    }

    /// Returns `true` if both home switches are engaged.
    pub fn at_home(&self) -> bool {
        self.x.at_home() && self.z.at_home()
    }

    pub fn move_x_to(&mut self, physical: Millimetres) {
        self.set_microstep_mode(self.x.required_mode());
        self.x.move_to_physical(physical);
    }

    pub fn move_z_to(&mut self, physical: Millimetres) {
        self.set_microstep_mode(self.z.required_mode());
        self.z.move_to_physical(physical);
    }

    /// Moves Z by a physical distance, stopping on the home switch on the
    /// way down.
    pub fn move_z_relative(&mut self, delta: Millimetres) -> RelativeMove {
        self.set_microstep_mode(self.z.required_mode());
        self.z.move_relative_guarded(delta)
    }

    pub fn home_x<C: Clock>(&mut self, clock: &mut C) -> Result<(), Error> {
        self.set_microstep_mode(self.x.required_mode());
        self.x.home(clock)
    }

    pub fn home_z<C: Clock>(&mut self, clock: &mut C) -> Result<(), Error> {
        self.set_microstep_mode(self.z.required_mode());
        self.z.home(clock)
    }

    /// Declares the current location of both axes to be zero.
    pub fn zero_all(&mut self) {
        self.x.zero();
        self.z.zero();
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::kinematics::axis::test::{test_axis, TestAxis};
    use crate::testing::{Event, EventLog};
    use crate::{
        AxisId, ConstantSpeedStepper, MachineConfig, NoDelay, Steps,
        TestLimitSwitch, TestMicrostepPins, TestStepper,
    };

    pub type TestCarriage = Carriage<
        ConstantSpeedStepper<TestStepper, NoDelay>,
        TestLimitSwitch,
        ConstantSpeedStepper<TestStepper, NoDelay>,
        TestLimitSwitch,
        TestMicrostepPins,
    >;

    struct Rig {
        carriage: TestCarriage,
        x: TestStepper,
        z: TestStepper,
        events: EventLog,
    }

    fn rig() -> Rig {
        let config = MachineConfig::default();
        let events = EventLog::new();
        let x = TestStepper::new(0);
        let z = TestStepper::new(0);
        let x_axis: TestAxis = test_axis(AxisId::X, config.x, &x, 0);
        let z_axis: TestAxis = test_axis(AxisId::Z, config.z, &z, 0);
        let selector = MicrostepSelector::new(
            TestMicrostepPins::new(&events),
            config.initial_mode,
        );
        events.take();
        Rig {
            carriage: Carriage::new(x_axis, z_axis, selector),
            x,
            z,
            events,
        }
    }

    #[test]
    fn test_moves_select_axis_mode() {
        let mut rig = rig();
        rig.carriage.move_x_to(Millimetres::new(90.0));
        assert!(rig.events.take().is_empty());
        assert_eq!(-18000, rig.x.get_position());

        rig.carriage.move_z_relative(Millimetres::new(35.0));
        assert_eq!(MicrostepMode::Half, rig.carriage.mode());
        assert_eq!(
            vec![Event::MicrostepLevels([true, false, false])],
            rig.events.take()
        );
        assert_eq!(-7000, rig.z.get_position());

        rig.carriage.move_x_to(Millimetres::new(140.0));
        assert_eq!(MicrostepMode::Quarter, rig.carriage.mode());
        assert_eq!(-28000, rig.x.get_position());
    }

    #[test]
    fn test_mode_change_keeps_positions() {
        let mut rig = rig();
        rig.carriage.move_x_to(Millimetres::new(90.0));
        let x_before = rig.carriage.x().position();
        let z_before = rig.carriage.z().position();

        assert!(rig.carriage.set_microstep_mode(MicrostepMode::Half));
        assert_eq!(x_before, rig.carriage.x().position());
        assert_eq!(z_before, rig.carriage.z().position());
        assert_eq!(
            Steps::new(-9000),
            rig.carriage.x().generator().current_position()
        );
        // Nothing moved.
        assert_eq!(-18000, rig.x.get_position());

        assert!(!rig.carriage.set_microstep_mode(MicrostepMode::Half));
        assert!(rig.carriage.set_microstep_mode(MicrostepMode::Quarter));
        assert_eq!(x_before, rig.carriage.x().position());
        assert_eq!(
            Steps::new(-18000),
            rig.carriage.x().generator().current_position()
        );
    }

    #[test]
    fn test_z_cycle_returns_to_switch() {
        let mut rig = rig();
        rig.carriage.move_z_relative(Millimetres::new(35.0));
        rig.carriage.move_z_relative(Millimetres::new(-35.0));
        assert_eq!(0, rig.z.get_position());
        assert_eq!(14000, rig.z.get_travel());
        assert_eq!(Millimetres::zero(), rig.carriage.z().physical_position());
    }

    #[test]
    fn test_home_both() {
        let events = EventLog::new();
        let mut clock = crate::TestClock::new(&events);
        let mut rig = rig();
        rig.carriage.move_x_to(Millimetres::new(190.0));
        rig.carriage.move_z_to(Millimetres::new(10.0));
        assert!(!rig.carriage.at_home());

        assert_eq!(Ok(()), rig.carriage.home_z(&mut clock));
        assert_eq!(Ok(()), rig.carriage.home_x(&mut clock));
        assert!(rig.carriage.at_home());
        assert_eq!(0, rig.x.get_position());
        assert_eq!(0, rig.z.get_position());
        assert_eq!(MicrostepMode::Quarter, rig.carriage.mode());
    }
}
