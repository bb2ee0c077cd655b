use core::ops::ControlFlow;

use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

use crate::AxisConfig;
use crate::LimitSwitch;
use crate::MicrostepDependent;
use crate::MicrostepMode;
use crate::Millimetres;
use crate::PulseGenerator;
use crate::Steps;

/// Which axis of the carriage.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    /// Horizontal; positions the cup under a slot.
    X,
    /// Vertical; lifts the cup into a dispenser.
    Z,
}

impl uDisplay for AxisId {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            AxisId::X => f.write_str("X"),
            AxisId::Z => f.write_str("Z"),
        }
    }
}

/// How a call to [Axis::drive] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    /// The pulse generator reached its target.
    Completed,
    /// The tick callback asked to stop.
    Interrupted,
}

/// How a guarded relative move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeMove {
    /// A downward move was requested while already on the home switch. The
    /// axis did not move.
    AlreadyHome,
    /// The target was reached.
    Reached,
    /// The home switch engaged on the way down; the axis stopped there.
    StoppedAtHome,
}

/// One linear axis with a home switch.
///
/// The axis position is held in millimetres, in internal coordinates (the
/// negation of physical coordinates if the axis is inverted). The step
/// count inside the pulse generator is a projection of that position for
/// the microstep mode the drivers were last set to, and is recomputed by
/// [MicrostepDependent::resync] whenever that mode changes.
///
/// # Type Parameters
///
/// - `P`: the [PulseGenerator] driving the motor.
/// - `L`: the home [LimitSwitch].
pub struct Axis<P, L> {
    id: AxisId,
    generator: P,
    home_switch: L,
    config: AxisConfig,
    gauge_mode: MicrostepMode,
    position: Millimetres,
}
impl<P: PulseGenerator, L: LimitSwitch> Axis<P, L> {
    /// Creates a new axis at position zero.
    ///
    /// The step count is projected for the axis's own microstep mode until
    /// the first resync says otherwise.
    pub fn new(id: AxisId, generator: P, home_switch: L, config: AxisConfig) -> Self {
        let mut axis = Self {
            id,
            generator,
            home_switch,
            config,
            gauge_mode: config.mode,
            position: Millimetres::zero(),
        };
        axis.resync(config.mode);
        axis
    }

    pub fn id(&self) -> AxisId {
        self.id
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Microstep mode this axis must be in to move.
    pub fn required_mode(&self) -> MicrostepMode {
        self.config.mode
    }

    /// Microstep mode the step count is currently projected for.
    pub fn gauge_mode(&self) -> MicrostepMode {
        self.gauge_mode
    }

    /// Position in internal coordinates.
    pub fn position(&self) -> Millimetres {
        self.position
    }

    /// Position in physical coordinates.
    pub fn physical_position(&self) -> Millimetres {
        self.to_internal(self.position)
    }

    /// Maps a physical position to internal coordinates.
    ///
    /// The mapping is its own inverse, so this also maps internal positions
    /// back to physical ones.
    pub fn to_internal(&self, physical: Millimetres) -> Millimetres {
        if self.config.inverted {
            -physical
        } else {
            physical
        }
    }

    pub fn generator(&self) -> &P {
        &self.generator
    }

    /// Returns `true` if the home switch is engaged.
    pub fn at_home(&self) -> bool {
        self.home_switch.is_at_limit()
    }

    /// Step count corresponding to an internal position in the active mode.
    fn steps_for(&self, position: Millimetres) -> Steps {
        self.config.screw.to_steps(position, self.gauge_mode)
    }

    /// Redefines the current position as zero, without moving.
    pub fn zero(&mut self) {
        self.position = Millimetres::zero();
        self.generator.set_current_position(self.steps_for(self.position));
    }

    /// Runs the pulse generator until it reaches its target.
    ///
    /// `on_tick` is consulted before every step; returning
    /// [ControlFlow::Break] stops the drive where it is, with the target
    /// still outstanding.
    pub fn drive<F>(&mut self, mut on_tick: F) -> Drive
    where
        F: FnMut(&Self) -> ControlFlow<()>,
    {
        while !self.generator.is_idle() {
            if on_tick(&*self).is_break() {
                return Drive::Interrupted;
            }
            self.generator.run();
        }
        Drive::Completed
    }

    /// Moves to an absolute physical position.
    ///
    /// The drivers must already be in [Axis::required_mode].
    pub fn move_to_physical(&mut self, physical: Millimetres) {
        let target = self.to_internal(physical);
        self.position = target;
        self.generator.move_to(self.steps_for(target));
        self.drive(|_| ControlFlow::Continue(()));
    }

    /// Moves by a physical distance, watching the home switch on the way
    /// down.
    ///
    /// Downward moves (negative `delta`) never aim below physical zero, and
    /// stop dead as soon as the home switch engages. Either way the axis is
    /// re-zeroed at the switch. Upward moves are not guarded.
    ///
    /// The drivers must already be in [Axis::required_mode].
    pub fn move_relative_guarded(&mut self, delta: Millimetres) -> RelativeMove {
        let downward = delta.is_negative();
        if downward && self.at_home() {
            self.zero();
            return RelativeMove::AlreadyHome;
        }

        let mut physical_target = self.physical_position() + delta;
        if downward && physical_target.is_negative() {
            physical_target = Millimetres::zero();
        }
        let target = self.to_internal(physical_target);
        self.generator.move_to(self.steps_for(target));

        let drive = self.drive(|axis| {
            if downward && axis.at_home() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        match drive {
            Drive::Interrupted => {
                // Zeroing also drops the outstanding target.
                self.zero();
                RelativeMove::StoppedAtHome
            }
            Drive::Completed => {
                self.position = target;
                RelativeMove::Reached
            }
        }
    }

    pub(crate) fn generator_mut(&mut self) -> &mut P {
        &mut self.generator
    }
}

impl<P: PulseGenerator, L: LimitSwitch> MicrostepDependent for Axis<P, L> {
    fn is_idle(&self) -> bool {
        self.generator.is_idle()
    }

    fn advance(&mut self) {
        self.generator.run();
    }

    fn resync(&mut self, mode: MicrostepMode) {
        self.gauge_mode = mode;
        self.generator.set_current_position(self.steps_for(self.position));
    }
}
