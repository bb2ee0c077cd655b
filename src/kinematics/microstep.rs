use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

/// Microstep resolution of the stepper drivers.
///
/// The select lines are shared by every driver on the board, so the mode
/// is always the same for all axes.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum MicrostepMode {
    /// Two microsteps per full step. Coarse and strong; used for Z.
    Half,
    /// Four microsteps per full step. Fine; used for X.
    Quarter,
}
impl MicrostepMode {
    /// Microsteps per full step.
    pub fn multiplier(&self) -> u32 {
        match self {
            MicrostepMode::Half => 2,
            MicrostepMode::Quarter => 4,
        }
    }

    /// Levels of the `MS0`, `MS1` and `MS2` select lines for this mode.
    pub fn select_levels(&self) -> [bool; 3] {
        match self {
            MicrostepMode::Half => [true, false, false],
            MicrostepMode::Quarter => [false, true, false],
        }
    }
}

impl uDisplay for MicrostepMode {
    /// Written as the fraction of a full step, eg. `1/4`.
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("1/")?;
        uDisplay::fmt(&self.multiplier(), f)
    }
}

/// The shared microstep select lines.
pub trait MicrostepPins {
    /// Drives `MS0`, `MS1` and `MS2` to the given levels.
    fn write_levels(&mut self, levels: [bool; 3]);
}

/// Something whose step count depends on the microstep mode.
///
/// Every axis wired to the shared select lines implements this, so that a
/// mode change can wait for it to stop and then re-project its step count.
pub trait MicrostepDependent {
    /// Returns `true` if there is no outstanding motion.
    fn is_idle(&self) -> bool;

    /// Advances outstanding motion by one tick.
    fn advance(&mut self);

    /// Recomputes the step count from the authoritative position for a new
    /// mode.
    fn resync(&mut self, mode: MicrostepMode);
}

/// Owner of the shared microstep select lines.
///
/// # Type Parameters
///
/// - `M`: the [MicrostepPins].
pub struct MicrostepSelector<M> {
    pins: M,
    mode: MicrostepMode,
}
impl<M: MicrostepPins> MicrostepSelector<M> {
    /// Creates a new selector, driving the pins to `mode`.
    pub fn new(mut pins: M, mode: MicrostepMode) -> Self {
        pins.write_levels(mode.select_levels());
        Self { pins, mode }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> MicrostepMode {
        self.mode
    }

    /// Switches the microstep mode.
    ///
    /// Nothing happens if `mode` is already active. Otherwise this:
    ///
    /// 1. Advances every axis in `axes` until none has outstanding motion.
    /// 2. Drives the select lines.
    /// 3. Resyncs every axis in `axes` to the new mode.
    ///
    /// # Parameters
    ///
    /// - `mode`: The mode required after this call.
    /// - `axes`: Every axis driven through these select lines.
    ///
    /// # Returns
    ///
    /// - `true`: if the mode changed.
    /// - `false`: if it was already active.
    pub fn set_mode(
        &mut self,
        mode: MicrostepMode,
        axes: &mut [&mut dyn MicrostepDependent],
    ) -> bool {
        if mode == self.mode {
            return false;
        }

        while axes.iter().any(|axis| !axis.is_idle()) {
            for axis in axes.iter_mut() {
                if !axis.is_idle() {
                    axis.advance();
                }
            }
        }

        self.pins.write_levels(mode.select_levels());
        self.mode = mode;

        for axis in axes.iter_mut() {
            axis.resync(mode);
        }

        true
    }
}

#[cfg(test)]
pub use self::test::TestMicrostepPins;
