use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

use crate::AxisId;

/// Everything that can go wrong while pouring.
///
/// None of these stop the machine. Each one is logged (or, for protocol
/// violations, swallowed) and the firmware carries on with the next step or
/// the next frame.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An axis did not reach its home switch before the homing timeout.
    HomingTimeout(AxisId),
    /// The load cell was not ready, so no weight check was possible.
    SensorUnavailable,
    /// The weighed mass differed from the expected mass by more than the
    /// tolerance.
    OutOfTolerance,
    /// A byte other than the separator arrived where a separator was
    /// expected.
    ProtocolViolation,
}

impl uDisplay for Error {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Error::HomingTimeout(axis) => {
                uDisplay::fmt(axis, f)?;
                f.write_str(" home timeout.")
            }
            Error::SensorUnavailable => {
                f.write_str("Load cell not ready, skipping weight check.")
            }
            Error::OutOfTolerance => f.write_str("Weight out of tolerance."),
            Error::ProtocolViolation => {
                f.write_str("Unexpected byte in place of separator.")
            }
        }
    }
}
