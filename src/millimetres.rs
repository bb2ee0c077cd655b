use core::ops::{Add, Neg, Sub};

use micromath::F32Ext;
use ufmt::{uDisplay, uWrite, Formatter};

/// Underlying type representing a distance in millimetres.
type MillimetresRepr = f32;

/// Distance in millimetres.
///
/// Axis positions are held in millimetres because the number of steps per
/// millimetre changes with the microstep mode. A step count is only ever a
/// projection of a `Millimetres` value for one particular mode.
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone)]
pub struct Millimetres(MillimetresRepr);
impl Millimetres {
    /// Creates a new `Millimetres`.
    pub const fn new(value: MillimetresRepr) -> Self {
        Self(value)
    }

    /// Zero millimetres.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the value as an `f32`.
    pub fn get_value(&self) -> MillimetresRepr {
        self.0
    }

    /// Returns `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns the value in thousandths of a millimetre, rounded to the
    /// nearest integer.
    pub fn to_millis(&self) -> i32 {
        F32Ext::round(self.0 * 1000.0) as i32
    }
}

impl Add for Millimetres {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Millimetres::new(self.get_value() + rhs.get_value())
    }
}

impl Sub for Millimetres {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Millimetres::new(self.get_value() - rhs.get_value())
    }
}

impl Neg for Millimetres {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Millimetres::new(-self.get_value())
    }
}

impl uDisplay for Millimetres {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        udisplay_millis(self.to_millis(), f)
    }
}

/// Writes a value in thousandths as a signed decimal with three places.
///
/// eg.
///   - 3140  -> +3.140
///   - -5    -> -0.005
pub fn udisplay_millis<W>(
    value: i32,
    f: &mut Formatter<W>,
) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    // Sign character.
    if value >= 0 {
        f.write_char('+')?;
    } else {
        f.write_char('-')?;
    }

    let v = value.unsigned_abs();
    let int_part = v / 1000;
    let frc_part = v % 1000;

    int_part.fmt(f)?;
    f.write_char('.')?;

    if frc_part < 10 {
        f.write_str("00")?;
    } else if frc_part < 100 {
        f.write_char('0')?;
    }
    frc_part.fmt(f)?;

    Ok(())
}
