use core::ops::Sub;

use micromath::F32Ext;
use ufmt::{uDisplay, uWrite, Formatter};

/// Underlying type representing a mass in grams.
type GramsRepr = f32;

/// Mass in grams, as reported by the load cell.
///
/// Dispensed liquids are treated as having the density of water, so one
/// millilitre is one gram.
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone)]
pub struct Grams(GramsRepr);
impl Grams {
    /// Creates a new `Grams`.
    pub const fn new(value: GramsRepr) -> Self {
        Self(value)
    }

    /// Mass expected for a volume of liquid.
    pub fn of_millilitres(volume_ml: u8) -> Self {
        Self(volume_ml as GramsRepr)
    }

    /// Returns the value as an `f32`.
    pub fn get_value(&self) -> GramsRepr {
        self.0
    }

    /// Returns the magnitude of the mass.
    pub fn abs(&self) -> Self {
        Self(F32Ext::abs(self.0))
    }

    /// Rounds to the nearest whole millilitre, saturating at the limits of
    /// a `u8`.
    pub fn round_to_millilitres(&self) -> u8 {
        let rounded = F32Ext::round(self.0);
        if rounded <= 0.0 {
            0
        } else if rounded >= u8::MAX as GramsRepr {
            u8::MAX
        } else {
            rounded as u8
        }
    }
}

impl Sub for Grams {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Grams::new(self.get_value() - rhs.get_value())
    }
}

impl uDisplay for Grams {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        // One decimal place, signed only when negative.
        let tenths = F32Ext::round(self.0 * 10.0) as i32;
        if tenths < 0 {
            f.write_char('-')?;
        }
        let v = tenths.unsigned_abs();
        uDisplay::fmt(&(v / 10), f)?;
        f.write_char('.')?;
        uDisplay::fmt(&(v % 10), f)?;
        f.write_char('g')
    }
}
