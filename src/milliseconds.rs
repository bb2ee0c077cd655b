use core::ops::{Add, Sub};

use ufmt::{uDisplay, uWrite, Formatter};

/// Time in milliseconds.
///
/// Used for dispensing pulses, settle delays, pauses and timeouts.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MilliSeconds(u32);
impl MilliSeconds {
    /// Creates a new `MilliSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Zero milliseconds.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }

    /// Multiplies a duration by a count, saturating on overflow.
    pub fn times(&self, count: u32) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Time elapsed from `earlier` until `self`.
    ///
    /// Clocks are free-running counters, so this wraps rather than
    /// underflowing.
    pub fn since(&self, earlier: MilliSeconds) -> Self {
        Self(self.0.wrapping_sub(earlier.0))
    }
}

impl Add for MilliSeconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        MilliSeconds::new(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for MilliSeconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        MilliSeconds::new(self.0.saturating_sub(rhs.0))
    }
}

impl uDisplay for MilliSeconds {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        self.0.fmt(f)?;
        f.write_str("ms")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::ufmt_string;
    use proptest::prelude::*;

    #[test]
    fn test_times() {
        assert_eq!(MilliSeconds::new(1200), MilliSeconds::new(30).times(40));
        assert_eq!(MilliSeconds::zero(), MilliSeconds::new(30).times(0));
        assert_eq!(
            MilliSeconds::new(u32::MAX),
            MilliSeconds::new(u32::MAX / 2).times(3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("800ms", ufmt_string(&MilliSeconds::new(800)));
    }

    proptest! {
        #[test]
        fn test_since_wraps(start: u32, elapsed in 0u32..1_000_000) {
            let earlier = MilliSeconds::new(start);
            let later = earlier + MilliSeconds::new(elapsed);
            assert_eq!(MilliSeconds::new(elapsed), later.since(earlier));
        }
    }
}
