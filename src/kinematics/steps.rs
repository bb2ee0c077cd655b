use core::ops::Sub;

use ufmt_macros::uDebug;

/// Underlying type representing the number of steps.
type StepRepr = i32;

/// Number of steps.
///
/// `Steps` is careful to prevent overflows, so that it can be used safely to
/// track axis positions.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct Steps(StepRepr);
impl Steps {
    /// Create a new number of steps.
    pub const fn new(steps: StepRepr) -> Self {
        Self(steps)
    }

    /// Zero steps.
    pub const fn zero() -> Self {
        Steps(0)
    }

    /// Returns the value represented by `Steps`.
    pub fn get_value(&self) -> StepRepr {
        self.0
    }

    /// Returns `true` if this is zero steps.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Increment the value if it's safe to do so without an overflow.
    pub fn inc(&self) -> Option<Self> {
        self.0.checked_add_unsigned(1).map(Steps)
    }

    /// Decrement the value if it's safe to do so without an overflow.
    pub fn dec(&self) -> Option<Self> {
        self.0.checked_sub_unsigned(1).map(Steps)
    }
}

/// Signed distance between two positions, saturating at the limits.
impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Steps(self.0.saturating_sub(rhs.0))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(0, Steps::zero().get_value());
        assert_eq!(Steps::new(0), Steps::zero());
        assert!(Steps::zero().is_zero());
    }

    #[test]
    fn test_steps_max_inc() {
        assert_eq!(None, Steps::new(StepRepr::MAX).inc());
    }

    #[test]
    fn test_steps_min_dec() {
        assert_eq!(None, Steps::new(StepRepr::MIN).dec());
    }

    #[test]
    fn test_sub_saturates() {
        assert_eq!(
            Steps::new(StepRepr::MIN),
            Steps::new(StepRepr::MIN) - Steps::new(1)
        );
        assert_eq!(Steps::new(-7000), Steps::new(0) - Steps::new(7000));
    }

    proptest! {
        #[test]
        fn test_inc_dec(value in ((StepRepr::MIN + 1)..(StepRepr::MAX - 1))) {
            let s = Steps::new(value);
            assert_eq!(value + 1, s.inc().unwrap().get_value());
            assert_eq!(value - 1, s.dec().unwrap().get_value());
            assert_eq!(s, s.inc().unwrap().dec().unwrap());
        }
    }
}
