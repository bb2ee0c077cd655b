/// Describes the direction for an axis movement.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// Positive direction is associated with a "high" direction signal.
    Positive,
    /// Negative direction is associated with a "low" direction signal.
    Negative,
}
impl Direction {
    /// Direction of travel needed to go from `from` towards `to`.
    ///
    /// Returns `None` if the two are already equal.
    pub fn towards<T: PartialOrd>(from: T, to: T) -> Option<Direction> {
        if to > from {
            Some(Direction::Positive)
        } else if to < from {
            Some(Direction::Negative)
        } else {
            None
        }
    }

    /// Sign of the direction, as `1.0` or `-1.0`.
    pub fn signum(&self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating a [Direction].
    pub fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Positive), Just(Direction::Negative)]
    }

    #[test]
    fn test_towards() {
        assert_eq!(Some(Direction::Positive), Direction::towards(0, 5));
        assert_eq!(Some(Direction::Negative), Direction::towards(5, 0));
        assert_eq!(None, Direction::towards(3, 3));
    }
}
