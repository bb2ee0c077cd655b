/// Abstraction for a limit switch.
///
/// A limit switch just has a state; either at the limit, or not at the
/// limit. On this machine each axis has one, at its home end, and it reads
/// high (active) when pressed.
pub trait LimitSwitch {
    fn read_limitswitch_state(&self) -> LimitSwitchState;

    /// Returns `true` if the switch is engaged.
    fn is_at_limit(&self) -> bool {
        self.read_limitswitch_state() == LimitSwitchState::AtLimit
    }
}

/// State of a limit switch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LimitSwitchState {
    /// Limit switch is engaged at the limit.
    ///
    /// For a home switch this means the axis is at its zero reference and
    /// must not travel any further towards home.
    AtLimit,
    /// Limit switch is not at the limit.
    ///
    /// The axis can still safely proceed in the direction of this limit
    /// switch.
    NotAtLimit,
}

#[cfg(test)]
pub use self::test::TestLimitSwitch;

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::{Direction, TestStepper};
    use std::sync::{Arc, Mutex};

    /// Limit switch for tests.
    ///
    /// A test limit switch is either set by hand, or coupled to a
    /// [TestStepper] so that it engages once the stepper's physical position
    /// reaches a threshold. Clones share their state.
    #[derive(Clone)]
    pub struct TestLimitSwitch {
        source: Arc<Mutex<Source>>,
    }

    enum Source {
        Manual(LimitSwitchState),
        Coupled {
            stepper: TestStepper,
            threshold: i128,
            direction: Direction,
        },
    }

    impl TestLimitSwitch {
        /// Creates a new test limit switch with a fixed state.
        pub fn new(state: LimitSwitchState) -> Self {
            Self {
                source: Arc::new(Mutex::new(Source::Manual(state))),
            }
        }

        /// Creates a limit switch which is engaged whenever `stepper` is at
        /// or beyond `threshold` in `direction`.
        pub fn coupled(
            stepper: &TestStepper,
            threshold: i128,
            direction: Direction,
        ) -> Self {
            Self {
                source: Arc::new(Mutex::new(Source::Coupled {
                    stepper: stepper.clone(),
                    threshold,
                    direction,
                })),
            }
        }

        /// Sets the state of the test limit switch, decoupling it from any
        /// stepper.
        pub fn set_limitswitch_state(&mut self, state: LimitSwitchState) {
            *self.source.lock().unwrap() = Source::Manual(state);
        }
    }

    impl LimitSwitch for TestLimitSwitch {
        fn read_limitswitch_state(&self) -> LimitSwitchState {
            match &*self.source.lock().unwrap() {
                Source::Manual(state) => *state,
                Source::Coupled {
                    stepper,
                    threshold,
                    direction,
                } => {
                    let position = stepper.get_position();
                    let engaged = match direction {
                        Direction::Positive => position >= *threshold,
                        Direction::Negative => position <= *threshold,
                    };
                    if engaged {
                        LimitSwitchState::AtLimit
                    } else {
                        LimitSwitchState::NotAtLimit
                    }
                }
            }
        }
    }

    #[test]
    fn test_test_limit_switch() {
        let mut tls = TestLimitSwitch::new(LimitSwitchState::NotAtLimit);
        assert_eq!(LimitSwitchState::NotAtLimit, tls.read_limitswitch_state());
        tls.set_limitswitch_state(LimitSwitchState::AtLimit);
        assert_eq!(LimitSwitchState::AtLimit, tls.read_limitswitch_state());
        assert!(tls.is_at_limit());
        tls.set_limitswitch_state(LimitSwitchState::NotAtLimit);
        assert_eq!(LimitSwitchState::NotAtLimit, tls.read_limitswitch_state());
    }

    #[test]
    fn test_coupled_limit_switch() {
        let mut stepper = TestStepper::new(-3);
        let tls = TestLimitSwitch::coupled(&stepper, 0, Direction::Positive);
        assert!(!tls.is_at_limit());
        stepper.set_position(0);
        assert!(tls.is_at_limit());
        stepper.set_position(5);
        assert!(tls.is_at_limit());

        let low = TestLimitSwitch::coupled(&stepper, -10, Direction::Negative);
        assert!(!low.is_at_limit());
        stepper.set_position(-10);
        assert!(low.is_at_limit());
    }
}
