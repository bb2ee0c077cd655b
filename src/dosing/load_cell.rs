use crate::Grams;

/// Weighing load cell under the cup.
pub trait LoadCell {
    /// Returns `true` if a conversion is available to read.
    fn is_ready(&mut self) -> bool;

    /// Sets the zero point to the average of `samples` readings.
    fn tare(&mut self, samples: u8);

    /// Reads the average of `samples` readings.
    ///
    /// Returns `None` if no reading could be taken.
    fn read_grams(&mut self, samples: u8) -> Option<Grams>;
}

#[cfg(test)]
pub use self::test::TestLoadCell;

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::testing::{Event, EventLog};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Load cell which returns scripted readings.
    ///
    /// Readings are handed out in order; once the script runs out every
    /// read returns `None`. Clones share their state.
    #[derive(Clone)]
    pub struct TestLoadCell {
        state: Rc<RefCell<State>>,
        events: EventLog,
    }

    struct State {
        ready: bool,
        readings: VecDeque<Grams>,
    }

    impl TestLoadCell {
        pub fn new(events: &EventLog, ready: bool) -> Self {
            Self {
                state: Rc::new(RefCell::new(State {
                    ready,
                    readings: VecDeque::new(),
                })),
                events: events.clone(),
            }
        }

        /// Queues a reading to be returned by a later `read_grams`.
        pub fn push_reading(&self, grams: f32) {
            self.state.borrow_mut().readings.push_back(Grams::new(grams));
        }

        pub fn set_ready(&self, ready: bool) {
            self.state.borrow_mut().ready = ready;
        }
    }

    impl LoadCell for TestLoadCell {
        fn is_ready(&mut self) -> bool {
            self.state.borrow().ready
        }

        fn tare(&mut self, _samples: u8) {
            self.events.push(Event::Tare);
        }

        fn read_grams(&mut self, _samples: u8) -> Option<Grams> {
            self.events.push(Event::Read);
            self.state.borrow_mut().readings.pop_front()
        }
    }
}
