//! Shared fixtures for tests.

use std::cell::RefCell;
use std::rc::Rc;

use ufmt::{uDisplay, uWrite};

use crate::MilliSeconds;

/// Something observable that a test double did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Microstep select lines written as `[MS0, MS1, MS2]`.
    MicrostepLevels([bool; 3]),
    /// A relay was switched.
    Relay { relay: u8, energized: bool },
    /// The clock was asked to wait.
    Delay(MilliSeconds),
    /// The load cell was tared.
    Tare,
    /// The load cell was read.
    Read,
}

/// Ordered record of [Event]s, shared between test doubles.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);
impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        self.0.borrow_mut().drain(..).collect()
    }

    /// Returns a copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Returns the recorded events that satisfy `keep`.
    pub fn filtered(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        self.0.borrow().iter().copied().filter(|e| keep(e)).collect()
    }
}

/// Console which collects everything written to it.
#[derive(Default)]
pub struct TestConsole {
    text: String,
}
impl TestConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}
impl uWrite for TestConsole {
    type Error = core::convert::Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.text.push_str(s);
        Ok(())
    }
}

/// Formats a value with `ufmt` into a `String`.
pub fn ufmt_string<T: uDisplay + ?Sized>(value: &T) -> String {
    let mut console = TestConsole::new();
    ufmt::uwrite!(&mut console, "{}", value).unwrap();
    console.text
}
