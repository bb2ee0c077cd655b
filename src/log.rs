//! Console logging.
//!
//! Each macro writes one prefixed line to a [ufmt::uWrite] console. A
//! console that fails to write must not stop the machine, so write errors
//! are dropped.

/// Write an info line, expanding its arguments.
macro_rules! info {
    ($console:expr, $($arg:tt)*) => {{
        let console = &mut $console;
        let _ = ::ufmt::uwrite!(console, "INFO: ");
        let _ = ::ufmt::uwriteln!(console, $($arg)*);
    }};
}

/// Write a warning line, expanding its arguments.
macro_rules! warning {
    ($console:expr, $($arg:tt)*) => {{
        let console = &mut $console;
        let _ = ::ufmt::uwrite!(console, "WARNING: ");
        let _ = ::ufmt::uwriteln!(console, $($arg)*);
    }};
}

/// Write an error line, expanding its arguments.
macro_rules! error {
    ($console:expr, $($arg:tt)*) => {{
        let console = &mut $console;
        let _ = ::ufmt::uwrite!(console, "ERROR: ");
        let _ = ::ufmt::uwriteln!(console, $($arg)*);
    }};
}

pub(crate) use error;
pub(crate) use info;
pub(crate) use warning;
