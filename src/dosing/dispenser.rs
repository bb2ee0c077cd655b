use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

use crate::Clock;
use crate::DosingConfig;
use crate::MilliSeconds;
use crate::Relay;

/// Number of relay-driven pumps.
pub const PUMP_COUNT: usize = 4;

/// Zero-based index of a pump.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub struct PumpId(u8);
impl PumpId {
    /// Creates a pump index, or `None` if there is no such pump.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PUMP_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl uDisplay for PumpId {
    /// Pumps are numbered from 1 on the relay board.
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uDisplay::fmt(&(self.0 + 1), f)
    }
}

/// Bank of pump relays, dosed by time.
///
/// # Type Parameters
///
/// - `R`: the [Relay] switching each pump.
pub struct Dispenser<R> {
    relays: [R; PUMP_COUNT],
    ms_per_ml: MilliSeconds,
}
impl<R: Relay> Dispenser<R> {
    /// Creates a new dispenser, switching every pump off.
    pub fn new(mut relays: [R; PUMP_COUNT], config: DosingConfig) -> Self {
        for relay in relays.iter_mut() {
            relay.set_energized(false);
        }
        Self {
            relays,
            ms_per_ml: config.ms_per_ml(),
        }
    }

    /// How long a pump runs to deliver `volume_ml`.
    pub fn pulse_duration(&self, volume_ml: u8) -> MilliSeconds {
        self.ms_per_ml.times(volume_ml as u32)
    }

    /// Runs a pump for long enough to deliver `volume_ml`.
    ///
    /// Blocks for the whole pulse. Returns how long the pump ran; zero
    /// volumes do nothing.
    pub fn dispense<C: Clock>(
        &mut self,
        pump: PumpId,
        volume_ml: u8,
        clock: &mut C,
    ) -> MilliSeconds {
        if volume_ml == 0 {
            return MilliSeconds::zero();
        }
        let duration = self.pulse_duration(volume_ml);
        let relay = &mut self.relays[pump.index()];
        relay.set_energized(true);
        clock.delay_ms(duration);
        relay.set_energized(false);
        duration
    }
}
