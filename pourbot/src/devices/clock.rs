use arduino_hal::{delay_ms, pac::TC1};
use pourengine::MilliSeconds;

/// Timer1 ticks per second, at a prescale of 1024 from 16MHz.
const TICKS_PER_SECOND: u64 = 16_000_000 / 1024;

/// Longest single busy-wait, so the timer is sampled well within one
/// 16-bit wrap (about 4.2s).
const MAX_DELAY_CHUNK_MS: u32 = 1000;

/// Millisecond clock running off the free-running Timer1 counter.
///
/// No interrupts are used. The counter wraps every few seconds, so it must
/// be sampled more often than that; the homing loop samples it every step
/// and [pourengine::Clock::delay_ms] samples it between chunks.
pub struct Clock {
    timer: TC1,
    last_count: u16,
    ticks: u64,
}
impl Clock {
    pub fn new(timer: TC1) -> Self {
        timer.tccr1a.reset();
        timer.tccr1b.write(|w| w.cs1().prescale_1024());
        timer.tcnt1.reset();
        Self {
            timer,
            last_count: 0,
            ticks: 0,
        }
    }

    /// Accumulates the ticks since the last sample.
    fn sample(&mut self) {
        let count = self.timer.tcnt1.read().bits();
        self.ticks += count.wrapping_sub(self.last_count) as u64;
        self.last_count = count;
    }
}

impl pourengine::Clock for Clock {
    fn now(&mut self) -> MilliSeconds {
        self.sample();
        MilliSeconds::new((self.ticks * 1000 / TICKS_PER_SECOND) as u32)
    }

    fn delay_ms(&mut self, duration: MilliSeconds) {
        let mut remaining = duration.get_value();
        while remaining > 0 {
            let chunk = remaining.min(MAX_DELAY_CHUNK_MS);
            delay_ms(chunk as u16);
            self.sample();
            remaining -= chunk;
        }
    }
}
