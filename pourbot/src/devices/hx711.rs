use arduino_hal::{
    delay_us,
    port::{
        mode::{Floating, Input, Output},
        Pin,
    },
};
use pourengine::Grams;

/// Conversions to wait for before giving up on a reading.
const READY_POLLS: u16 = 1000;

/// HX711 load cell amplifier on channel A, gain 128.
///
/// Readings are averaged over a number of conversions, offset by the tare
/// value, and divided by the calibration factor to give grams.
pub struct Hx711 {
    data: Pin<Input<Floating>>,
    clock: Pin<Output>,
    offset: i32,
    calibration: f32,
}
impl Hx711 {
    pub fn new(
        data: Pin<Input<Floating>>,
        mut clock: Pin<Output>,
        calibration: f32,
    ) -> Self {
        // The chip powers down while the clock is held high.
        clock.set_low();
        Self {
            data,
            clock,
            offset: 0,
            calibration,
        }
    }

    /// Waits a bounded time for a conversion, then shifts it out.
    fn read_raw(&mut self) -> Option<i32> {
        let mut polls = 0;
        while self.data.is_high() {
            if polls == READY_POLLS {
                return None;
            }
            polls += 1;
            delay_us(100);
        }

        let mut value: u32 = 0;
        for _ in 0..24 {
            self.clock.set_high();
            delay_us(1);
            value = (value << 1) | self.data.is_high() as u32;
            self.clock.set_low();
            delay_us(1);
        }
        // One extra pulse selects channel A, gain 128, for the next read.
        self.clock.set_high();
        delay_us(1);
        self.clock.set_low();

        // Sign-extend from 24 bits.
        Some(((value << 8) as i32) >> 8)
    }

    fn read_average(&mut self, samples: u8) -> Option<i32> {
        let samples = samples.max(1);
        let mut sum: i64 = 0;
        for _ in 0..samples {
            sum += self.read_raw()? as i64;
        }
        Some((sum / samples as i64) as i32)
    }
}

impl pourengine::LoadCell for Hx711 {
    fn is_ready(&mut self) -> bool {
        self.data.is_low()
    }

    fn tare(&mut self, samples: u8) {
        if let Some(offset) = self.read_average(samples) {
            self.offset = offset;
        }
    }

    fn read_grams(&mut self, samples: u8) -> Option<Grams> {
        let raw = self.read_average(samples)?;
        Some(Grams::new((raw - self.offset) as f32 / self.calibration))
    }
}
