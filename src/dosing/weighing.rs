use ufmt::uWrite;

use crate::log::{info, warning};
use crate::Clock;
use crate::Dispenser;
use crate::Error;
use crate::Grams;
use crate::LoadCell;
use crate::PumpId;
use crate::Relay;
use crate::WeighingConfig;

/// Result of checking a pour by weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightCheck {
    /// Nothing was expected, so nothing was weighed.
    Skipped,
    /// The pour was close enough, or over.
    Accepted { measured: Grams },
    /// The pour was short and one top-up was dispensed.
    ToppedUp { measured: Grams, topup_ml: u8 },
}

/// The load cell under the cup, with its weighing settings.
///
/// # Type Parameters
///
/// - `L`: the [LoadCell].
pub struct Scale<L> {
    load_cell: L,
    config: WeighingConfig,
}
impl<L: LoadCell> Scale<L> {
    pub fn new(load_cell: L, config: WeighingConfig) -> Self {
        Self { load_cell, config }
    }

    pub fn is_ready(&mut self) -> bool {
        self.load_cell.is_ready()
    }

    /// Zeroes the scale with the empty cup on it.
    ///
    /// Returns `false`, and does nothing, if the load cell is not ready.
    pub fn tare(&mut self) -> bool {
        if !self.load_cell.is_ready() {
            return false;
        }
        self.load_cell.tare(self.config.samples);
        true
    }

    /// Weighs a pump pour and tops it up once if it came out short.
    ///
    /// After the settle time the cup is weighed and compared against
    /// `expected_ml`, taking one millilitre as one gram. A shortfall larger
    /// than the tolerance is made up with a single further dispense from
    /// the same pump, unless it rounds to less than the smallest top-up.
    /// The top-up itself is never weighed.
    ///
    /// # Returns
    ///
    /// - `Ok(check)`: what was measured and done.
    /// - `Err(Error::SensorUnavailable)`: if the load cell was not ready or
    ///   gave no reading. Nothing was dispensed.
    pub fn verify_and_topup<R, C, W>(
        &mut self,
        pump: PumpId,
        expected_ml: u8,
        dispenser: &mut Dispenser<R>,
        clock: &mut C,
        console: &mut W,
    ) -> Result<WeightCheck, Error>
    where
        R: Relay,
        C: Clock,
        W: uWrite + ?Sized,
    {
        if expected_ml == 0 {
            return Ok(WeightCheck::Skipped);
        }
        if !self.load_cell.is_ready() {
            return Err(Error::SensorUnavailable);
        }

        clock.delay_ms(self.config.settle_time);
        let measured = self
            .load_cell
            .read_grams(self.config.samples)
            .ok_or(Error::SensorUnavailable)?;
        let expected = Grams::of_millilitres(expected_ml);
        let diff = (measured - expected).abs();
        info!(
            *console,
            "Weight check: expected={}, measured={}, diff={}",
            expected,
            measured,
            diff
        );
        if diff.get_value() <= self.config.tolerance {
            info!(*console, "Weight check OK.");
        } else {
            warning!(*console, "{}", Error::OutOfTolerance);
        }

        // Over-pours cannot be fixed.
        let deficit = expected - measured;
        if deficit.get_value() <= self.config.tolerance {
            return Ok(WeightCheck::Accepted { measured });
        }
        let topup_ml = deficit.round_to_millilitres();
        if topup_ml < self.config.min_topup_ml {
            return Ok(WeightCheck::Accepted { measured });
        }

        info!(*console, "Top-up: {} ml", topup_ml);
        dispenser.dispense(pump, topup_ml, clock);
        Ok(WeightCheck::ToppedUp { measured, topup_ml })
    }
}
