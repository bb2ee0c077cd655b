use ufmt::{uWrite, uwriteln};

use crate::log::{error, info, warning};
use crate::Axis;
use crate::AxisId;
use crate::Carriage;
use crate::Clock;
use crate::Dispenser;
use crate::Error;
use crate::Frame;
use crate::FrameHandler;
use crate::LimitSwitch;
use crate::LoadCell;
use crate::MachineConfig;
use crate::MicrostepPins;
use crate::MicrostepSelector;
use crate::Millimetres;
use crate::PourCommand;
use crate::PulseGenerator;
use crate::PumpId;
use crate::Relay;
use crate::Scale;
use crate::SequenceConfig;
use crate::SlotKind;
use crate::SlotTable;
use crate::PUMP_COUNT;

/// The hardware a [PourSequencer] runs on.
///
/// This only names the types of each device; the devices themselves are
/// handed over in [Parts].
pub trait Board {
    type XPulses: PulseGenerator;
    type XHome: LimitSwitch;
    type ZPulses: PulseGenerator;
    type ZHome: LimitSwitch;
    type ModePins: MicrostepPins;
    type Relay: Relay;
    type LoadCell: LoadCell;
    type Clock: Clock;
    type Console: uWrite;
}

/// The devices of a [Board].
pub struct Parts<B: Board> {
    pub x_pulses: B::XPulses,
    pub x_home: B::XHome,
    pub z_pulses: B::ZPulses,
    pub z_home: B::ZHome,
    pub mode_pins: B::ModePins,
    /// Pump relays, in pump order.
    pub relays: [B::Relay; PUMP_COUNT],
    pub load_cell: B::LoadCell,
    pub clock: B::Clock,
    /// Where log lines and protocol replies are written.
    pub console: B::Console,
}

type BoardCarriage<B> = Carriage<
    <B as Board>::XPulses,
    <B as Board>::XHome,
    <B as Board>::ZPulses,
    <B as Board>::ZHome,
    <B as Board>::ModePins,
>;

/// Carries out frames of pour commands.
///
/// For each command the cup is moved under the slot and filled, either by
/// lifting it into a cycled dispenser as many times as needed, or by
/// running a pump and checking the result by weight. After the last
/// command Z is lowered and X is re-homed.
pub struct PourSequencer<B: Board> {
    carriage: BoardCarriage<B>,
    dispenser: Dispenser<B::Relay>,
    scale: Scale<B::LoadCell>,
    clock: B::Clock,
    console: B::Console,
    slots: SlotTable,
    sequence: SequenceConfig,
}
impl<B: Board> PourSequencer<B> {
    /// Takes over the board's devices.
    ///
    /// This drives the microstep select lines to the initial mode and
    /// switches every pump off. Nothing moves.
    pub fn new(parts: Parts<B>, config: MachineConfig) -> Self {
        let x = Axis::new(AxisId::X, parts.x_pulses, parts.x_home, config.x);
        let z = Axis::new(AxisId::Z, parts.z_pulses, parts.z_home, config.z);
        let selector =
            MicrostepSelector::new(parts.mode_pins, config.initial_mode);
        Self {
            carriage: Carriage::new(x, z, selector),
            dispenser: Dispenser::new(parts.relays, config.dosing),
            scale: Scale::new(parts.load_cell, config.weighing),
            clock: parts.clock,
            console: parts.console,
            slots: config.slots,
            sequence: config.sequence,
        }
    }

    pub fn carriage(&self) -> &BoardCarriage<B> {
        &self.carriage
    }

    pub fn console(&self) -> &B::Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut B::Console {
        &mut self.console
    }

    /// Brings the machine to a known state after power-on.
    ///
    /// Unless both home switches are already engaged, Z and then X are
    /// homed. A homing failure is logged and startup carries on. Either
    /// way, wherever the axes are now is taken as zero.
    pub fn startup(&mut self) {
        let ready = if self.scale.is_ready() { "YES" } else { "NO" };
        info!(self.console, "HX711 ready: {}", ready);

        if self.carriage.at_home() {
            info!(self.console, "Already at home (X=HIGH, Z=HIGH).");
        } else {
            info!(self.console, "Not at home. Homing Z then X...");
            if let Err(e) = self.carriage.home_z(&mut self.clock) {
                error!(self.console, "{}", e);
            }
            if let Err(e) = self.carriage.home_x(&mut self.clock) {
                error!(self.console, "{}", e);
            }
        }

        self.carriage.zero_all();
        info!(
            self.console,
            "=== X/Z move: X={}, Z={} (shared MS, sequential move) ===",
            self.carriage.x().required_mode(),
            self.carriage.z().required_mode()
        );
        info!(self.console, "Waiting for UART frame...");
    }

    /// Pours every command of a frame in order, then parks the carriage.
    pub fn execute(&mut self, frame: &Frame) {
        for command in frame {
            self.pour(command);
        }

        self.carriage.move_z_to(Millimetres::zero());
        if let Err(Error::HomingTimeout(axis)) =
            self.carriage.home_x(&mut self.clock)
        {
            error!(self.console, "{} home timeout after pour.", axis);
        }
    }

    /// Pours a single command. Commands for slots that do not exist are
    /// skipped.
    pub fn pour(&mut self, command: &PourCommand) {
        let slot = match command.slot() {
            Some(slot) => slot,
            None => return,
        };
        self.carriage.move_x_to(self.slots.position(slot));
        match slot.kind() {
            SlotKind::Cycled => self.cycle(command.volume_ml),
            SlotKind::Pump(pump) => self.pump(pump, command.volume_ml),
        }
    }

    /// Lifts the cup into a cycled dispenser once per whole cycle volume.
    ///
    /// Any remainder smaller than one cycle is not poured.
    fn cycle(&mut self, volume_ml: u8) {
        let sequence = self.sequence;
        let cycles = volume_ml
            .checked_div(sequence.cycle_volume_ml)
            .unwrap_or(0);
        for cycle in 0..cycles {
            self.carriage.move_z_relative(sequence.lift_height);
            self.carriage.move_z_relative(-sequence.lift_height);
            if cycle + 1 < cycles {
                self.clock.delay_ms(sequence.cycle_pause);
            }
        }
    }

    /// Raises the cup under a pump outlet, pumps, and checks the weight.
    fn pump(&mut self, pump: PumpId, volume_ml: u8) {
        let clearance = self.sequence.pump_clearance;
        self.carriage.move_z_relative(clearance);

        self.scale.tare();
        self.dispenser.dispense(pump, volume_ml, &mut self.clock);
        if let Err(e) = self.scale.verify_and_topup(
            pump,
            volume_ml,
            &mut self.dispenser,
            &mut self.clock,
            &mut self.console,
        ) {
            warning!(self.console, "{}", e);
        }

        self.carriage.move_z_relative(-clearance);
    }
}

impl<B: Board> FrameHandler for PourSequencer<B> {
    /// Acknowledges the frame, executes it, and reports completion.
    fn handle_frame(&mut self, frame: &Frame) {
        let _ = uwriteln!(&mut self.console, "received");
        self.execute(frame);
        let _ = uwriteln!(&mut self.console, "Done");
    }
}
