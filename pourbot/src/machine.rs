use arduino_hal::{
    default_serial, delay_ms, pins, prelude::*, Peripherals, Pins,
};
use pourengine::{
    ConstantSpeedStepper, Controller, MachineConfig, MicroSeconds, Parts,
    PourSequencer,
};
use ufmt::uwriteln;

use crate::{
    devices::{Clock, Hx711, LimitSwitch, MicrostepPins, Relay, Stepper},
    uno::{Uno, UnoReader},
};

pub struct Machine {
    reader: UnoReader,
    controller: Controller<PourSequencer<Uno>>,
}

impl Machine {
    const BAUD_RATE: u32 = 115200;
    /// Time given to the host to come up before homing starts.
    const STARTUP_DELAY_MS: u16 = 10_000;

    pub fn new() -> Self {
        let peripherals: Peripherals = unsafe { Peripherals::steal() };
        let pins: Pins = pins!(peripherals);
        let serial = default_serial!(peripherals, pins, Self::BAUD_RATE);
        let (reader, mut writer) = serial.split();

        // Announce the machine!
        delay_ms(100);
        uwriteln!(&mut writer, "POURBOT").unwrap_infallible();

        let config = MachineConfig::default();

        // Steppers
        let pulse_width = MicroSeconds::new(5);
        let direction_settle = MicroSeconds::new(10);
        let x_stepper = Stepper::new(
            pins.d2.into_output(),
            pins.d3.into_output(),
            pulse_width,
            direction_settle,
        );
        let z_stepper = Stepper::new(
            pins.d4.into_output(),
            pins.d5.into_output(),
            pulse_width,
            direction_settle,
        );
        let mode_pins = MicrostepPins::new(
            pins.d6.into_output().downgrade(),
            pins.d7.into_output().downgrade(),
            pins.d8.into_output().downgrade(),
        );

        // Pumps and scale
        let relays = [
            Relay::new(pins.d11.into_output().downgrade()),
            Relay::new(pins.d12.into_output().downgrade()),
            Relay::new(pins.d13.into_output().downgrade()),
            Relay::new(pins.a0.into_output().downgrade()),
        ];
        let load_cell = Hx711::new(
            pins.a1.into_floating_input().downgrade(),
            pins.a2.into_output().downgrade(),
            config.weighing.calibration,
        );

        let parts = Parts::<Uno> {
            x_pulses: ConstantSpeedStepper::new(x_stepper, config.x.max_speed),
            x_home: LimitSwitch::new(pins.d9.into_pull_up_input()),
            z_pulses: ConstantSpeedStepper::new(z_stepper, config.z.max_speed),
            z_home: LimitSwitch::new(pins.d10.into_pull_up_input()),
            mode_pins,
            relays,
            load_cell,
            clock: Clock::new(peripherals.TC1),
            console: writer,
        };
        let mut sequencer = PourSequencer::new(parts, config);

        delay_ms(Self::STARTUP_DELAY_MS);
        sequencer.startup();

        Self {
            reader,
            controller: Controller::new(sequencer),
        }
    }

    /// Blocks for the next byte from the host and processes it.
    ///
    /// A byte which completes a frame does not return until the frame has
    /// been poured.
    pub fn next_byte(&mut self) {
        let byte = nb::block!(self.reader.read()).unwrap_infallible();
        self.controller.push_byte(byte);
    }
}
