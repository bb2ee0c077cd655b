use arduino_hal::{
    hal::port::{PD0, PD1},
    pac::USART0,
    port::{
        mode::{Input, Output},
        Pin, D10, D2, D3, D4, D5, D9,
    },
    usart::{UsartReader, UsartWriter},
};
use pourengine::{Board, ConstantSpeedStepper};

use crate::devices::{
    Clock, Delay, Hx711, LimitSwitch, MicrostepPins, Relay, Stepper,
};

pub type UnoReader = UsartReader<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;
pub type UnoWriter = UsartWriter<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;

/// The pour carriage on an Arduino Uno.
///
/// | signal        | pin          |
/// |---------------|--------------|
/// | X step, dir   | D2, D3       |
/// | Z step, dir   | D4, D5       |
/// | MS0, MS1, MS2 | D6, D7, D8   |
/// | X home, Z home| D9, D10      |
/// | relays 1 to 4 | D11, D12, D13, A0 |
/// | HX711 DT, SCK | A1, A2       |
pub struct Uno;

impl Board for Uno {
    type XPulses = ConstantSpeedStepper<Stepper<D2, D3>, Delay>;
    type XHome = LimitSwitch<D9>;
    type ZPulses = ConstantSpeedStepper<Stepper<D4, D5>, Delay>;
    type ZHome = LimitSwitch<D10>;
    type ModePins = MicrostepPins;
    type Relay = Relay;
    type LoadCell = Hx711;
    type Clock = Clock;
    type Console = UnoWriter;
}
