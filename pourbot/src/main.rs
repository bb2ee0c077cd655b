#![no_std]
#![no_main]

mod devices;
mod machine;
mod uno;

use machine::Machine;
use panic_halt as _;

#[arduino_hal::entry]
fn main() -> ! {
    let mut machine = Machine::new();
    loop {
        machine.next_byte();
    }
}
