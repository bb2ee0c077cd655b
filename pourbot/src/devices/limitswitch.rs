use arduino_hal::port::{
    mode::{Input, PullUp},
    Pin, PinOps,
};
use pourengine::LimitSwitchState;

/// Home switch wired between the pin and the pull-up.
///
/// The switch opens when pressed, so the pin reads high at home.
///
/// # Type Parameters
///
/// - `P`: pin
pub struct LimitSwitch<P> {
    pin: Pin<Input<PullUp>, P>,
}
impl<P: PinOps> LimitSwitch<P> {
    pub fn new(pin: Pin<Input<PullUp>, P>) -> Self {
        Self { pin }
    }
}

impl<P: PinOps> pourengine::LimitSwitch for LimitSwitch<P> {
    fn read_limitswitch_state(&self) -> LimitSwitchState {
        if self.pin.is_high() {
            LimitSwitchState::AtLimit
        } else {
            LimitSwitchState::NotAtLimit
        }
    }
}
