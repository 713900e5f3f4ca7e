//! Pneumatic hatch release bound directly to a button.
//!
//! The solenoid extends while the button is down and retracts when it is let
//! go. This is a direct binding, the button does not toggle anything.

use crate::input::button::EdgeState;
use crate::input::store::Store as Input;
use crate::input::ButtonId;
use crate::rules::{first_match, Rule};

/// Position of the double solenoid, numbered as the device expects it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HatchPosition {
    /// Both channels released.
    #[default]
    Off = 0,
    /// Retracted.
    Forward = 1,
    /// Extended.
    Reverse = 2,
}

impl HatchPosition {
    #[must_use]
    pub fn raw(self) -> u8 {
        self as u8
    }
}

const RULES: &[Rule<Input, HatchPosition>] = &[
    (is_pressed, HatchPosition::Reverse),
    (is_released, HatchPosition::Forward),
];

fn is_pressed(input: &Input) -> bool {
    input.edge(ButtonId::X) == EdgeState::Pressed
}

fn is_released(input: &Input) -> bool {
    input.edge(ButtonId::X) == EdgeState::Released
}

/// Returns the new solenoid position, or `None` when it should stay.
#[must_use]
pub fn tick(input: &Input) -> Option<HatchPosition> {
    first_match(RULES, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::snapshot::Snapshot;

    #[test]
    fn when_button_is_pressed_and_released_it_extends_then_retracts() {
        let mut input = Input::default();
        let pressed = Snapshot {
            x: true,
            ..Snapshot::default()
        };

        input.update(pressed);
        assert_eq!(tick(&input), Some(HatchPosition::Reverse));
        input.update(pressed);
        assert_eq!(tick(&input), None);
        input.update(Snapshot::default());
        assert_eq!(tick(&input), Some(HatchPosition::Forward));
        input.update(Snapshot::default());
        assert_eq!(tick(&input), None);
    }

    #[test]
    fn positions_keep_device_numbering() {
        assert_eq!(HatchPosition::Off.raw(), 0);
        assert_eq!(HatchPosition::Forward.raw(), 1);
        assert_eq!(HatchPosition::Reverse.raw(), 2);
    }
}
