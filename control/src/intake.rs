//! Intake of two opposing motors driven by the bumpers.
//!
//! Holding the left bumper pulls cargo in. Pressing the right bumper pushes
//! it out and keeps pushing until a bumper is released, since the actuator
//! keeps its last command. Releasing either bumper stops the intake.

use crate::configuration::IntakeConfiguration;
use crate::input::button::EdgeState;
use crate::input::store::Store as Input;
use crate::input::ButtonId;
use crate::rules::{first_match, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Action {
    Pull,
    Push,
    Stop,
}

const RULES: &[Rule<Input, Action>] = &[
    (is_pulling, Action::Pull),
    (is_pushing, Action::Push),
    (is_released, Action::Stop),
];

fn is_pulling(input: &Input) -> bool {
    input.edge(ButtonId::LeftBumper).is_down() && !input.edge(ButtonId::RightBumper).is_down()
}

fn is_pushing(input: &Input) -> bool {
    input.edge(ButtonId::RightBumper) == EdgeState::Pressed
        && !input.edge(ButtonId::LeftBumper).is_down()
}

fn is_released(input: &Input) -> bool {
    input.edge(ButtonId::LeftBumper) == EdgeState::Released
        || input.edge(ButtonId::RightBumper) == EdgeState::Released
}

/// Returns the power for the intake, or `None` when the last command should
/// stay in effect.
#[must_use]
pub fn tick(input: &Input, configuration: &IntakeConfiguration) -> Option<f64> {
    first_match(RULES, input).map(|action| match action {
        Action::Pull => configuration.pull_power,
        Action::Push => configuration.push_power,
        Action::Stop => 0.0,
    })
}
