//! Sampling of the gamepad and the lift encoder.
//!
//! All devices are read once at the start of a tick and the resulting
//! snapshot is shared by all controllers.

use apollo_control::input::{AxisId, ButtonId, Hand};
use apollo_control::InputSnapshot;

pub trait Gamepad {
    /// Raw value of the axis, expected within [-1, 1].
    fn axis(&self, axis: AxisId) -> f64;

    fn button(&self, button: ButtonId) -> bool;

    fn stick_button(&self, hand: Hand) -> bool;

    /// Value of the analog trigger, expected within [0, 1].
    fn trigger(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Left => self.axis(AxisId::LeftTrigger),
            Hand::Right => self.axis(AxisId::RightTrigger),
        }
    }
}

pub trait Encoder {
    fn rate(&self) -> f64;

    /// Zero the accumulated count.
    fn reset(&mut self);
}

pub struct Inputs<G, E> {
    pub gamepad: G,
    pub encoder: E,
}

impl<G: Gamepad, E: Encoder> Inputs<G, E> {
    pub fn new(gamepad: G, encoder: E) -> Self {
        Self { gamepad, encoder }
    }

    pub fn sample(&self) -> InputSnapshot {
        let gamepad = &self.gamepad;
        InputSnapshot {
            left_x: stick(gamepad.axis(AxisId::LeftX)),
            left_y: stick(gamepad.axis(AxisId::LeftY)),
            left_trigger: trigger(gamepad.trigger(Hand::Left)),
            right_trigger: trigger(gamepad.trigger(Hand::Right)),
            right_x: stick(gamepad.axis(AxisId::RightX)),
            right_y: stick(gamepad.axis(AxisId::RightY)),
            a: gamepad.button(ButtonId::A),
            b: gamepad.button(ButtonId::B),
            x: gamepad.button(ButtonId::X),
            y: gamepad.button(ButtonId::Y),
            left_bumper: gamepad.button(ButtonId::LeftBumper),
            right_bumper: gamepad.button(ButtonId::RightBumper),
            left_stick: gamepad.stick_button(Hand::Left),
            right_stick: gamepad.stick_button(Hand::Right),
            encoder_rate: self.encoder.rate(),
        }
    }

    pub fn reset_encoder(&mut self) {
        self.encoder.reset();
    }
}

fn stick(value: f64) -> f64 {
    within(value, -1.0, 1.0)
}

fn trigger(value: f64) -> f64 {
    within(value, 0.0, 1.0)
}

// Unreadable values are treated as a centered stick or a released trigger.
fn within(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlib::{Journal, MockEncoder, MockGamepad};

    #[test]
    fn when_sampled_it_reads_all_devices() {
        let journal = Journal::new();
        let mut gamepad = MockGamepad::default();
        gamepad.set_axis(AxisId::LeftY, -0.5);
        gamepad.set_axis(AxisId::RightTrigger, 0.95);
        gamepad.set_button(ButtonId::Y, true);
        gamepad.set_stick_button(Hand::Right, true);
        let mut encoder = MockEncoder::new(&journal);
        encoder.rate = 3.0;
        let inputs = Inputs::new(gamepad, encoder);

        let snapshot = inputs.sample();

        assert_relative_eq!(snapshot.left_y, -0.5);
        assert_relative_eq!(snapshot.right_trigger, 0.95);
        assert!(snapshot.y);
        assert!(snapshot.right_stick);
        assert!(!snapshot.left_stick);
        assert_relative_eq!(snapshot.encoder_rate, 3.0);
    }

    #[test]
    fn when_device_reports_out_of_range_values_they_are_clamped() {
        let journal = Journal::new();
        let mut gamepad = MockGamepad::default();
        gamepad.set_axis(AxisId::LeftX, 4.0);
        gamepad.set_axis(AxisId::RightX, f64::NAN);
        gamepad.set_axis(AxisId::LeftTrigger, -0.3);
        let inputs = Inputs::new(gamepad, MockEncoder::new(&journal));

        let snapshot = inputs.sample();

        assert_relative_eq!(snapshot.left_x, 1.0);
        assert_relative_eq!(snapshot.right_x, 0.0);
        assert_relative_eq!(snapshot.left_trigger, 0.0);
    }
}
