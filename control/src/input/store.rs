//! Process all input peripherals over time.

use super::axis::Axis;
use super::button::{Button, EdgeState};
use super::snapshot::Snapshot;
use super::{AxisId, ButtonId, Hand};

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into a set of abstracted peripherals
/// providing edge detection and change detection. It is updated exactly once
/// per tick and all controllers read the same state during that tick.
///
/// Note that despite all its attributes are public, they should be only read
/// from.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub axes: [Axis; 6],
    pub a: Button,
    pub b: Button,
    pub x: Button,
    pub y: Button,
    pub left_bumper: Button,
    pub right_bumper: Button,
    pub left_stick: Button,
    pub right_stick: Button,
    pub encoder_rate: f64,
}

impl Store {
    pub fn update(&mut self, snapshot: Snapshot) {
        for (axis, value) in self.axes.iter_mut().zip(snapshot.axes()) {
            axis.update(value);
        }
        self.a.update(snapshot.a);
        self.b.update(snapshot.b);
        self.x.update(snapshot.x);
        self.y.update(snapshot.y);
        self.left_bumper.update(snapshot.left_bumper);
        self.right_bumper.update(snapshot.right_bumper);
        self.left_stick.update(snapshot.left_stick);
        self.right_stick.update(snapshot.right_stick);
        self.encoder_rate = snapshot.encoder_rate;
    }

    /// Take over the snapshot as the new baseline, reporting no edges and no
    /// movement.
    pub fn settle(&mut self, snapshot: Snapshot) {
        for (axis, value) in self.axes.iter_mut().zip(snapshot.axes()) {
            axis.settle(value);
        }
        self.a.settle(snapshot.a);
        self.b.settle(snapshot.b);
        self.x.settle(snapshot.x);
        self.y.settle(snapshot.y);
        self.left_bumper.settle(snapshot.left_bumper);
        self.right_bumper.settle(snapshot.right_bumper);
        self.left_stick.settle(snapshot.left_stick);
        self.right_stick.settle(snapshot.right_stick);
        self.encoder_rate = snapshot.encoder_rate;
    }

    #[must_use]
    pub fn axis(&self, id: AxisId) -> f64 {
        self.axes[id.index()].value
    }

    #[must_use]
    pub fn trigger(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Left => self.axis(AxisId::LeftTrigger),
            Hand::Right => self.axis(AxisId::RightTrigger),
        }
    }

    #[must_use]
    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::A => &self.a,
            ButtonId::B => &self.b,
            ButtonId::X => &self.x,
            ButtonId::Y => &self.y,
            ButtonId::LeftBumper => &self.left_bumper,
            ButtonId::RightBumper => &self.right_bumper,
        }
    }

    #[must_use]
    pub fn edge(&self, id: ButtonId) -> EdgeState {
        self.button(id).edge()
    }

    #[must_use]
    pub fn stick_reverse_pressed(&self) -> bool {
        self.left_stick.pressed || self.right_stick.pressed
    }

    /// Buttons in their raw gamepad numbering, starting from 1.
    #[must_use]
    pub fn numbered_buttons(&self) -> [(u8, &Button); 8] {
        [
            (1, &self.a),
            (2, &self.b),
            (3, &self.x),
            (4, &self.y),
            (5, &self.left_bumper),
            (6, &self.right_bumper),
            (9, &self.left_stick),
            (10, &self.right_stick),
        ]
    }
}
