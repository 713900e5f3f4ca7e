//! Manage button's state.

/// Transition of a button between two consecutive ticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeState {
    #[default]
    Idle,
    Pressed,
    Held,
    Released,
}

impl EdgeState {
    #[must_use]
    pub fn is_down(self) -> bool {
        matches!(self, Self::Pressed | Self::Held)
    }
}

/// Use this to hold buttons state over time.
///
/// Detects pressing and releasing between two consecutive ticks.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub down: bool,
    pub pressed: bool,
    pub released: bool,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_down = self.down;
        self.down = down;
        self.pressed = !was_down && self.down;
        self.released = was_down && !self.down;
    }

    /// Take over the current state without reporting any edge.
    pub fn settle(&mut self, down: bool) {
        self.update(down);
        self.pressed = false;
        self.released = false;
    }

    #[must_use]
    pub fn edge(&self) -> EdgeState {
        if self.pressed {
            EdgeState::Pressed
        } else if self.released {
            EdgeState::Released
        } else if self.down {
            EdgeState::Held
        } else {
            EdgeState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_was_up_and_now_is_down_it_is_marked_as_pressed() {
        let mut button = Button::default();
        assert!(!button.pressed);
        button.update(true);
        assert!(button.pressed);
        button.update(true);
        assert!(!button.pressed);
        button.update(false);
        assert!(!button.pressed);
    }

    #[test]
    fn when_was_down_and_now_is_up_it_is_marked_as_released() {
        let mut button = Button::default();
        button.update(true);
        assert!(!button.released);
        button.update(false);
        assert!(button.released);
        button.update(false);
        assert!(!button.released);
    }

    #[test]
    fn edges_follow_press_hold_release_sequence() {
        let mut button = Button::default();
        let mut edges = [EdgeState::Idle; 5];
        for (i, down) in [false, true, true, false, false].into_iter().enumerate() {
            button.update(down);
            edges[i] = button.edge();
        }
        assert_eq!(
            edges,
            [
                EdgeState::Idle,
                EdgeState::Pressed,
                EdgeState::Held,
                EdgeState::Released,
                EdgeState::Idle
            ]
        );
    }

    #[test]
    fn when_settled_while_down_it_is_held_without_press() {
        let mut button = Button::default();
        button.settle(true);
        assert_eq!(button.edge(), EdgeState::Held);
        assert!(button.edge().is_down());
        button.settle(false);
        assert_eq!(button.edge(), EdgeState::Idle);
    }
}
