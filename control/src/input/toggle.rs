//! Toggle flipped by a steadily held button.
//!
//! A plain press edge flips as soon as the button goes down. This toggle
//! instead waits until the button was kept down for the whole debounce window,
//! so a brief press shared with other controls does not flip it by accident.

#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggle {
    pub on: bool,
    last_raw: bool,
    last_transition_ms: u32,
    latched: bool,
}

impl Toggle {
    /// Returns true when the toggle flipped on this update.
    pub fn update(&mut self, down: bool, now_ms: u32, debounce_ms: u32) -> bool {
        if down != self.last_raw {
            self.last_raw = down;
            self.last_transition_ms = now_ms;
            self.latched = false;
        }

        let steady = now_ms.wrapping_sub(self.last_transition_ms) >= debounce_ms;
        if down && steady && !self.latched {
            self.latched = true;
            self.on = !self.on;
            return true;
        }

        false
    }
}
