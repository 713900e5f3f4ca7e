//! Arcade drive with a two-speed ratio and a reversible forward axis.

use crate::configuration::DriveConfiguration;
use crate::input::button::EdgeState;
use crate::input::store::Store as Input;
use crate::input::{AxisId, ButtonId};
use crate::log;

/// Persistent state of the drive controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveState {
    pub reversed: bool,
    pub speed_ratio: f64,
}

/// Request passed to the arcade drive of the drivetrain.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveCommand {
    pub forward: f64,
    pub turn: f64,
    pub square_inputs: bool,
}

impl DriveState {
    #[must_use]
    pub fn new(configuration: &DriveConfiguration) -> Self {
        Self {
            reversed: false,
            speed_ratio: configuration.slow_ratio,
        }
    }

    /// Return to forward driving at the slow ratio.
    pub fn reset(&mut self, configuration: &DriveConfiguration) {
        *self = Self::new(configuration);
    }

    pub fn tick(&mut self, input: &Input, configuration: &DriveConfiguration) -> DriveCommand {
        if input.edge(ButtonId::A) == EdgeState::Pressed {
            self.switch_speed_ratio(configuration);
        }

        if input.stick_reverse_pressed() {
            self.reversed = !self.reversed;
            log::info!("Drive reversed={:?}", self.reversed);
        }

        let throttle = input.axis(AxisId::LeftY) * self.speed_ratio;
        let turn = input.axis(AxisId::RightX) * configuration.turn_ratio;

        // Only the forward axis follows the driver's seat. Turning stays as is.
        let forward = if self.reversed { throttle } else { -throttle };

        DriveCommand {
            forward,
            turn,
            square_inputs: configuration.square_inputs,
        }
    }

    fn switch_speed_ratio(&mut self, configuration: &DriveConfiguration) {
        #[allow(clippy::float_cmp)]
        let is_slow = self.speed_ratio == configuration.slow_ratio;
        self.speed_ratio = if is_slow {
            configuration.fast_ratio
        } else {
            configuration.slow_ratio
        };
        log::info!("Drive speed ratio={:?}", self.speed_ratio);
    }
}
