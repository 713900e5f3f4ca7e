//! Input peripherals of the robot and their state over time.

pub mod axis;
pub mod button;
pub mod snapshot;
pub mod store;
pub mod toggle;

/// Logical buttons the controllers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Switches the drive speed ratio.
    A,
    /// Lowers the lift all the way together with the right trigger.
    B,
    /// Releases the hatch while held.
    X,
    /// Locks the lift when held steadily.
    Y,
    LeftBumper,
    RightBumper,
}

impl ButtonId {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Analog axes in the order the gamepad numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    LeftX,
    LeftY,
    LeftTrigger,
    RightTrigger,
    RightX,
    RightY,
}

impl AxisId {
    pub const ALL: [AxisId; 6] = [
        AxisId::LeftX,
        AxisId::LeftY,
        AxisId::LeftTrigger,
        AxisId::RightTrigger,
        AxisId::RightX,
        AxisId::RightY,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Side of the gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Left,
    Right,
}
