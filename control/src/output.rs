use heapless::Vec;

use crate::drive::DriveCommand;
use crate::hatch::HatchPosition;
use crate::input::AxisId;

/// Desired state of all actuators after one tick.
///
/// This structure transfers requests to the robot, asking to move the
/// drivetrain and set actuators. Fields holding `None` ask the actuator to
/// keep its last command.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub drive: DriveCommand,
    pub lift: f64,
    pub intake: Option<f64>,
    pub hatch: Option<HatchPosition>,
    /// Input activity, only collected in debug mode.
    pub activity: Activities,
}

/// Input activity reported for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    AxisMoved { axis: AxisId, value: f64 },
    /// Button pressed, in the raw gamepad numbering.
    ButtonPressed(u8),
}

/// Enough room for every axis and button to report at once.
pub type Activities = Vec<Activity, 16>;
