//! Structures used to pass the current state of the gamepad and sensors.

/// The current state of all inputs.
///
/// `Snapshot` is meant to be passed from the hardware binding to the control
/// package once per tick. It carries raw data only. Edge detection and
/// debouncing are done by the input store.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub left_x: f64,
    pub left_y: f64,
    pub left_trigger: f64,
    pub right_trigger: f64,
    pub right_x: f64,
    pub right_y: f64,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_bumper: bool,
    pub right_bumper: bool,
    pub left_stick: bool,
    pub right_stick: bool,
    /// Rate reported by the lift encoder.
    pub encoder_rate: f64,
}

impl Snapshot {
    /// Raw axis values in the order the gamepad numbers them.
    #[must_use]
    pub fn axes(&self) -> [f64; 6] {
        [
            self.left_x,
            self.left_y,
            self.left_trigger,
            self.right_trigger,
            self.right_x,
            self.right_y,
        ]
    }
}
