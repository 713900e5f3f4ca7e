//! Actuators commanded by the control loop.

use apollo_control::hatch::HatchPosition;
use apollo_control::reset::ResetStep;
use apollo_control::DesiredOutput;

pub trait DifferentialDrive {
    fn arcade_drive(&mut self, forward: f64, turn: f64, square_inputs: bool);

    /// Toggle the motor safety watchdog stopping the motors when they are
    /// not commanded in time.
    fn set_safety_enabled(&mut self, enabled: bool);
}

pub trait SpeedController {
    /// Set power within [-1, 1].
    fn set(&mut self, power: f64);
}

pub trait DoubleSolenoid {
    fn set(&mut self, position: HatchPosition);
}

pub struct Outputs<D, L, I, H> {
    pub drive: D,
    pub lift: L,
    pub intake: I,
    pub hatch: H,
}

impl<D, L, I, H> Outputs<D, L, I, H>
where
    D: DifferentialDrive,
    L: SpeedController,
    I: SpeedController,
    H: DoubleSolenoid,
{
    pub(crate) fn new(drive: D, lift: L, intake: I, hatch: H) -> Self {
        Self {
            drive,
            lift,
            intake,
            hatch,
        }
    }

    pub fn set(&mut self, desired: &DesiredOutput) {
        let drive = &desired.drive;
        self.drive
            .arcade_drive(drive.forward, drive.turn, drive.square_inputs);
        self.lift.set(desired.lift);
        if let Some(power) = desired.intake {
            self.intake.set(power);
        }
        if let Some(position) = desired.hatch {
            self.hatch.set(position);
        }
    }

    pub(crate) fn apply_reset_step(&mut self, step: ResetStep) {
        match step {
            ResetStep::Lift(voltage) => self.lift.set(voltage),
            ResetStep::Intake(power) => self.intake.set(power),
            ResetStep::Hatch(position) => self.hatch.set(position),
            ResetStep::ResetEncoder => (),
        }
    }
}
