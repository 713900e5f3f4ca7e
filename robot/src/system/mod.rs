//! Abstraction of all devices attached to the robot.
//!
//! Gamepad and encoder are sampled through `Inputs`, actuators are commanded
//! through `Outputs`. Telemetry and vision are fire-and-forget collaborators
//! that never feed back into the control loop.

pub mod inputs;
pub mod outputs;

use apollo_control::output::Activity;
use apollo_control::reset::ResetStep;

pub use self::inputs::{Encoder, Gamepad, Inputs};
pub use self::outputs::{DifferentialDrive, DoubleSolenoid, Outputs, SpeedController};

/// Sink of diagnostic reports.
pub trait Telemetry {
    fn report(&mut self, activity: Activity);
}

/// Camera streaming running outside of the control loop.
pub trait Vision {
    /// Start the streaming. Must not block.
    fn launch(&mut self);
}

/// Set of devices a robot is assembled from.
pub trait Platform {
    type Gamepad: Gamepad;
    type Encoder: Encoder;
    type Drive: DifferentialDrive;
    type Lift: SpeedController;
    type Intake: SpeedController;
    type Hatch: DoubleSolenoid;
    type Telemetry: Telemetry;
    type Vision: Vision;
}

/// Device handles handed over to the system on initialization.
pub struct Config<P: Platform> {
    pub gamepad: P::Gamepad,
    pub encoder: P::Encoder,
    pub drive: P::Drive,
    pub lift: P::Lift,
    pub intake: P::Intake,
    pub hatch: P::Hatch,
    pub telemetry: P::Telemetry,
    pub vision: P::Vision,
}

pub struct System<P: Platform> {
    pub inputs: Inputs<P::Gamepad, P::Encoder>,
    pub outputs: Outputs<P::Drive, P::Lift, P::Intake, P::Hatch>,
    pub telemetry: P::Telemetry,
    pub vision: P::Vision,
}

impl<P: Platform> System<P> {
    #[must_use]
    pub fn init(config: Config<P>) -> Self {
        Self {
            inputs: Inputs::new(config.gamepad, config.encoder),
            outputs: Outputs::new(config.drive, config.lift, config.intake, config.hatch),
            telemetry: config.telemetry,
            vision: config.vision,
        }
    }

    pub fn apply_reset_step(&mut self, step: ResetStep) {
        match step {
            ResetStep::ResetEncoder => self.inputs.reset_encoder(),
            other => self.outputs.apply_reset_step(other),
        }
    }
}
