//! Lifecycle of the robot across its operating modes.
//!
//! The scheduler calls `enter` whenever the mode changes and `periodic` once
//! per tick. Every mode change safely returns all actuators to idle. While
//! disabled, the safing is repeated on every tick.

use apollo_control::{Configuration, InvalidConfiguration, Store};

use crate::log;
use crate::system::{Config, DifferentialDrive, Platform, System, Telemetry, Vision};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Disabled,
    Autonomous,
    Teleop,
}

pub struct Robot<P: Platform> {
    pub system: System<P>,
    store: Store,
    mode: Mode,
    loops: u32,
}

impl<P: Platform> Robot<P> {
    /// Initialize the robot, launch vision and bring all actuators to idle.
    ///
    /// The robot starts disabled.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidConfiguration` when the configuration could not
    /// drive the actuators safely. No device is touched in that case.
    pub fn init(config: Config<P>, configuration: Configuration) -> Result<Self, InvalidConfiguration> {
        let store = Store::try_new(configuration)?;
        let mut system = System::init(config);
        system.vision.launch();

        let mut robot = Self {
            system,
            store,
            mode: Mode::Disabled,
            loops: 0,
        };
        robot.reset();

        log::info!("Robot initialized");
        Ok(robot)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Number of periodic ticks since teleop was last entered.
    #[must_use]
    pub fn loops(&self) -> u32 {
        self.loops
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u32 {
        self.loops
            .saturating_mul(self.store.configuration().tick_period_ms)
    }

    pub fn enter(&mut self, mode: Mode) {
        log::info!("Entering mode={:?}", mode);
        self.mode = mode;
        self.reset();
        if mode == Mode::Teleop {
            self.system.outputs.drive.set_safety_enabled(true);
            self.loops = 0;
        }
    }

    pub fn periodic(&mut self) {
        match self.mode {
            Mode::Disabled => self.reset(),
            Mode::Autonomous | Mode::Teleop => self.tick(),
        }
        self.loops = self.loops.wrapping_add(1);
    }

    fn tick(&mut self) {
        let snapshot = self.system.inputs.sample();
        let desired = self.store.apply_input_snapshot(snapshot);
        self.system.outputs.set(&desired);
        for activity in &desired.activity {
            self.system.telemetry.report(*activity);
        }
    }

    fn reset(&mut self) {
        let snapshot = self.system.inputs.sample();
        self.store.warm_up(snapshot);
        for step in self.store.reset() {
            self.system.apply_reset_step(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlib::{mock_config, Event, Journal, MockPlatform};
    use apollo_control::hatch::HatchPosition;
    use apollo_control::input::{AxisId, ButtonId};

    fn robot(journal: &Journal) -> Robot<MockPlatform<'_>> {
        Robot::init(mock_config(journal), Configuration::default()).unwrap()
    }

    #[test]
    fn when_initialized_vision_is_launched_before_reset() {
        let journal = Journal::new();
        let robot = robot(&journal);
        assert_eq!(robot.mode(), Mode::Disabled);
        assert_eq!(
            &journal.take()[..],
            &[
                Event::VisionLaunched,
                Event::Intake(0.0),
                Event::Hatch(HatchPosition::Forward),
                Event::EncoderReset,
            ]
        );
    }

    #[test]
    fn when_configuration_is_invalid_no_device_is_touched() {
        let journal = Journal::new();
        let configuration = Configuration {
            tick_period_ms: 0,
            ..Configuration::default()
        };
        let result = Robot::init(mock_config(&journal), configuration);
        assert_eq!(result.err(), Some(InvalidConfiguration::TickPeriod));
        assert!(journal.take().is_empty());
    }

    #[test]
    fn when_teleop_is_entered_drive_safety_is_enabled() {
        let journal = Journal::new();
        let mut robot = robot(&journal);
        journal.clear();

        robot.enter(Mode::Teleop);

        assert!(robot.system.outputs.drive.safety_enabled);
        assert_eq!(journal.take().last(), Some(&Event::DriveSafety(true)));
    }

    #[test]
    fn when_autonomous_is_entered_drive_safety_is_untouched() {
        let journal = Journal::new();
        let mut robot = robot(&journal);
        robot.enter(Mode::Autonomous);
        assert!(!robot.system.outputs.drive.safety_enabled);
    }

    #[test]
    fn when_teleop_is_entered_loop_counter_starts_over() {
        let journal = Journal::new();
        let mut robot = robot(&journal);
        robot.enter(Mode::Autonomous);
        for _ in 0..10 {
            robot.periodic();
        }

        robot.enter(Mode::Teleop);
        assert_eq!(robot.loops(), 0);
        for _ in 0..50 {
            robot.periodic();
        }
        assert_eq!(robot.loops(), 50);
        assert_eq!(robot.elapsed_ms(), 1000);
    }

    #[test]
    fn when_enabled_each_tick_commands_drive_and_lift() {
        let journal = Journal::new();
        let mut robot = robot(&journal);
        robot.enter(Mode::Teleop);
        journal.clear();

        robot.system.inputs.gamepad.set_axis(AxisId::LeftY, 0.5);
        robot.periodic();

        assert_eq!(
            &journal.take()[..],
            &[
                Event::Drive {
                    forward: -0.25,
                    turn: 0.0,
                    square_inputs: true
                },
                Event::Lift(0.0),
            ]
        );
    }

    #[test]
    fn when_disabled_each_tick_safes_the_actuators() {
        let journal = Journal::new();
        let mut robot = robot(&journal);
        journal.clear();

        robot.system.inputs.gamepad.set_button(ButtonId::LeftBumper, true);
        robot.periodic();
        robot.periodic();

        let events = journal.take();
        assert_eq!(
            events
                .iter()
                .filter(|event| **event == Event::EncoderReset)
                .count(),
            2
        );
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::Drive { .. })));
        assert!(!events.contains(&Event::Intake(0.33)));
    }

    #[test]
    fn when_debugging_input_activity_is_reported() {
        let journal = Journal::new();
        let configuration = Configuration {
            debug: true,
            ..Configuration::default()
        };
        let mut robot = Robot::init(mock_config(&journal), configuration).unwrap();
        robot.enter(Mode::Teleop);
        journal.clear();

        robot.system.inputs.gamepad.set_button(ButtonId::B, true);
        robot.periodic();

        assert!(journal
            .take()
            .contains(&Event::Report(apollo_control::output::Activity::ButtonPressed(2))));
    }
}
