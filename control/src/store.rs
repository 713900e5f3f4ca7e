//! The central piece of the control package.

use crate::configuration::{Configuration, InvalidConfiguration};
use crate::drive::DriveState;
use crate::hatch;
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::input::store::Store as Input;
use crate::input::AxisId;
use crate::intake;
use crate::lift::LiftState;
use crate::output::{Activities, Activity, DesiredOutput};
use crate::reset::ResetSequence;

/// The main store of input abstraction and controller state.
///
/// This struct takes `InputSnapshot` on its input once per tick, passes it
/// to the input abstraction, and runs all controllers over it in a fixed
/// order: drive, lift, intake, hatch. Each controller owns its own part of
/// the state and no two controllers touch the same field.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    configuration: Configuration,
    pub(crate) input: Input,
    pub(crate) drive: DriveState,
    pub(crate) lift: LiftState,
    clock_ms: u32,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::with_configuration(Configuration::default())
    }

    /// # Errors
    ///
    /// Fails with `InvalidConfiguration` when the configuration could not
    /// drive the actuators safely.
    pub fn try_new(configuration: Configuration) -> Result<Self, InvalidConfiguration> {
        configuration.validate()?;
        Ok(Self::with_configuration(configuration))
    }

    fn with_configuration(configuration: Configuration) -> Self {
        Self {
            input: Input::default(),
            drive: DriveState::new(&configuration.drive),
            lift: LiftState::default(),
            clock_ms: 0,
            configuration,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn input(&self) -> &Input {
        &self.input
    }

    #[must_use]
    pub fn drive(&self) -> &DriveState {
        &self.drive
    }

    #[must_use]
    pub fn lift(&self) -> &LiftState {
        &self.lift
    }

    /// Take over the current input as a baseline without reacting to it.
    ///
    /// Buttons held during the warm up will not be reported as pressed on
    /// the next tick and axes start their change detection from here.
    pub fn warm_up(&mut self, snapshot: InputSnapshot) {
        self.input.settle(snapshot);
        self.advance_clock();
    }

    pub fn apply_input_snapshot(&mut self, snapshot: InputSnapshot) -> DesiredOutput {
        self.input.update(snapshot);

        let drive = self.drive.tick(&self.input, &self.configuration.drive);
        let lift = self.lift.tick(&self.input, self.clock_ms, &self.configuration);
        let intake = intake::tick(&self.input, &self.configuration.intake);
        let hatch = hatch::tick(&self.input);

        let activity = if self.configuration.debug {
            self.input_activity()
        } else {
            Activities::new()
        };

        self.advance_clock();

        DesiredOutput {
            drive,
            lift,
            intake,
            hatch,
            activity,
        }
    }

    /// Start the reset sequence returning all actuators to idle.
    pub fn reset(&mut self) -> ResetSequence<'_> {
        ResetSequence::new(self)
    }

    pub(crate) fn drain_lift_step(&mut self) -> Option<f64> {
        self.lift.drain_step(&self.configuration.lift)
    }

    pub(crate) fn reset_drive(&mut self) {
        self.drive.reset(&self.configuration.drive);
    }

    fn input_activity(&self) -> Activities {
        let mut activities = Activities::new();
        for id in AxisId::ALL {
            let axis = &self.input.axes[id.index()];
            if axis.moved() {
                // NOTE: The capacity is set to accomodate for all axes and
                // buttons at once.
                let _: Result<_, _> = activities.push(Activity::AxisMoved {
                    axis: id,
                    value: axis.value,
                });
            }
        }
        for (number, button) in self.input.numbered_buttons() {
            if button.pressed {
                let _: Result<_, _> = activities.push(Activity::ButtonPressed(number));
            }
        }
        activities
    }

    fn advance_clock(&mut self) {
        self.clock_ms = self
            .clock_ms
            .wrapping_add(self.configuration.tick_period_ms);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::hatch::HatchPosition;
    use crate::reset::ResetStep;

    #[test]
    fn it_should_be_possible_to_initialize_store() {
        let _store = Store::new();
    }

    #[test]
    fn when_configuration_is_invalid_store_is_not_created() {
        let mut configuration = Configuration::default();
        configuration.lift.raise_step = -1.0;
        assert_eq!(
            Store::try_new(configuration).err(),
            Some(InvalidConfiguration::LiftSteps)
        );
    }

    fn raise() -> InputSnapshot {
        InputSnapshot {
            left_trigger: 1.0,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn when_snapshot_is_applied_all_controllers_react() {
        let mut store = Store::new();
        let output = store.apply_input_snapshot(InputSnapshot {
            left_y: 0.5,
            right_x: 0.3,
            left_trigger: 1.0,
            left_bumper: true,
            x: true,
            ..InputSnapshot::default()
        });

        assert_relative_eq!(output.drive.forward, -0.25);
        assert_relative_eq!(output.drive.turn, 0.2);
        assert_relative_eq!(output.lift, 0.45);
        assert_eq!(output.intake, Some(0.33));
        assert_eq!(output.hatch, Some(HatchPosition::Reverse));
        assert!(output.activity.is_empty());
    }

    #[test]
    fn lift_is_commanded_on_every_tick_even_without_change() {
        let mut store = Store::new();
        for _ in 0..3 {
            let output = store.apply_input_snapshot(InputSnapshot::default());
            assert_relative_eq!(output.lift, 0.0);
        }
    }

    #[test]
    fn when_reset_it_drains_lift_before_anything_else() {
        let mut store = Store::new();
        store.apply_input_snapshot(raise());
        store.apply_input_snapshot(raise());
        store.apply_input_snapshot(InputSnapshot {
            left_stick: true,
            a: true,
            ..InputSnapshot::default()
        });
        assert!(store.drive().reversed);
        assert_relative_eq!(store.drive().speed_ratio, 2.0 / 3.0);

        let mut lift_steps = 0;
        let mut tail = heapless::Vec::<ResetStep, 4>::new();
        let mut previous = store.lift().speed;
        for step in store.reset() {
            match step {
                ResetStep::Lift(voltage) => {
                    assert!(tail.is_empty(), "lift drained after other steps");
                    assert!(voltage < previous && voltage >= 0.0);
                    previous = voltage;
                    lift_steps += 1;
                }
                other => {
                    tail.push(other).unwrap();
                }
            }
        }

        assert_eq!(lift_steps, 92);
        assert_eq!(store.lift().speed, 0.0);
        assert_eq!(
            &tail[..],
            &[
                ResetStep::Intake(0.0),
                ResetStep::Hatch(HatchPosition::Forward),
                ResetStep::ResetEncoder
            ]
        );
        assert!(!store.drive().reversed);
        assert_relative_eq!(store.drive().speed_ratio, 0.5);
    }

    #[test]
    fn when_reset_sequence_is_dropped_early_drive_is_reset_anyway() {
        let mut store = Store::new();
        store.apply_input_snapshot(InputSnapshot {
            right_stick: true,
            a: true,
            ..InputSnapshot::default()
        });
        assert!(store.drive().reversed);

        let _ = store.reset();

        assert!(!store.drive().reversed);
        assert_relative_eq!(store.drive().speed_ratio, 0.5);
    }

    #[test]
    fn when_reset_with_lift_at_rest_it_only_stops_other_actuators() {
        let mut store = Store::new();
        assert_eq!(store.reset().count(), 3);
    }

    #[test]
    fn when_warmed_up_with_button_held_it_is_not_pressed_afterwards() {
        let mut store = Store::new();
        let held = InputSnapshot {
            right_bumper: true,
            x: true,
            ..InputSnapshot::default()
        };
        store.warm_up(held);
        let output = store.apply_input_snapshot(held);
        assert_eq!(output.intake, None);
        assert_eq!(output.hatch, None);
    }

    #[test]
    fn when_debugging_moved_axes_and_pressed_buttons_are_reported() {
        let configuration = Configuration {
            debug: true,
            ..Configuration::default()
        };
        let mut store = Store::try_new(configuration).unwrap();
        let snapshot = InputSnapshot {
            right_y: -0.4,
            a: true,
            right_stick: true,
            ..InputSnapshot::default()
        };

        let output = store.apply_input_snapshot(snapshot);
        assert_eq!(
            &output.activity[..],
            &[
                Activity::AxisMoved {
                    axis: AxisId::RightY,
                    value: -0.4
                },
                Activity::ButtonPressed(1),
                Activity::ButtonPressed(10),
            ]
        );

        let output = store.apply_input_snapshot(snapshot);
        assert!(output.activity.is_empty());
    }

    #[test]
    fn when_lock_is_held_during_raise_it_takes_precedence() {
        let mut store = Store::new();
        let held = InputSnapshot {
            y: true,
            ..raise()
        };
        let debounce_ticks = store.configuration().lock_debounce_ticks();
        for _ in 0..=debounce_ticks {
            store.apply_input_snapshot(held);
        }
        assert!(store.lift().locked());
        let speed = store.lift().speed;
        let output = store.apply_input_snapshot(held);
        assert!(output.lift <= speed);
    }
}
