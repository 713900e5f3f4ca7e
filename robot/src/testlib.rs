//! Recording mock devices for exercising the robot on a host.
//!
//! All actuators record the commands they receive into a shared `Journal`,
//! preserving the order in which the robot issued them.

use core::cell::RefCell;
use core::marker::PhantomData;

use apollo_control::hatch::HatchPosition;
use apollo_control::input::{AxisId, ButtonId, Hand};
use apollo_control::output::Activity;

use crate::system::{
    Config, DifferentialDrive, DoubleSolenoid, Encoder, Gamepad, Platform, SpeedController,
    Telemetry, Vision,
};

/// Command received by one of the mock devices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Drive {
        forward: f64,
        turn: f64,
        square_inputs: bool,
    },
    DriveSafety(bool),
    Lift(f64),
    Intake(f64),
    Hatch(HatchPosition),
    EncoderReset,
    Report(Activity),
    VisionLaunched,
}

pub type Events = heapless::Vec<Event, 1024>;

#[derive(Debug, Default)]
pub struct Journal {
    events: RefCell<Events>,
}

impl Journal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        // NOTE: Events past the capacity are dropped. Tests are expected
        // to take the recorded events often enough.
        let _: Result<_, _> = self.events.borrow_mut().push(event);
    }

    /// Return all recorded events and start over.
    pub fn take(&self) -> Events {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MockGamepad {
    pub axes: [f64; 6],
    pub buttons: [bool; 6],
    pub stick_buttons: [bool; 2],
}

impl MockGamepad {
    pub fn set_axis(&mut self, axis: AxisId, value: f64) {
        self.axes[axis.index()] = value;
    }

    pub fn set_button(&mut self, button: ButtonId, down: bool) {
        self.buttons[button.index()] = down;
    }

    pub fn set_stick_button(&mut self, hand: Hand, down: bool) {
        self.stick_buttons[hand_index(hand)] = down;
    }

    /// Return all axes to the center and release all buttons.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

impl Gamepad for MockGamepad {
    fn axis(&self, axis: AxisId) -> f64 {
        self.axes[axis.index()]
    }

    fn button(&self, button: ButtonId) -> bool {
        self.buttons[button.index()]
    }

    fn stick_button(&self, hand: Hand) -> bool {
        self.stick_buttons[hand_index(hand)]
    }
}

fn hand_index(hand: Hand) -> usize {
    match hand {
        Hand::Left => 0,
        Hand::Right => 1,
    }
}

pub struct MockEncoder<'a> {
    pub rate: f64,
    journal: &'a Journal,
}

impl<'a> MockEncoder<'a> {
    #[must_use]
    pub fn new(journal: &'a Journal) -> Self {
        Self { rate: 0.0, journal }
    }
}

impl Encoder for MockEncoder<'_> {
    fn rate(&self) -> f64 {
        self.rate
    }

    fn reset(&mut self) {
        self.rate = 0.0;
        self.journal.record(Event::EncoderReset);
    }
}

pub struct MockDrive<'a> {
    pub safety_enabled: bool,
    journal: &'a Journal,
}

impl DifferentialDrive for MockDrive<'_> {
    fn arcade_drive(&mut self, forward: f64, turn: f64, square_inputs: bool) {
        self.journal.record(Event::Drive {
            forward,
            turn,
            square_inputs,
        });
    }

    fn set_safety_enabled(&mut self, enabled: bool) {
        self.safety_enabled = enabled;
        self.journal.record(Event::DriveSafety(enabled));
    }
}

pub struct MockSpeedController<'a> {
    pub power: f64,
    event: fn(f64) -> Event,
    journal: &'a Journal,
}

impl SpeedController for MockSpeedController<'_> {
    fn set(&mut self, power: f64) {
        self.power = power;
        self.journal.record((self.event)(power));
    }
}

pub struct MockSolenoid<'a> {
    pub position: HatchPosition,
    journal: &'a Journal,
}

impl DoubleSolenoid for MockSolenoid<'_> {
    fn set(&mut self, position: HatchPosition) {
        self.position = position;
        self.journal.record(Event::Hatch(position));
    }
}

pub struct MockTelemetry<'a> {
    journal: &'a Journal,
}

impl Telemetry for MockTelemetry<'_> {
    fn report(&mut self, activity: Activity) {
        self.journal.record(Event::Report(activity));
    }
}

pub struct MockVision<'a> {
    journal: &'a Journal,
}

impl Vision for MockVision<'_> {
    fn launch(&mut self) {
        self.journal.record(Event::VisionLaunched);
    }
}

pub struct MockPlatform<'a> {
    _journal: PhantomData<&'a Journal>,
}

impl<'a> Platform for MockPlatform<'a> {
    type Gamepad = MockGamepad;
    type Encoder = MockEncoder<'a>;
    type Drive = MockDrive<'a>;
    type Lift = MockSpeedController<'a>;
    type Intake = MockSpeedController<'a>;
    type Hatch = MockSolenoid<'a>;
    type Telemetry = MockTelemetry<'a>;
    type Vision = MockVision<'a>;
}

/// Assemble mock devices all recording into the given journal.
#[must_use]
pub fn mock_config(journal: &Journal) -> Config<MockPlatform<'_>> {
    Config {
        gamepad: MockGamepad::default(),
        encoder: MockEncoder::new(journal),
        drive: MockDrive {
            safety_enabled: false,
            journal,
        },
        lift: MockSpeedController {
            power: 0.0,
            event: Event::Lift,
            journal,
        },
        intake: MockSpeedController {
            power: 0.0,
            event: Event::Intake,
            journal,
        },
        hatch: MockSolenoid {
            position: HatchPosition::Off,
            journal,
        },
        telemetry: MockTelemetry { journal },
        vision: MockVision { journal },
    }
}
