//! Lift driven by a ramped voltage with encoder feedback.
//!
//! The lift has no position control. The left trigger raises it by pushing
//! the voltage up until the encoder reports motion. The right trigger lowers
//! it down to the holding voltage, or all the way to zero together with B.
//! When no trigger is pressed the voltage bleeds down towards the holding
//! voltage. A steadily held lock button freezes operator input and
//! leaves only the bleeding active.
//!
//! The decision is made fresh every tick by walking an ordered list of rules.
//! The order of the rules is significant.

use apollo_motion::ramp::{Direction, Ramp};

use crate::configuration::{Configuration, LiftConfiguration};
use crate::input::store::Store as Input;
use crate::input::toggle::Toggle;
use crate::input::{ButtonId, Hand};
use crate::log;
use crate::rules::{first_match, Rule};

/// Persistent state of the lift controller.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LiftState {
    /// Voltage requested from the lift, within `[0, high_volt]`.
    pub speed: f64,
    pub lock: Toggle,
    /// The last voltage sent to the actuator.
    pub last_command: f64,
}

/// Everything the lift rules decide on, gathered at the start of a tick.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy)]
struct Context {
    speed: f64,
    last_command: f64,
    locked: bool,
    raising: bool,
    lowering: bool,
    lowering_fully: bool,
    moving: bool,
    low_volt: f64,
    high_volt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum Regime {
    AutoLower,
    Launch,
    Climb,
    Hold,
    LowerFully,
    LowerToHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum AutoLower {
    Bleed,
    Settle,
    Recover,
}

const RULES: &[Rule<Context, Regime>] = &[
    (is_locked, Regime::AutoLower),
    (is_at_rest_while_raising, Regime::Launch),
    (is_stalled_while_raising, Regime::Climb),
    (is_raising, Regime::Hold),
    (is_lowering_fully, Regime::LowerFully),
    (is_lowering_to_hold, Regime::LowerToHold),
];

const AUTO_LOWER_RULES: &[Rule<Context, AutoLower>] = &[
    (is_falling_above_holding, AutoLower::Bleed),
    (is_resting_below_holding, AutoLower::Settle),
    (is_negative, AutoLower::Recover),
];

fn is_locked(c: &Context) -> bool {
    c.locked
}

// Exact comparison with zero is kept on purpose, it marks a lift at rest.
#[allow(clippy::float_cmp)]
fn is_at_rest_while_raising(c: &Context) -> bool {
    c.raising && (c.speed == 0.0 || c.speed <= c.low_volt)
}

fn is_stalled_while_raising(c: &Context) -> bool {
    c.raising && !c.moving && c.speed <= c.high_volt
}

fn is_raising(c: &Context) -> bool {
    c.raising
}

fn is_lowering_fully(c: &Context) -> bool {
    c.lowering && c.lowering_fully
}

fn is_lowering_to_hold(c: &Context) -> bool {
    c.lowering && c.speed > 0.0
}

fn is_falling_above_holding(c: &Context) -> bool {
    round_to_hundredths(c.speed) > c.low_volt && c.moving
}

fn is_resting_below_holding(c: &Context) -> bool {
    let speed = round_to_hundredths(c.speed);
    0.0 < speed && speed < c.low_volt && !c.moving
}

fn is_negative(c: &Context) -> bool {
    c.speed < 0.0
}

impl LiftState {
    #[must_use]
    pub fn locked(&self) -> bool {
        self.lock.on
    }

    /// Evaluate one tick and return the voltage to send to the actuator.
    pub fn tick(&mut self, input: &Input, now_ms: u32, configuration: &Configuration) -> f64 {
        if self
            .lock
            .update(input.y.down, now_ms, configuration.lock_debounce_ms)
        {
            log::info!("Lift lock={:?}", self.lock.on);
        }

        let context = self.context(input, configuration);
        let regime = first_match(RULES, &context).unwrap_or(Regime::AutoLower);
        self.apply(regime, &context, &configuration.lift);

        self.last_command = self.speed;
        self.speed
    }

    /// Take one step of the safe drain to zero.
    ///
    /// Returns the voltage to send to the actuator, or `None` once the lift
    /// is fully drained.
    pub fn drain_step(&mut self, configuration: &LiftConfiguration) -> Option<f64> {
        if self.speed > 0.0 {
            self.speed = lowering_ramp(configuration).advance(self.speed, Direction::Down);
            self.last_command = self.speed;
            Some(self.speed)
        } else {
            if self.speed < 0.0 {
                log::warning!("Recovered negative lift speed during drain");
            }
            self.speed = 0.0;
            None
        }
    }

    fn context(&self, input: &Input, configuration: &Configuration) -> Context {
        let threshold = configuration.trigger_threshold;
        Context {
            speed: self.speed,
            last_command: self.last_command,
            locked: self.lock.on,
            raising: input.trigger(Hand::Left) > threshold,
            lowering: input.trigger(Hand::Right) > threshold,
            lowering_fully: input.edge(ButtonId::B).is_down(),
            moving: is_moving(input.encoder_rate),
            low_volt: configuration.lift.low_volt,
            high_volt: configuration.lift.high_volt,
        }
    }

    fn apply(&mut self, regime: Regime, context: &Context, configuration: &LiftConfiguration) {
        match regime {
            Regime::Launch => {
                self.speed = lowering_ramp(configuration).clamp(configuration.init_volt);
            }
            Regime::Climb => {
                self.speed = raising_ramp(configuration).advance(self.speed, Direction::Up);
            }
            Regime::Hold => {}
            Regime::LowerFully => {
                if self.speed > 0.0 {
                    self.speed = lowering_ramp(configuration).advance(self.speed, Direction::Down);
                }
            }
            Regime::LowerToHold => {
                let step = if round_to_hundredths(self.last_command) > configuration.low_volt {
                    configuration.lower_step
                } else {
                    hold_floor_step(configuration)
                };
                // Never below the holding voltage and never up towards it.
                let target = self.speed.min(configuration.low_volt);
                let ramp = Ramp::new(step, 0.0, configuration.high_volt);
                self.speed = ramp.toward(self.speed, target);
            }
            Regime::AutoLower => self.auto_lower(context, configuration),
        }
    }

    fn auto_lower(&mut self, context: &Context, configuration: &LiftConfiguration) {
        match first_match(AUTO_LOWER_RULES, context) {
            Some(AutoLower::Bleed) => {
                self.speed = lowering_ramp(configuration).advance(self.speed, Direction::Down);
            }
            Some(AutoLower::Settle) => {
                if round_to_hundredths(self.last_command) > 0.0 {
                    self.speed = lowering_ramp(configuration).advance(self.speed, Direction::Down);
                }
            }
            Some(AutoLower::Recover) => {
                log::warning!("Recovered negative lift speed");
                self.speed = 0.0;
            }
            None => {}
        }
    }
}

fn raising_ramp(configuration: &LiftConfiguration) -> Ramp {
    Ramp::new(configuration.raise_step, 0.0, configuration.high_volt)
}

fn lowering_ramp(configuration: &LiftConfiguration) -> Ramp {
    Ramp::new(configuration.lower_step, 0.0, configuration.high_volt)
}

// Step used once the commanded voltage reached the holding voltage. It is the
// same as the regular lowering step, see DESIGN.md.
fn hold_floor_step(configuration: &LiftConfiguration) -> f64 {
    configuration.lower_step
}

/// The encoder counts as moving once the truncated magnitude of its rate is
/// non-zero.
fn is_moving(rate: f64) -> bool {
    libm::trunc(libm::fabs(rate)) > 0.0
}

fn round_to_hundredths(x: f64) -> f64 {
    libm::round(x * 100.0) / 100.0
}
