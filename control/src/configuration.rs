//! Tunable constants of all controllers.
//!
//! The defaults are the values the robot competes with. They are grouped per
//! controller so a binding can override a single group without repeating the
//! rest.

/// Complete configuration of the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Period in which the scheduler invokes the control loop.
    pub tick_period_ms: u32,
    /// Analog trigger value that must be exceeded to count as pressed.
    pub trigger_threshold: f64,
    /// How long the lift lock button must be held before the lock flips.
    pub lock_debounce_ms: u32,
    /// Report moved axes and pressed buttons on every tick.
    pub debug: bool,
    pub drive: DriveConfiguration,
    pub lift: LiftConfiguration,
    pub intake: IntakeConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfiguration {
    /// Forward ratio used after reset.
    pub slow_ratio: f64,
    /// Forward ratio selected by the speed toggle.
    pub fast_ratio: f64,
    /// Fixed ratio applied to the turn axis.
    pub turn_ratio: f64,
    pub square_inputs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LiftConfiguration {
    /// Ceiling of the lift voltage.
    pub high_volt: f64,
    /// Voltage the lift jumps to when it starts raising.
    pub init_volt: f64,
    /// Holding voltage keeping the lift balanced against gravity.
    pub low_volt: f64,
    pub raise_step: f64,
    pub lower_step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntakeConfiguration {
    /// Power pulling cargo in while the left bumper is held.
    pub pull_power: f64,
    /// Power pushing cargo out after the right bumper is pressed.
    pub push_power: f64,
}

/// Reason why a configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidConfiguration {
    TickPeriod,
    TriggerThreshold,
    DriveRatio,
    LiftVoltages,
    LiftSteps,
    IntakePower,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tick_period_ms: 20,
            trigger_threshold: 0.9,
            lock_debounce_ms: 500,
            debug: false,
            drive: DriveConfiguration::default(),
            lift: LiftConfiguration::default(),
            intake: IntakeConfiguration::default(),
        }
    }
}

impl Default for DriveConfiguration {
    fn default() -> Self {
        Self {
            slow_ratio: 0.5,
            fast_ratio: 2.0 / 3.0,
            turn_ratio: 2.0 / 3.0,
            square_inputs: true,
        }
    }
}

impl Default for LiftConfiguration {
    fn default() -> Self {
        Self {
            high_volt: 0.9,
            init_volt: 0.45,
            low_volt: 0.2,
            raise_step: 0.01,
            lower_step: 0.005,
        }
    }
}

impl Default for IntakeConfiguration {
    fn default() -> Self {
        Self {
            pull_power: 0.33,
            push_power: -0.7,
        }
    }
}

impl Configuration {
    /// # Errors
    ///
    /// Returns the first group of values that cannot be used to drive
    /// actuators safely.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.tick_period_ms == 0 {
            return Err(InvalidConfiguration::TickPeriod);
        }
        if !within(self.trigger_threshold, 0.0, 1.0) {
            return Err(InvalidConfiguration::TriggerThreshold);
        }
        self.drive.validate()?;
        self.lift.validate()?;
        self.intake.validate()?;
        Ok(())
    }

    /// Number of ticks the lock button must be held for.
    #[must_use]
    pub fn lock_debounce_ticks(&self) -> u32 {
        let period = self.tick_period_ms.max(1);
        self.lock_debounce_ms.div_ceil(period)
    }
}

impl DriveConfiguration {
    fn validate(&self) -> Result<(), InvalidConfiguration> {
        let ratios = [self.slow_ratio, self.fast_ratio, self.turn_ratio];
        if ratios.iter().all(|r| within(*r, 0.0, 1.0)) && self.slow_ratio != self.fast_ratio {
            Ok(())
        } else {
            Err(InvalidConfiguration::DriveRatio)
        }
    }
}

impl LiftConfiguration {
    fn validate(&self) -> Result<(), InvalidConfiguration> {
        let ordered = 0.0 <= self.low_volt
            && self.low_volt <= self.init_volt
            && self.init_volt <= self.high_volt
            && self.high_volt <= 1.0;
        if !ordered {
            return Err(InvalidConfiguration::LiftVoltages);
        }
        if !(self.raise_step > 0.0 && self.lower_step > 0.0) {
            return Err(InvalidConfiguration::LiftSteps);
        }
        Ok(())
    }
}

impl IntakeConfiguration {
    fn validate(&self) -> Result<(), InvalidConfiguration> {
        if within(self.pull_power, -1.0, 1.0) && within(self.push_power, -1.0, 1.0) {
            Ok(())
        } else {
            Err(InvalidConfiguration::IntakePower)
        }
    }
}

fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}
