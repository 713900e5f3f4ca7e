//! Bounded stepping of a value towards one of its limits.
//!
//! A ramp holds no state of its own. The caller keeps the current value and
//! passes it in on every tick, receiving the next one. Whatever comes in, the
//! returned value always lies within the configured bounds.

/// Values closer than this to a bound are snapped onto it.
///
/// Accumulating small steps leaves floating point residue behind, so a value
/// stepped down from 0.9 by 0.005 would otherwise land at 1e-16 instead of 0.
const SNAP: f64 = 1e-9;

/// Which bound the ramp advances towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}

/// Bounded integrator moving a value by at most `step` per call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ramp {
    step: f64,
    min: f64,
    max: f64,
}

impl Ramp {
    /// Bounds given in the wrong order are swapped and a negative step is
    /// treated as its magnitude.
    #[must_use]
    pub fn new(step: f64, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            step: libm::fabs(step),
            min,
            max,
        }
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Move `current` one step towards the bound selected by `direction`.
    #[must_use]
    pub fn advance(&self, current: f64, direction: Direction) -> f64 {
        let current = self.clamp(current);
        let next = match direction {
            Direction::Up => current + self.step,
            Direction::Down => current - self.step,
        };
        self.clamp(next)
    }

    /// Move `current` one step towards `target`, never past it.
    #[must_use]
    pub fn toward(&self, current: f64, target: f64) -> f64 {
        let current = self.clamp(current);
        let target = self.clamp(target);
        let next = if current < target {
            (current + self.step).min(target)
        } else {
            (current - self.step).max(target)
        };
        self.clamp(next)
    }

    /// Pull a value into the bounds of the ramp.
    ///
    /// `NaN` is treated as the lower bound.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let value = value.clamp(self.min, self.max);
        if value - self.min < SNAP {
            self.min
        } else if self.max - value < SNAP {
            self.max
        } else {
            value
        }
    }
}
