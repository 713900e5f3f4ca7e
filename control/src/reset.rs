//! Safe return of all actuators to their idle state.
//!
//! The lift is drained first, one ramp step at a time, so the actuator never
//! sees a jump to zero. Only once it is fully drained are the remaining
//! actuators stopped. The sequence is an iterator over the steps, each to be
//! passed to the respective actuator in the order they are yielded.

use crate::hatch::HatchPosition;
use crate::log;
use crate::store::Store;

/// One command issued by the reset sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetStep {
    Lift(f64),
    Intake(f64),
    Hatch(HatchPosition),
    ResetEncoder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    DrainLift,
    StopIntake,
    RetractHatch,
    ResetEncoder,
    Done,
}

/// The drive is reset as soon as the sequence is created. The remaining
/// steps are only taken while iterating.
#[must_use = "actuators are only reset while the sequence is iterated"]
pub struct ResetSequence<'a> {
    store: &'a mut Store,
    phase: Phase,
}

impl<'a> ResetSequence<'a> {
    pub(crate) fn new(store: &'a mut Store) -> Self {
        store.reset_drive();
        Self {
            store,
            phase: Phase::DrainLift,
        }
    }
}

impl Iterator for ResetSequence<'_> {
    type Item = ResetStep;

    fn next(&mut self) -> Option<ResetStep> {
        loop {
            match self.phase {
                Phase::DrainLift => {
                    if let Some(voltage) = self.store.drain_lift_step() {
                        return Some(ResetStep::Lift(voltage));
                    }
                    self.phase = Phase::StopIntake;
                }
                Phase::StopIntake => {
                    self.phase = Phase::RetractHatch;
                    return Some(ResetStep::Intake(0.0));
                }
                Phase::RetractHatch => {
                    self.phase = Phase::ResetEncoder;
                    return Some(ResetStep::Hatch(HatchPosition::Forward));
                }
                Phase::ResetEncoder => {
                    log::info!("Reset sequence completed");
                    self.phase = Phase::Done;
                    return Some(ResetStep::ResetEncoder);
                }
                Phase::Done => return None,
            }
        }
    }
}
