//! Control logic of the robot, turning operator input into actuator commands.
//!
//! It is meant to run inside a periodic loop driven by the robot's scheduler.
//! The hardware binding samples the gamepad and sensors into a snapshot once
//! per tick, passes it to the store and forwards the resulting commands to
//! the actuators. None of it touches hardware directly, so all of it can be
//! exercised on a host.
//!
//! ```text
//!          [ Gamepad ]  [ Encoder ]
//!                |          |
//!                V          V
//!              (InputSnapshot)
//!                     |
//!                     V
//!   [ Store {Input, DriveState, LiftState} ]
//!     |         |          |         |
//!  [Drive]   [Lift]    [Intake]   [Hatch]
//!     |         |          |         |
//!     +---------+----+-----+---------+
//!                    |
//!                    V
//!             (DesiredOutput)
//! ```
//!
//! On every change of the operating mode, the store's reset sequence returns
//! all actuators to idle, draining the lift gradually first.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod configuration;
pub mod drive;
pub mod hatch;
pub mod input;
pub mod intake;
pub mod lift;
mod log;
pub mod output;
pub mod reset;
mod rules;
pub mod store;

pub use configuration::{Configuration, InvalidConfiguration};
pub use input::snapshot::Snapshot as InputSnapshot;
pub use output::DesiredOutput;
pub use store::Store;
