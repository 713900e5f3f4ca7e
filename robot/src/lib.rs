//! Binding of the control loop to the robot's devices and lifecycle.
//!
//! The devices are provided by a platform through a set of narrow traits, so
//! the same robot runs against real hardware or the recording mocks in
//! `testlib`.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
#[macro_use]
extern crate approx;

mod log;
pub mod robot;
pub mod system;
pub mod testlib;

pub use robot::{Mode, Robot};
