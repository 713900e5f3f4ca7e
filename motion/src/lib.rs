//! Numeric primitives shared by actuator controllers that run every tick.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod ramp;
