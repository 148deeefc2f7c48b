// MIT/Apache2 License

//! A unit-safe angle type for use in the `chalkboard` crate.
//!
//! Mixing up degrees and radians is an easy mistake to make when every angle is a bare `f32`. The
//! [`Angle`] type stores its magnitude in radians, but the only way to get a number into or out of it is
//! through a function that names the unit:
//!
//! ```
//! use chalkboard_angle::from_degrees;
//!
//! let right = from_degrees(90.0f32);
//! let straight = right + right;
//! assert!((straight.radians() - core::f32::consts::PI).abs() < 1e-6);
//!
//! // the short way around from 10 degrees to 350 degrees is 20 degrees clockwise
//! let turn = from_degrees(10.0f64).distance(from_degrees(350.0));
//! assert!((turn.degrees() + 20.0).abs() < 1e-9);
//! ```
//!
//! Angles form a small closed algebra: they can be added, subtracted, scaled by a number, and divided by
//! each other to get a plain ratio, but never multiplied together.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
extern crate std;

mod angle;
pub use angle::*;

mod common;
mod interop;
mod ops;
mod tolerance;

mod precision;
pub use precision::*;

mod scalar;
pub use scalar::*;

mod trig;
pub use trig::*;

mod wrap;
pub use wrap::*;
