//! Trajectory simulator crate: plate rotation about a fixed Euler pole and the
//! resulting apparent polar wander path.

pub mod simulation;

pub use facade::*;

mod facade;
