//! Rigid rotation of a plate about a fixed Euler pole, traced back in time.
//!
//! Each sample is computed directly from the total angle since the present,
//! so there is no accumulation of incremental rotations. The continent moves
//! by the forward rotation `R`; the spin axis, read in the plate's present-day
//! frame, moves by `Rᵀ`.

use apw_core::constants::SPIN_AXIS;
use apw_core::units::deg_to_rad;
use apw_core::vector::Vector3;
use apw_sphere::{GeoPoint, RotationError, rotate, rotate_inverse, rotation_matrix};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Present-day location of the continental site of interest.
pub type ReferencePoint = GeoPoint;

/// Single fixed Euler pole with constant angular velocity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateMotionParameters {
    pub angular_velocity_deg_per_myr: f64,
    pub rotation_axis_lat: f64,
    pub rotation_axis_lon: f64,
    pub total_time_myr: f64,
    pub time_steps: usize,
}

impl PlateMotionParameters {
    /// Unit vector of the Euler pole.
    pub fn axis_vector(&self) -> Vector3 {
        apw_sphere::spherical_to_cartesian(self.rotation_axis_lat, self.rotation_axis_lon)
    }

    /// Check the preconditions that would otherwise yield a malformed track.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.time_steps == 0 {
            return Err(SimulationError::invalid("time_steps must be at least 1"));
        }
        if !self.angular_velocity_deg_per_myr.is_finite() {
            return Err(SimulationError::invalid("angular velocity must be finite"));
        }
        if !self.total_time_myr.is_finite() {
            return Err(SimulationError::invalid("total time must be finite"));
        }
        if self.total_time_myr < 0.0 {
            return Err(SimulationError::invalid(format!(
                "total time must not be negative (got {} Myr)",
                self.total_time_myr
            )));
        }
        Ok(())
    }
}

/// Errors surfaced by [`simulate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid rotation axis: {0}")]
    InvalidAxis(#[from] RotationError),
    #[error("invalid simulation parameters: {reason}")]
    InvalidParameters { reason: String },
}

impl SimulationError {
    fn invalid(reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Continent and apparent-pole tracks sampled at increasing ages.
///
/// All three vectors share one index; `time_myr` is non-decreasing and
/// measures time into the past.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub time_myr: Vec<f64>,
    pub continent: Vec<GeoPoint>,
    pub apparent_pole: Vec<GeoPoint>,
}

/// One row of a [`SimulationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time_myr: f64,
    pub continent: GeoPoint,
    pub apparent_pole: GeoPoint,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.time_myr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_myr.is_empty()
    }

    pub fn sample(&self, idx: usize) -> Option<Sample> {
        Some(Sample {
            time_myr: *self.time_myr.get(idx)?,
            continent: *self.continent.get(idx)?,
            apparent_pole: *self.apparent_pole.get(idx)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(|idx| self.sample(idx))
    }

    pub fn first(&self) -> Option<Sample> {
        self.sample(0)
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|idx| self.sample(idx))
    }

    /// Index of the sample whose time is closest to `time_myr` (earliest on ties).
    pub fn nearest_index(&self, time_myr: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, t) in self.time_myr.iter().enumerate() {
            let diff = (t - time_myr).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((idx, diff)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// `n == 1` yields `[start]`; the final value is exactly `end` otherwise.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Trace the reference point and the apparent pole over `params.time_steps`
/// ages from 0 to `params.total_time_myr`.
pub fn simulate(
    params: &PlateMotionParameters,
    reference: &ReferencePoint,
) -> Result<SimulationResult, SimulationError> {
    params.validate()?;
    if !reference.is_finite() {
        return Err(SimulationError::invalid(
            "reference point coordinates must be finite",
        ));
    }

    let axis = params.axis_vector();
    let continent_vector = reference.to_unit_vector();
    let time_myr = linspace(0.0, params.total_time_myr, params.time_steps);

    let mut continent = Vec::with_capacity(time_myr.len());
    let mut apparent_pole = Vec::with_capacity(time_myr.len());
    for &t in &time_myr {
        let angle = deg_to_rad(params.angular_velocity_deg_per_myr * t);
        let rotation = rotation_matrix(&axis, angle)?;
        continent.push(GeoPoint::from_unit_vector(&rotate(
            &rotation,
            &continent_vector,
        )));
        apparent_pole.push(GeoPoint::from_unit_vector(&rotate_inverse(
            &rotation, &SPIN_AXIS,
        )));
    }

    debug!(
        steps = time_myr.len(),
        total_time_myr = params.total_time_myr,
        angular_velocity = params.angular_velocity_deg_per_myr,
        "simulated plate rotation"
    );

    Ok(SimulationResult {
        time_myr,
        continent,
        apparent_pole,
    })
}
