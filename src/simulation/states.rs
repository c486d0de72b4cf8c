//! Core state types for the two-body simulation.
//!
//! Defines:
//! - `DynamicalState` the test particle at one instant, plus the constants of the run
//! - `Trajectory` the append-only log of recorded positions
//!
//! The central body sits fixed at the origin and has no state of its own.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicalState {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub small_m: f64, // mass of the test particle
    pub large_m: f64, // mass of the central body
    pub g_const: f64, // gravitational constant
}

impl DynamicalState {
    /// Same particle and constants, new position and velocity
    pub fn advanced(&self, x: NVec2, v: NVec2) -> Self {
        Self { x, v, ..*self }
    }

    /// Distance from the central body
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }
}

impl Default for DynamicalState {
    /// Unit circular orbit with all constants set to one
    fn default() -> Self {
        Self {
            x: NVec2::new(1.0, 0.0),
            v: NVec2::new(0.0, 1.0),
            small_m: 1.0,
            large_m: 1.0,
            g_const: 1.0,
        }
    }
}

/// Positions recorded once per completed step, in chronological order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<NVec2>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for `n` more samples
    pub fn reserve(&mut self, n: usize) {
        self.points.reserve(n);
    }

    /// Append one position and hand the log back
    pub fn record(mut self, x: NVec2) -> Self {
        self.points.push(x);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[NVec2] {
        &self.points
    }

    /// x coordinates, indexed by step
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// y coordinates, indexed by step
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}
