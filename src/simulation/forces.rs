//! Gravitational force toward the fixed central body
//!
//! The central body sits at the origin. The force on the test particle is
//! the inverse-square attraction scaled by `large_m * g_const`; the particle
//! mass is applied by the integrators.

use crate::simulation::states::{DynamicalState, NVec2};

/// Newtonian gravity of a point mass fixed at the origin, no softening
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub large_m: f64, // mass of the central body
    pub g_const: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force at position `x`, directed at the origin
    ///
    /// `x` must not be the origin: the distance cubed in the denominator is
    /// zero there and the result is non-finite.
    pub fn force(&self, x: NVec2) -> NVec2 {
        let distance = x.norm();

        // coef = M * G / |r|^3
        let coef = self.large_m * self.g_const / (distance * distance * distance);

        -coef * x
    }
}

impl DynamicalState {
    /// Gravity term built from this state's constants
    pub fn gravity(&self) -> NewtonianGravity {
        NewtonianGravity {
            large_m: self.large_m,
            g_const: self.g_const,
        }
    }

    /// Force the particle would feel at `x`
    pub fn force_at(&self, x: NVec2) -> NVec2 {
        self.gravity().force(x)
    }
}
