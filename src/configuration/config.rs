//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which integrator's trajectory is rendered
//! - [`ParametersConfig`] – step size, step count and physical constants
//! - [`BodyConfig`]       – initial state of the test particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field is optional; missing values fall back to the unit circular
//! orbit integrated for 1000 steps of 0.05.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   plot: "rk4"             # "euler", "leapfrog" or "rk4"
//!
//! parameters:
//!   dt: 0.05                # fixed step size
//!   steps: 1000             # number of steps
//!   small_m: 1.0            # test particle mass
//!   large_m: 1.0            # central body mass
//!   g_const: 1.0            # gravitational constant
//!
//! body:
//!   x: [ 1.0, 0.0 ]
//!   v: [ 0.0, 1.0 ]
//! ```
//!
//! The driver maps this configuration into its runtime `Scenario`.

use serde::Deserialize;

/// Integration method
/// `"euler"`, `"leapfrog"` or `"rk4"` in YAML and on the command line
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler. First order, one force evaluation per step
    Euler,

    #[serde(rename = "leapfrog")] // Velocity Verlet. Second order, symplectic, two force evaluations per step
    Leapfrog,

    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta. Highest local accuracy per step but not symplectic
    Rk4,
}

impl IntegratorConfig {
    /// All methods, in the order the driver steps them
    pub const ALL: [IntegratorConfig; 3] = [
        IntegratorConfig::Euler,
        IntegratorConfig::Leapfrog,
        IntegratorConfig::Rk4,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntegratorConfig::Euler => "euler",
            IntegratorConfig::Leapfrog => "leapfrog",
            IntegratorConfig::Rk4 => "rk4",
        }
    }
}

/// Driver-level configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub plot: IntegratorConfig, // trajectory handed to the viewer
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            plot: IntegratorConfig::Rk4,
        }
    }
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,      // time step size
    pub steps: usize, // number of steps
    pub small_m: f64, // test particle mass
    pub large_m: f64, // central body mass
    pub g_const: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 0.05,
            steps: 1000,
            small_m: 1.0,
            large_m: 1.0,
            g_const: 1.0,
        }
    }
}

/// Initial state of the test particle
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position, must not be the origin
    pub v: Vec<f64>, // Initial velocity
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            x: vec![1.0, 0.0],
            v: vec![0.0, 1.0],
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Which trajectory to render
    pub parameters: ParametersConfig, // Step size, step count and constants
    pub body: BodyConfig, // Initial state of the test particle
}
