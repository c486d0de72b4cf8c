//! Build a fully-initialized run from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the initial particle state (`DynamicalState`)
//! - numerical parameters (`Parameters`)
//! - the method whose trajectory gets rendered

use anyhow::{ensure, Result};

use crate::configuration::config::{BodyConfig, IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{DynamicalState, NVec2};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub initial: DynamicalState,
    pub parameters: Parameters,
    pub plot: IntegratorConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let (x, v) = body_vectors(&cfg.body)?;

        // The force is singular at the central body
        ensure!(x != NVec2::zeros(), "initial position must not be the origin");

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
        };

        // Initial state: constants fixed for the whole run
        let initial = DynamicalState {
            x,
            v,
            small_m: p_cfg.small_m,
            large_m: p_cfg.large_m,
            g_const: p_cfg.g_const,
        };

        Ok(Self {
            initial,
            parameters,
            plot: cfg.engine.plot,
        })
    }

    /// Run all three integrators over the configured steps
    pub fn simulate(&self) -> Engine {
        Engine::new(self.initial).run(&self.parameters)
    }
}

/// Map `BodyConfig` -> nalgebra vectors, rejecting anything that is not 2D
fn body_vectors(bc: &BodyConfig) -> Result<(NVec2, NVec2)> {
    ensure!(bc.x.len() == 2, "body.x must have 2 components, got {}", bc.x.len());
    ensure!(bc.v.len() == 2, "body.v must have 2 components, got {}", bc.v.len());

    Ok((NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1])))
}
