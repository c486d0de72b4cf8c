//! Driver loop over the three integrators
//!
//! `Engine` owns one `IntegratorRun` per method, all started from the same
//! initial state. Each step advances every run once with the shared `dt`,
//! in the order Euler, leapfrog, RK4. Runs never share state.

use log::{debug, info};

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{DynamicalState, Trajectory};

/// One method's state and the positions it has recorded so far
#[derive(Debug, Clone)]
pub struct IntegratorRun {
    pub method: IntegratorConfig, // integration scheme
    pub state: DynamicalState, // current state
    pub trajectory: Trajectory, // pre-step positions, one per step taken
}

impl IntegratorRun {
    pub fn new(method: IntegratorConfig, initial: DynamicalState) -> Self {
        Self {
            method,
            state: initial,
            trajectory: Trajectory::new(),
        }
    }

    /// Take one step of size `dt`
    pub fn advance(self, dt: f64) -> Self {
        let (state, trajectory) = step(self.method, &self.state, self.trajectory, dt);
        Self {
            method: self.method,
            state,
            trajectory,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    runs: Vec<IntegratorRun>,
}

impl Engine {
    /// One run per method, all from `initial`
    pub fn new(initial: DynamicalState) -> Self {
        Self::with_methods(initial, &IntegratorConfig::ALL)
    }

    /// Runs for the given methods only, stepped in the order given
    pub fn with_methods(initial: DynamicalState, methods: &[IntegratorConfig]) -> Self {
        let runs = methods.iter().map(|&m| IntegratorRun::new(m, initial)).collect();
        Self { runs }
    }

    /// Advance every run by one step of size `dt`
    pub fn step(self, dt: f64) -> Self {
        let runs = self.runs.into_iter().map(|run| run.advance(dt)).collect();
        Self { runs }
    }

    /// Take `params.steps` steps of size `params.dt`
    pub fn run(mut self, params: &Parameters) -> Self {
        info!(
            "integrating {} methods for {} steps, dt = {} (t_end = {})",
            self.runs.len(), params.steps, params.dt, params.t_end()
        );

        for run in self.runs.iter_mut() {
            run.trajectory.reserve(params.steps);
        }

        for i in 0..params.steps {
            self = self.step(params.dt);

            if (i + 1) % 100 == 0 {
                debug!("step {}/{}", i + 1, params.steps);
            }
        }

        for run in &self.runs {
            info!(
                "{:>8}: final x = ({:.6}, {:.6}), v = ({:.6}, {:.6})",
                run.method.name(), run.state.x.x, run.state.x.y, run.state.v.x, run.state.v.y
            );
        }

        self
    }

    pub fn runs(&self) -> &[IntegratorRun] {
        &self.runs
    }

    /// Run for one method, if the engine was built with it
    pub fn get(&self, method: IntegratorConfig) -> Option<&IntegratorRun> {
        self.runs.iter().find(|run| run.method == method)
    }

    /// Recorded trajectory for one method
    pub fn trajectory(&self, method: IntegratorConfig) -> Option<&Trajectory> {
        self.get(method).map(|run| &run.trajectory)
    }
}
