pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{DynamicalState, Trajectory, NVec2};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{step, euler_step, leapfrog_step, rk4_step};
pub use simulation::engine::{Engine, IntegratorRun};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::trajectory_plot::run_plot;
