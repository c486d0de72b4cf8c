use orbitsim::{IntegratorConfig, Scenario, ScenarioConfig};
use orbitsim::run_plot;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbitsim", about = "Integrate a two-body orbit with Euler, leapfrog and RK4, then plot one trajectory")]
struct Args {
    /// Scenario file under `scenarios/`; built-in unit circular orbit if omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Trajectory to plot, overriding the scenario
    #[arg(short, long, value_enum)]
    method: Option<IntegratorConfig>,

    /// Number of steps, overriding the scenario
    #[arg(long)]
    steps: Option<usize>,

    /// Step size, overriding the scenario
    #[arg(long)]
    dt: Option<f64>,

    /// Integrate and log only, do not open the viewer
    #[arg(long)]
    no_plot: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario_cfg = match &args.file_name {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::default(),
    };

    if let Some(method) = args.method {
        scenario_cfg.engine.plot = method;
    }
    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = steps;
    }
    if let Some(dt) = args.dt {
        scenario_cfg.parameters.dt = dt;
    }

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let engine = scenario.simulate();

    if args.no_plot {
        info!("--no-plot given, skipping viewer");
        return Ok(());
    }

    let trajectory = engine
        .trajectory(scenario.plot)
        .with_context(|| format!("no {} trajectory recorded", scenario.plot.name()))?;

    run_plot(trajectory, scenario.plot)
}
