use starsim::run_2d;
use starsim::{Scenario, SimConfig};
use starsim::configuration::config::DEFAULT_STAR_COUNT;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Number of stars to simulate
    #[arg(default_value_t = DEFAULT_STAR_COUNT as u32, value_parser = clap::value_parser!(u32).range(1..))]
    stars: u32,

    /// Fixed integration step in seconds; when omitted each frame
    /// advances by its wall-clock duration
    #[arg(long)]
    step: Option<f64>,
}

// validate here to keep main clean
fn build_config() -> Result<SimConfig> {
    let args = Args::parse();

    if let Some(step) = args.step {
        if !step.is_finite() || step <= 0.0 {
            bail!("--step must be a positive number of seconds, got {step}");
        }
    }

    Ok(SimConfig::new(args.stars as usize, args.step))
}

fn main() -> Result<()> {
    let config = build_config()?;
    let scenario = Scenario::build_scenario(config);
    run_2d(scenario);

    Ok(())
}
