use atomvis::{run_viewer, MdOracle, ScenarioConfig, TraceLogger};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_atoms.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;

    let oracle = MdOracle::initialize(&scenario_cfg)?;

    let trace = match scenario_cfg.display.trace_path.as_deref() {
        Some(path) => TraceLogger::open(path)?,
        None => TraceLogger::disabled(),
    };

    run_viewer(Box::new(oracle), scenario_cfg.display.delay_time, trace);

    Ok(())
}
