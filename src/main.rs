use std::path::PathBuf;

use actor_line::{rank_message, Line, LineConfig};
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Line actors up and print where each one stands")]
struct Args {
    /// YAML file with the formation and actor roster; defaults to the built-in roster
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to this path
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::init();

    let config = match &args.config {
        Some(path) => LineConfig::from_yaml_file(path)
            .with_context(|| format!("loading line config from {}", path.display()))?,
        None => LineConfig::default_roster(),
    };

    println!("Lining up {} actors...", config.actors.len());
    let line = Line::from_config(&config).context("building line from config")?;

    for placement in line.placements() {
        let (x, y, z) = placement.position;
        println!("{} at ({:.2}, {:.2}, {:.2})", rank_message(&placement), x, y, z);
    }

    if let Some(path) = &args.save_config {
        config
            .to_yaml_file(path)
            .with_context(|| format!("writing config to {}", path.display()))?;
    }

    Ok(())
}
