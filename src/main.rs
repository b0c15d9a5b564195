use anyhow::Result;
use bigomap::cli::Cli;
use bigomap::commands::analyze::estimate_complexity;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let complexity = estimate_complexity(&cli.path)?;
    println!(
        "Estimated time complexity of {}: {}",
        cli.path.display(),
        complexity
    );
    Ok(())
}
