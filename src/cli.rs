use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bigomap")]
#[command(about = "Heuristic time complexity estimator based on loop nesting depth", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Python source file to analyze
    pub path: PathBuf,
}
