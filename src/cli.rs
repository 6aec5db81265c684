//! CLI argument parsing for matrix-prune

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "matrix-prune")]
#[command(version)]
#[command(
    about = "Filter a distribution-matrix JSON file by excluded duckdb_arch values",
    long_about = None
)]
pub struct Cli {
    /// Input JSON file path
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Semicolon-separated list of excluded duckdb_arch values
    #[arg(long, value_name = "LIST")]
    pub exclude: String,

    /// Output JSON file path (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the output JSON (2-space indent; compact otherwise)
    #[arg(long)]
    pub pretty: bool,

    /// Reduce the output to a single top-level OS key
    #[arg(long = "select_os", value_name = "OS")]
    pub select_os: Option<String>,
}
