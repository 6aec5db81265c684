use anyhow::Result;
use clap::Parser;
use matrix_prune::{cli::Cli, filter, json_output, matrix::Matrix};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output (RUST_LOG-driven)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Cli) -> Result<()> {
    let mut matrix = Matrix::from_file(&args.input)?;
    tracing::debug!("loaded {} OS configs from {}", matrix.len(), args.input.display());

    let exclusions = filter::ArchExclusions::from_expr(&args.exclude);
    filter::filter_matrix(&mut matrix, &exclusions);

    let selected = filter::select_os(&matrix, args.select_os.as_deref())?;
    let text = json_output::render(&selected, args.pretty)?;
    json_output::write_output(&text, args.output.as_deref())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing();
    run(args)
}
