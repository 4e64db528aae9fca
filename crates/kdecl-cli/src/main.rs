use clap::Parser;

mod bootstrap;
mod cli;
mod output;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("kdecl error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config()?;
    let settings = bootstrap::resolve(&cli, &config);
    tracing::debug!(?settings, "resolved settings");

    let tree = pipeline::analyze(&cli.path, &settings)?;
    output::output(&tree, settings.pretty)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("KDECL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
