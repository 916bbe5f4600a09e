use anyhow::Result;
use clap::Parser;
use json_annotate::cli::Cli;

fn main() -> Result<()> {
    // stdout belongs to the interactive screen; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("json_annotate=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
