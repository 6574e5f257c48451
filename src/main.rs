
use anyhow::Result;
use clap::Parser;
use medical_diagnosis::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the views.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medical_diagnosis=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
