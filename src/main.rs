use anyhow::Context;
use api_probe::config::Cli;
use api_probe::report::ConsoleReporter;
use api_probe::Probe;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only carries the probe lines
    env_logger::init();

    let config = Cli::parse()
        .into_config()
        .context("invalid probe configuration")?;
    log::info!("probing {}", config.url);

    let probe = Probe::new(config)?;
    let mut reporter = ConsoleReporter::stdout();

    // A transport error is already printed as "Error: ..." and does not
    // change the exit code.
    if let Err(e) = probe.run(&mut reporter).await {
        log::debug!("probe finished with error: {e}");
    }

    Ok(())
}
