use anyhow::Context;
use skyport_cli::run_script;
use skyport_store::{app_config::Config, store_from_config};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut store = store_from_config(&config);
    tracing::info!(
        base_fare = config.fares.base_fare,
        increment = config.fares.increment,
        "Booking store ready"
    );

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            let file = File::open(&path).with_context(|| format!("Failed to open script {}", path))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    let executed = run_script(&mut store, input, io::stdout().lock())?;
    tracing::info!(commands = executed, "Script finished");

    Ok(())
}
