use std::error::Error;

use drug_interactions::config::Config;
use drug_interactions::pipeline::run;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "drug_interactions=info,warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = Config::default();
    let report = run(&config)?;
    println!("{report}");

    Ok(())
}
