//! Birthforce Command-Line Calculator
//!
//! Computes the vertical vs. supine comparison for a set of measurements and
//! prints formulas, charts and conclusions.
//!
//! # Usage
//!
//! ```bash
//! # Default measurements (term infant, typical contraction)
//! birthforce
//!
//! # Custom measurements
//! birthforce --mass 4.2 --canal-length 0.12 --contraction-pressure 65
//!
//! # Full report document as JSON
//! birthforce --format json
//! ```

mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{util::SubscriberInitExt, FmtSubscriber};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; records from the core's `log` calls are bridged in
    FmtSubscriber::builder()
        .with_max_level(cli.level())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish()
        .try_init()?;

    info!("Birthforce v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &mut out)
}
