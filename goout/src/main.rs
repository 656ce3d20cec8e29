//! `goout` command-line front end.
//!
//! ```bash
//! export GEMINI_API_KEY=your-key
//! goout --preset lazy
//! goout --mood "想出去走走" --lat 25.033 --lon 121.565 --json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=goout=debug` for request details.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,goout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli::Args::parse()).await
}
