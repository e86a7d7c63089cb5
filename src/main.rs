use anyhow::Result;
use clap::Parser;
use emoji_selector::cli::{self, Cli};

/// Initialize the tracing subscriber for logging.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // By default, only log warnings from this crate so command output stays clean
    // Users can override with RUST_LOG environment variable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("emoji_selector=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    runtime.block_on(cli::run(cli))
}
