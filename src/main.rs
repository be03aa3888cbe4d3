//! mailvariant Worker Service Entry Point
//!
//! Loads configuration, builds the Tokio runtime, and starts the HTTP server.

use mailvariant_worker::config::AppConfig;
use mailvariant_worker::run;

fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if config.server.workers > 0 {
        builder.worker_threads(config.server.workers);
    }

    builder.build()?.block_on(run(config))
}
