use qrlink::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may be set by other means.
    let _ = dotenvy::dotenv();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level)?;

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}
