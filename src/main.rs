//! Entry point: one no-argument scrape run.

use anyhow::Result;
use planscrape::config::Config;
use planscrape::pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("planscrape=info".parse()?),
        )
        .init();

    let config = Config::default();
    let summary = pipeline::run(&config).await?;

    println!(
        "Done: {} inserted, {} skipped",
        summary.inserted, summary.skipped
    );
    Ok(())
}
