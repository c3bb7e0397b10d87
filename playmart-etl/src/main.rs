//! playmart-etl - star-schema loader for song metadata and listening logs
//!
//! Walks the song and log source trees, transforms each file into dimension
//! and fact rows, and applies them to the warehouse database with one
//! commit per file.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use playmart_etl::config::{Args, EtlConfig};
use playmart_etl::pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting playmart-etl v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = EtlConfig::resolve(&args)?;

    info!("Database: {}", config.database_path.display());
    info!("Song data: {}", config.song_data_dir.display());
    info!("Log data: {}", config.log_data_dir.display());

    // Store unreachable here is fatal, no retry
    let pool = playmart_common::db::init_database(&config.database_path).await?;
    info!("Database connection established");

    let summary = match pipeline::run(&pool, &config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Run halted: {}", e);
            pool.close().await;
            return Err(e.into());
        }
    };

    info!(
        "Run complete: {} song files and {} log files loaded",
        summary.song_files, summary.log_files
    );

    pool.close().await;
    Ok(())
}
