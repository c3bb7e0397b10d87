//! Startup configuration for the playmart loader
//!
//! Paths resolve CLI argument first, then environment, then the shared TOML
//! config, then compiled defaults under the root folder.

use clap::Parser;
use playmart_common::config as common_config;
use playmart_common::Result;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "playmart-etl",
    about = "Load song metadata and listening logs into the playmart star schema"
)]
pub struct Args {
    /// Base folder holding the database file
    #[arg(long, env = "PLAYMART_ROOT")]
    pub root: Option<PathBuf>,

    /// Database file path (defaults to <root>/playmart.db)
    #[arg(long, env = "PLAYMART_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory tree containing song metadata files
    #[arg(long, env = "PLAYMART_SONG_DATA")]
    pub song_data: Option<PathBuf>,

    /// Directory tree containing listening event log files
    #[arg(long, env = "PLAYMART_LOG_DATA")]
    pub log_data: Option<PathBuf>,
}

/// Resolved pipeline configuration
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub database_path: PathBuf,
    pub song_data_dir: PathBuf,
    pub log_data_dir: PathBuf,
}

impl EtlConfig {
    /// Resolve the effective configuration from parsed arguments
    pub fn resolve(args: &Args) -> Result<Self> {
        let root = common_config::resolve_root_folder(args.root.as_deref())?;

        let database_path = match &args.database {
            Some(path) => path.clone(),
            None => common_config::ensure_root_folder(&root)?,
        };

        Ok(Self {
            database_path,
            song_data_dir: args
                .song_data
                .clone()
                .unwrap_or_else(|| root.join("data").join("song_data")),
            log_data_dir: args
                .log_data
                .clone()
                .unwrap_or_else(|| root.join("data").join("log_data")),
        })
    }
}
