//! # Playmart Common Library
//!
//! Shared code for the playmart star-schema loader including:
//! - Error types
//! - Configuration and root folder resolution
//! - Timestamp utilities
//! - Database initialization and warehouse schema

pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
