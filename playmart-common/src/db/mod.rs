//! Shared database access for the playmart warehouse

pub mod init;

pub use init::{create_tables, init_database};
