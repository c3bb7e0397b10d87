//! Star-schema table operations
//!
//! One module per warehouse table. Dimension writers take an explicit
//! connection so the orchestrator can thread its per-file transaction
//! through them; natural-key lookups read through the pool and therefore
//! see committed state only.

pub mod artists;
pub mod resolve;
pub mod songplays;
pub mod songs;
pub mod time;
pub mod users;
