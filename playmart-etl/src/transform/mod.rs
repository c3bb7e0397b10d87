//! Transformation of raw source records into star-schema rows

pub mod log;
pub mod song;
pub mod time;

pub use log::{transform_log_file, LogBatch};
pub use song::transform_song_file;
pub use time::derive_time_row;
