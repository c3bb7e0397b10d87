//! Time dimension derivation
//!
//! Expands an epoch-millisecond timestamp into calendar parts, always in
//! UTC. Pure and deterministic, so re-deriving the same timestamp across
//! files feeds the same row into the upsert path.

use crate::models::TimeRow;
use chrono::{Datelike, Timelike};

/// Derive a time dimension row from an epoch-millisecond timestamp.
///
/// Weekday uses the Monday = 0 convention; the week field is the ISO week
/// of year. Returns `None` for timestamps outside the representable range.
pub fn derive_time_row(start_time: i64) -> Option<TimeRow> {
    let dt = playmart_common::time::from_epoch_millis(start_time)?;

    Some(TimeRow {
        start_time,
        hour: dt.hour(),
        day: dt.day(),
        week: dt.iso_week().week(),
        month: dt.month(),
        year: dt.year(),
        weekday: dt.weekday().num_days_from_monday(),
    })
}
