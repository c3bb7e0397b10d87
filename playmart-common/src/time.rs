//! Timestamp utilities

use chrono::{DateTime, TimeZone, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Convert an epoch-millisecond timestamp to a UTC datetime.
///
/// Returns `None` when the value falls outside chrono's representable range.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800); // 2000-01-01 00:00:00 UTC
    }

    #[test]
    fn test_from_epoch_millis_zero_is_unix_epoch() {
        let dt = from_epoch_millis(0).unwrap();
        assert_eq!(dt.year(), 1970);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_from_epoch_millis_known_instant() {
        // 2018-11-02 01:25:34.796 UTC
        let dt = from_epoch_millis(1_541_121_934_796).unwrap();
        assert_eq!(dt.year(), 2018);
        assert_eq!(dt.month(), 11);
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 1);
        assert_eq!(dt.minute(), 25);
        assert_eq!(dt.second(), 34);
    }

    #[test]
    fn test_from_epoch_millis_preserves_millis() {
        let dt = from_epoch_millis(1_541_121_934_796).unwrap();
        assert_eq!(dt.timestamp_millis(), 1_541_121_934_796);
    }

    #[test]
    fn test_from_epoch_millis_out_of_range() {
        assert!(from_epoch_millis(i64::MAX).is_none());
        assert!(from_epoch_millis(i64::MIN).is_none());
    }
}
