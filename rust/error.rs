//! Error types for calendar configuration and deadline calculation.

use chrono::NaiveDate;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Error type for all fallible operations in the readyby crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a time-of-day string is not `H:MM` or `HH:MM`.
    #[error("invalid time of day '{input}', expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input.
        input: String,
    },

    /// Returned when a date string is not in canonical `YYYY-MM-DD` form.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDateFormat {
        /// The rejected input.
        input: String,
    },

    /// Returned when a closing time is not strictly after its opening time.
    #[error("closing time {close} must be after opening time {open}")]
    InvalidWindow {
        /// Configured opening time.
        open: String,
        /// Configured closing time.
        close: String,
    },

    /// Opening or closing instants were requested for a closed date.
    #[error("no opening hours scheduled for {date}")]
    NoScheduleForDate {
        /// The closed date.
        date: NaiveDate,
    },

    /// The forward search for an open day gave up.
    #[error("no open business day within {limit} days of {from}")]
    NoOpenBusinessDayFound {
        /// Where the search started.
        from: NaiveDate,
        /// Number of consecutive days inspected.
        limit: u32,
    },

    /// Returned when a duration or date computation leaves the representable range.
    #[error("duration of {seconds}s is out of range")]
    DurationOutOfRange {
        /// The offending duration in seconds.
        seconds: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_window() {
        let e = ScheduleError::InvalidWindow {
            open: "15:00".to_string(),
            close: "09:00".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "closing time 09:00 must be after opening time 15:00"
        );
    }

    #[test]
    fn error_no_schedule_for_date() {
        let e = ScheduleError::NoScheduleForDate {
            date: NaiveDate::from_ymd_opt(2010, 12, 25).unwrap(),
        };
        assert_eq!(e.to_string(), "no opening hours scheduled for 2010-12-25");
    }

    #[test]
    fn error_no_open_business_day() {
        let e = ScheduleError::NoOpenBusinessDayFound {
            from: NaiveDate::from_ymd_opt(2010, 6, 7).unwrap(),
            limit: 3660,
        };
        assert_eq!(
            e.to_string(),
            "no open business day within 3660 days of 2010-06-07"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ScheduleError>();
    }
}
