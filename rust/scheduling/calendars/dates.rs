use chrono::prelude::*;
use chrono::Days;

use crate::error::{Result, ScheduleError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";
const INSTANT_FORMAT_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Create a `NaiveDateTime` at the given hour and minute.
///
/// Panics if date or time values are invalid.
pub fn ndt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    nd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("`hour`, `minute` are invalid.")
}

/// Parse a calendar date in canonical `YYYY-MM-DD` form.
///
/// Non zero-padded input such as `2010-6-7` is rejected, since it is not the canonical
/// representation of any date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || ScheduleError::InvalidDateFormat {
        input: input.to_string(),
    };
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != input {
        return Err(invalid());
    }
    Ok(date)
}

/// Parse a time of day given as `H:MM` or `HH:MM`.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|_| ScheduleError::InvalidTimeFormat {
        input: input.to_string(),
    })
}

/// Parse a drop-off instant given as `YYYY-MM-DD HH:MM`.
///
/// The date part must be canonical, as for [`parse_date`]. A `HH:MM:SS` time part, as written
/// by [`format_instant`], is also accepted.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime> {
    let (date, time) = input
        .split_once(' ')
        .ok_or_else(|| ScheduleError::InvalidDateFormat {
            input: input.to_string(),
        })?;
    let date = parse_date(date)?;
    let time = parse_time(time).or_else(|e| {
        NaiveTime::parse_from_str(time, TIME_FORMAT_SECONDS).map_err(|_| e)
    })?;
    Ok(date.and_time(time))
}

/// Format an instant as `YYYY-MM-DD HH:MM:SS`.
pub fn format_instant(instant: &NaiveDateTime) -> String {
    instant.format(INSTANT_FORMAT_SECONDS).to_string()
}

/// The calendar day after `date`, or `None` at the end of the representable range.
pub fn next_date(date: &NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}
