use chrono::prelude::*;
use chrono::TimeDelta;
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::scheduling::calendars::dates::parse_instant;
use crate::scheduling::{OpeningHours, DEFAULT_SEARCH_LIMIT};

/// Compute ready-by deadlines against a calendar of opening hours.
///
/// Only open business time counts toward a duration. Time before opening, after closing and on
/// closed days is skipped, and whatever a day cannot absorb is carried over to the following
/// business days.
///
/// # Examples
/// ```rust
/// # use readyby::scheduling::{BusinessCalendar, DeadlineCalculator, ndt};
/// let cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
/// let calculator = DeadlineCalculator::new(&cal);
/// let deadline = calculator.calculate_deadline_str(2 * 60 * 60, "2010-06-07 18:10").unwrap();
/// assert_eq!(deadline, ndt(2010, 6, 8, 11, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DeadlineCalculator<'a, C: OpeningHours> {
    calendar: &'a C,
    search_limit: u32,
}

impl<'a, C: OpeningHours> DeadlineCalculator<'a, C> {
    /// Create a calculator reading from `calendar`.
    pub fn new(calendar: &'a C) -> Self {
        Self {
            calendar,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Set the number of consecutive closed days searched before failing with
    /// [`ScheduleError::NoOpenBusinessDayFound`].
    pub fn with_search_limit(mut self, days: u32) -> Self {
        self.search_limit = days;
        self
    }

    /// Calculate the deadline for a drop-off given as `YYYY-MM-DD HH:MM`.
    pub fn calculate_deadline_str(
        &self,
        duration_seconds: u64,
        drop_off: &str,
    ) -> Result<NaiveDateTime> {
        self.calculate_deadline(duration_seconds, parse_instant(drop_off)?)
    }

    /// Calculate the instant at which `duration_seconds` of open time have elapsed after
    /// `drop_off`.
    pub fn calculate_deadline(
        &self,
        duration_seconds: u64,
        drop_off: NaiveDateTime,
    ) -> Result<NaiveDateTime> {
        let cal = self.calendar;
        let out_of_range = ScheduleError::DurationOutOfRange {
            seconds: duration_seconds,
        };
        let duration = i64::try_from(duration_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or(out_of_range.clone())?
            .num_seconds();

        // keep the time of day, move the date onto a business day
        let day = cal.roll_forward_open_day(&drop_off.date(), self.search_limit)?;
        let working = day.and_time(drop_off.time());
        debug!(%drop_off, %day, "normalized drop-off to business day");

        let opening = cal.opening_instant(&day)?;
        let closing = cal.closing_instant(&day)?;
        let (day, working) = if working < opening {
            debug!(%opening, "drop-off before opening, clamping");
            (day, opening)
        } else if working > closing {
            let next = cal.next_open_day(&day, self.search_limit)?;
            let next_opening = cal.opening_instant(&next)?;
            debug!(%closing, %next_opening, "drop-off after closing, rolling to next business day");
            (next, next_opening)
        } else {
            (day, working)
        };

        // measured against the drop-off day's closing, even after rolling past it; abs turns
        // the negative gap of a rolled drop-off into budget
        let remaining = (closing - working).num_seconds().abs();
        if remaining >= duration {
            debug!(remaining, duration, "duration fits the same day");
            return add_seconds(working, duration).ok_or(out_of_range);
        }

        let mut carry_over = (duration - remaining).abs();
        let mut day = cal.next_open_day(&day, self.search_limit)?;
        debug!(carry_over, %day, "carrying over to following business days");
        loop {
            let budget = cal.open_seconds(&day)?;
            if carry_over > budget {
                carry_over -= budget;
                day = cal.next_open_day(&day, self.search_limit)?;
                debug!(carry_over, %day, "day consumed, carrying over");
            } else {
                return add_seconds(cal.opening_instant(&day)?, carry_over).ok_or(out_of_range);
            }
        }
    }
}

fn add_seconds(instant: NaiveDateTime, seconds: i64) -> Option<NaiveDateTime> {
    instant.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}
