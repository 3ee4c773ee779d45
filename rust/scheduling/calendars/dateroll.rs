use chrono::prelude::*;
use tracing::trace;

use crate::error::{Result, ScheduleError};
use crate::scheduling::calendars::dates::next_date;
use crate::scheduling::OpeningWindow;

/// Default number of consecutive closed days a forward search inspects before giving up.
pub const DEFAULT_SEARCH_LIMIT: u32 = 3660;

/// Opening hours lookup and forward rolling over open business days.
pub trait OpeningHours {
    /// Returns the effective opening window of `date`, or `None` if the date is closed.
    fn window(&self, date: &NaiveDate) -> Option<OpeningWindow>;

    /// Returns whether the date is a business day.
    fn is_open(&self, date: &NaiveDate) -> bool {
        self.window(date).is_some()
    }

    /// Returns the instant the business opens on `date`.
    fn opening_instant(&self, date: &NaiveDate) -> Result<NaiveDateTime> {
        self.window(date)
            .map(|w| w.opening_on(date))
            .ok_or(ScheduleError::NoScheduleForDate { date: *date })
    }

    /// Returns the instant the business closes on `date`.
    fn closing_instant(&self, date: &NaiveDate) -> Result<NaiveDateTime> {
        self.window(date)
            .map(|w| w.closing_on(date))
            .ok_or(ScheduleError::NoScheduleForDate { date: *date })
    }

    /// Returns the number of open seconds on `date`.
    fn open_seconds(&self, date: &NaiveDate) -> Result<i64> {
        self.window(date)
            .map(|w| w.open_seconds())
            .ok_or(ScheduleError::NoScheduleForDate { date: *date })
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    ///
    /// At most `limit` consecutive closed days are skipped.
    fn roll_forward_open_day(&self, date: &NaiveDate, limit: u32) -> Result<NaiveDate> {
        let not_found = ScheduleError::NoOpenBusinessDayFound {
            from: *date,
            limit,
        };
        let mut new_date = *date;
        let mut skipped: u32 = 0;
        while !self.is_open(&new_date) {
            if skipped >= limit {
                return Err(not_found);
            }
            trace!(date = %new_date, "skipping closed day");
            new_date = next_date(&new_date).ok_or(not_found.clone())?;
            skipped += 1;
        }
        Ok(new_date)
    }

    /// Return the first business date strictly after `date`.
    fn next_open_day(&self, date: &NaiveDate, limit: u32) -> Result<NaiveDate> {
        let following = next_date(date).ok_or(ScheduleError::NoOpenBusinessDayFound {
            from: *date,
            limit,
        })?;
        self.roll_forward_open_day(&following, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::calendars::dates::{nd, ndt};
    use crate::scheduling::BusinessCalendar;

    fn fixture_cal() -> BusinessCalendar {
        let mut cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
        cal.close_weekdays(&[Weekday::Sat, Weekday::Sun]);
        cal.close_dates(&["2015-09-07"]).unwrap(); // Monday
        cal
    }

    #[test]
    fn test_roll_forward_open_day() {
        let cal = fixture_cal();
        // Saturday rolls over the weekend and the closed Monday
        let next = cal.roll_forward_open_day(&nd(2015, 9, 5), DEFAULT_SEARCH_LIMIT);
        assert_eq!(next.unwrap(), nd(2015, 9, 8));

        // an open day is returned unchanged
        let fri = nd(2015, 9, 4);
        assert_eq!(
            cal.roll_forward_open_day(&fri, DEFAULT_SEARCH_LIMIT).unwrap(),
            fri
        );
    }

    #[test]
    fn test_next_open_day_is_strictly_after() {
        let cal = fixture_cal();
        let next = cal.next_open_day(&nd(2015, 9, 4), DEFAULT_SEARCH_LIMIT);
        assert_eq!(next.unwrap(), nd(2015, 9, 8));
        let next = cal.next_open_day(&nd(2015, 9, 8), DEFAULT_SEARCH_LIMIT);
        assert_eq!(next.unwrap(), nd(2015, 9, 9));
    }

    #[test]
    fn test_roll_forward_respects_limit() {
        let cal = fixture_cal();
        // Saturday, Sunday and the closed Monday are three skips
        let result = cal.roll_forward_open_day(&nd(2015, 9, 5), 2);
        assert_eq!(
            result,
            Err(ScheduleError::NoOpenBusinessDayFound {
                from: nd(2015, 9, 5),
                limit: 2
            })
        );
        assert!(cal.roll_forward_open_day(&nd(2015, 9, 5), 3).is_ok());
    }

    #[test]
    fn test_instants_on_closed_day() {
        let cal = fixture_cal();
        let sunday = nd(2015, 9, 6);
        assert_eq!(
            cal.opening_instant(&sunday),
            Err(ScheduleError::NoScheduleForDate { date: sunday })
        );
        assert!(cal.closing_instant(&sunday).is_err());
        assert!(cal.open_seconds(&sunday).is_err());
        assert_eq!(
            cal.opening_instant(&nd(2015, 9, 8)).unwrap(),
            ndt(2015, 9, 8, 9, 0)
        );
    }
}
