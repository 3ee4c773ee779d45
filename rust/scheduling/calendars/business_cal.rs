use chrono::prelude::*;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::scheduling::calendars::dates::parse_date;
use crate::scheduling::{OpeningHours, OpeningWindow};

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A business calendar of opening hours.
///
/// A business calendar is formed of 3 components:
///
/// - `weekly`: the recurring opening window of each day of the week. A weekday without a
///   window is closed by default.
/// - `overrides`: opening windows for specific dates, replacing the weekday window on that date.
/// - `closed`: specific dates on which the business is closed, whatever the other two say.
///
/// Configuration methods take `&mut self` and lookups take `&self`, so a calendar cannot be
/// reconfigured while a [`DeadlineCalculator`](crate::scheduling::DeadlineCalculator) borrows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessCalendar {
    pub(crate) weekly: IndexMap<Weekday, OpeningWindow>,
    pub(crate) overrides: IndexMap<NaiveDate, OpeningWindow>,
    pub(crate) closed: IndexSet<NaiveDate>,
}

impl BusinessCalendar {
    /// Create a calendar open every day of the week between `open` and `close`.
    ///
    /// # Examples
    /// ```rust
    /// # use readyby::scheduling::{BusinessCalendar, OpeningHours, nd};
    /// let cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
    /// assert!(cal.is_open(&nd(2010, 6, 6))); // Sunday
    /// ```
    pub fn try_new(open: &str, close: &str) -> Result<Self> {
        let window = OpeningWindow::parse(open, close)?;
        Ok(Self::from_window(window))
    }

    /// Create a calendar open every day of the week within `window`.
    pub fn from_window(window: OpeningWindow) -> Self {
        BusinessCalendar {
            weekly: WEEK.iter().map(|d| (*d, window)).collect(),
            overrides: IndexMap::new(),
            closed: IndexSet::new(),
        }
    }

    /// Install or replace the recurring opening hours of `weekday`.
    pub fn set_weekly_hours(&mut self, weekday: Weekday, open: &str, close: &str) -> Result<()> {
        let window = OpeningWindow::parse(open, close)?;
        debug!(%weekday, open, close, "setting weekly hours");
        self.weekly.insert(weekday, window);
        Ok(())
    }

    /// Install or replace the opening hours of a single `YYYY-MM-DD` date.
    ///
    /// An override on a date that is also closed is accepted but has no effect.
    pub fn set_date_override_hours(&mut self, date: &str, open: &str, close: &str) -> Result<()> {
        let day = parse_date(date)?;
        let window = OpeningWindow::parse(open, close)?;
        if self.closed.contains(&day) {
            warn!(date, "override hours set on a closed date are ignored");
        }
        debug!(date, open, close, "setting override hours");
        self.overrides.insert(day, window);
        Ok(())
    }

    /// Remove the recurring opening hours of each weekday, closing it by default.
    pub fn close_weekdays(&mut self, weekdays: &[Weekday]) {
        for weekday in weekdays {
            self.weekly.shift_remove(weekday);
        }
    }

    /// Close each of the given `YYYY-MM-DD` dates.
    ///
    /// All dates are validated before any is closed.
    pub fn close_dates<S: AsRef<str>>(&mut self, dates: &[S]) -> Result<()> {
        let days: Vec<NaiveDate> = dates
            .iter()
            .map(|d| parse_date(d.as_ref()))
            .collect::<Result<_>>()?;
        self.closed.extend(days);
        Ok(())
    }

    /// The recurring window of `weekday`, if it is open by default.
    pub fn weekly_window(&self, weekday: Weekday) -> Option<&OpeningWindow> {
        self.weekly.get(&weekday)
    }

    /// The override window of `date`, if one is configured.
    pub fn override_window(&self, date: &NaiveDate) -> Option<&OpeningWindow> {
        self.overrides.get(date)
    }

    /// Whether `date` has been explicitly closed.
    pub fn is_closed_date(&self, date: &NaiveDate) -> bool {
        self.closed.contains(date)
    }

    /// Print a representation of the month of the calendar.
    pub fn print_month(&self, year: i32, month: u32) -> Result<String> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ScheduleError::InvalidDateFormat {
                input: format!("{year}-{month}"),
            }
        })?;
        let name = Month::try_from(month as u8)
            .map(|m| m.name())
            .unwrap_or_default();
        let mut output = format!("{:>15} {}\n", name, year);
        output += "Su Mo Tu We Th Fr Sa\n";

        let idx_start = first.weekday().num_days_from_sunday() as usize;
        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for (i, date) in first
            .iter_days()
            .take_while(|d| d.month() == month)
            .enumerate()
        {
            let s: String = if self.is_closed_date(&date) {
                " *".to_string()
            } else if self.override_window(&date).is_some() {
                " +".to_string()
            } else if self.is_open(&date) {
                format!("{:>2}", i + 1)
            } else {
                " .".to_string()
            };
            arr[i + idx_start] = s;
        }

        for row in arr.chunks(7) {
            output += &row.iter().join(" ");
            output += "\n";
        }
        output += "Legend:\n";
        output += "'1-31': Open on weekly hours    '+': Open on special hours\n";
        output += "   '.': Closed weekday          '*': Closed date\n";
        Ok(output)
    }
}

impl OpeningHours for BusinessCalendar {
    fn window(&self, date: &NaiveDate) -> Option<OpeningWindow> {
        if self.closed.contains(date) {
            return None;
        }
        self.overrides
            .get(date)
            .or_else(|| self.weekly.get(&date.weekday()))
            .copied()
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::calendars::dates::{nd, ndt};

    fn fixture_cal() -> BusinessCalendar {
        let mut cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
        cal.set_weekly_hours(Weekday::Fri, "10:00", "17:00").unwrap();
        cal.close_dates(&["2010-12-25"]).unwrap();
        cal
    }

    #[test]
    fn test_default_window_applies_to_every_weekday() {
        let cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
        for date in nd(2010, 6, 6).iter_days().take(7) {
            assert!(cal.is_open(&date));
            assert_eq!(cal.opening_instant(&date).unwrap(), date.and_hms_opt(9, 0, 0).unwrap());
            assert_eq!(cal.closing_instant(&date).unwrap(), date.and_hms_opt(15, 0, 0).unwrap());
        }
    }

    #[test]
    fn test_weekly_hours() {
        let cal = fixture_cal();
        let friday = nd(2010, 6, 11);
        assert_eq!(cal.opening_instant(&friday).unwrap(), ndt(2010, 6, 11, 10, 0));
        assert_eq!(cal.closing_instant(&friday).unwrap(), ndt(2010, 6, 11, 17, 0));
        let thursday = nd(2010, 6, 10);
        assert_eq!(cal.opening_instant(&thursday).unwrap(), ndt(2010, 6, 10, 9, 0));
    }

    #[test]
    fn test_failed_configuration_leaves_calendar_unchanged() {
        let mut cal = fixture_cal();
        let before = cal.clone();
        assert!(cal.set_weekly_hours(Weekday::Mon, "17:00", "10:00").is_err());
        assert!(cal.set_weekly_hours(Weekday::Mon, "ten", "17:00").is_err());
        assert!(cal.set_date_override_hours("2010/12/24", "08:00", "13:00").is_err());
        assert!(cal.close_dates(&["2010-12-31", "31-12-2010"]).is_err());
        assert_eq!(cal, before);
    }

    #[test]
    fn test_closed_weekdays() {
        let mut cal = fixture_cal();
        cal.close_weekdays(&[Weekday::Sun, Weekday::Wed]);
        assert!(!cal.is_open(&nd(2010, 6, 6)));
        assert!(!cal.is_open(&nd(2010, 6, 9)));
        assert!(cal.is_open(&nd(2010, 6, 8)));
        assert!(cal.weekly_window(Weekday::Sun).is_none());

        // a closed weekday can be reopened
        cal.set_weekly_hours(Weekday::Sun, "11:00", "13:00").unwrap();
        assert_eq!(cal.opening_instant(&nd(2010, 6, 6)).unwrap(), ndt(2010, 6, 6, 11, 0));
    }

    #[test]
    fn test_closed_date_beats_everything() {
        let mut cal = fixture_cal();
        cal.set_date_override_hours("2010-12-25", "08:00", "13:00").unwrap();
        let christmas = nd(2010, 12, 25);
        assert!(!cal.is_open(&christmas));
        assert!(cal.is_closed_date(&christmas));
        assert_eq!(
            cal.opening_instant(&christmas),
            Err(ScheduleError::NoScheduleForDate { date: christmas })
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let mut cal = fixture_cal();
        cal.set_date_override_hours("2010-12-24", "8:00", "13:00").unwrap();
        let eve = nd(2010, 12, 24); // Friday
        assert_eq!(cal.opening_instant(&eve).unwrap(), ndt(2010, 12, 24, 8, 0));
        assert_eq!(cal.closing_instant(&eve).unwrap(), ndt(2010, 12, 24, 13, 0));

        // an override opens a date whose weekday is closed
        cal.close_weekdays(&[Weekday::Fri]);
        assert!(cal.is_open(&eve));
        assert!(!cal.is_open(&nd(2010, 12, 17)));
    }

    #[test]
    fn test_print_month() {
        let mut cal = fixture_cal();
        cal.close_weekdays(&[Weekday::Sun]);
        cal.set_date_override_hours("2010-12-24", "08:00", "13:00").unwrap();
        let output = cal.print_month(2010, 12).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "       December 2010");
        assert_eq!(lines[1], "Su Mo Tu We Th Fr Sa");
        assert_eq!(lines[2], "          1  2  3  4");
        assert_eq!(lines[5], " . 20 21 22 23  +  *");
        assert!(cal.print_month(2010, 13).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut cal = fixture_cal();
        cal.set_date_override_hours("2010-12-24", "08:00", "13:00").unwrap();
        let js = serde_json::to_string(&cal).unwrap();
        let cal2: BusinessCalendar = serde_json::from_str(&js).unwrap();
        assert_eq!(cal, cal2);
    }
}
