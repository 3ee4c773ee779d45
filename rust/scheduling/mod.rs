//! Create a [`BusinessCalendar`] of opening hours and compute ready-by deadlines with a
//! [`DeadlineCalculator`].
//!
//! # Calendars
//!
//! A [`BusinessCalendar`] is built from a recurring weekly schedule of [`OpeningWindow`]s,
//! optional per-date override windows (special hours) and a set of explicitly closed dates.
//! It implements the [`OpeningHours`] trait, which answers whether a date is open, what its
//! opening and closing instants are, and rolls dates forward to the closest open business day.
//!
//! ### Example
//! This example opens 09:00 to 15:00 every day, except Fridays which run 10:00 to 17:00, and
//! closes on Christmas Day 2010 (a Saturday), so the closest business day on or after it is
//! Sunday 26th.
//! ```rust
//! # use readyby::scheduling::{BusinessCalendar, OpeningHours, nd, ndt, DEFAULT_SEARCH_LIMIT};
//! # use chrono::Weekday;
//! let mut cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
//! cal.set_weekly_hours(Weekday::Fri, "10:00", "17:00").unwrap();
//! cal.close_dates(&["2010-12-25"]).unwrap();
//! assert_eq!(cal.closing_instant(&nd(2010, 12, 24)).unwrap(), ndt(2010, 12, 24, 17, 0));
//! assert_eq!(
//!     cal.roll_forward_open_day(&nd(2010, 12, 25), DEFAULT_SEARCH_LIMIT).unwrap(),
//!     nd(2010, 12, 26)
//! );
//! ```
//!
//! # Deadlines
//!
//! A [`DeadlineCalculator`] borrows a calendar and adds a duration of *open* time to a drop-off
//! instant. Drop-offs outside opening hours are first moved into the next opening window and
//! any duration a day cannot absorb is carried over to the following business days.
//!
//! ### Example
//! ```rust
//! # use readyby::scheduling::{BusinessCalendar, DeadlineCalculator, ndt};
//! # use chrono::Weekday;
//! let mut cal = BusinessCalendar::try_new("09:00", "15:00").unwrap();
//! cal.close_weekdays(&[Weekday::Sun, Weekday::Wed]);
//! let calculator = DeadlineCalculator::new(&cal);
//! let deadline = calculator.calculate_deadline_str(15 * 60, "2010-06-08 14:48").unwrap();
//! assert_eq!(deadline, ndt(2010, 6, 10, 9, 3));
//! ```

mod calendars;
mod config;
mod deadline;

mod serde;

pub use crate::scheduling::{
    calendars::{
        format_instant, nd, ndt, next_date, parse_date, parse_instant, parse_time,
        BusinessCalendar, OpeningHours, OpeningWindow, DEFAULT_SEARCH_LIMIT,
    },
    config::{CalendarConfig, HoursConfig},
    deadline::DeadlineCalculator,
};
