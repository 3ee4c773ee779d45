//! Ready-by deadlines for work dropped off at a business with opening hours.
//!
//! A deadline is a drop-off instant plus a duration of *open* business time. Closed days,
//! time before opening and time after closing do not count toward the duration.
//!
//! - **`scheduling`**: [`BusinessCalendar`](scheduling::BusinessCalendar) lookups and the
//!   [`DeadlineCalculator`](scheduling::DeadlineCalculator).
//! - **`json`**: JSON conversion of calendars and their configuration.
//! - **`error`**: the [`ScheduleError`](error::ScheduleError) taxonomy.


pub mod error;
pub mod json;
pub mod scheduling;
