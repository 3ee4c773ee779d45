use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::scheduling::calendars::dates::parse_time;

/// The hours a business is open on a single day.
///
/// A window never spans midnight: `close` is always strictly after `open` on the same day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OpeningWindowDataModel")]
pub struct OpeningWindow {
    open: NaiveTime,
    close: NaiveTime,
}

#[derive(Deserialize)]
struct OpeningWindowDataModel {
    open: NaiveTime,
    close: NaiveTime,
}

impl TryFrom<OpeningWindowDataModel> for OpeningWindow {
    type Error = ScheduleError;

    fn try_from(model: OpeningWindowDataModel) -> Result<Self> {
        Self::new(model.open, model.close)
    }
}

impl OpeningWindow {
    /// Create a window from two times of day.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self> {
        if close <= open {
            return Err(ScheduleError::InvalidWindow {
                open: open.format("%H:%M").to_string(),
                close: close.format("%H:%M").to_string(),
            });
        }
        Ok(Self { open, close })
    }

    /// Create a window from `H:MM` or `HH:MM` strings, e.g. `("9:00", "15:00")`.
    ///
    /// # Examples
    /// ```rust
    /// # use readyby::scheduling::OpeningWindow;
    /// let window = OpeningWindow::parse("9:00", "15:00").unwrap();
    /// assert_eq!(window.open_seconds(), 6 * 60 * 60);
    /// assert!(OpeningWindow::parse("15:00", "9:00").is_err());
    /// ```
    pub fn parse(open: &str, close: &str) -> Result<Self> {
        Self::new(parse_time(open)?, parse_time(close)?)
    }

    /// Opening time of day.
    pub fn open(&self) -> NaiveTime {
        self.open
    }

    /// Closing time of day.
    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Number of seconds the window is open.
    pub fn open_seconds(&self) -> i64 {
        (self.close - self.open).num_seconds()
    }

    /// The opening instant of this window on `date`.
    pub fn opening_on(&self, date: &NaiveDate) -> NaiveDateTime {
        date.and_time(self.open)
    }

    /// The closing instant of this window on `date`.
    pub fn closing_on(&self, date: &NaiveDate) -> NaiveDateTime {
        date.and_time(self.close)
    }
}
