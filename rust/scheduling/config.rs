use chrono::Weekday;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scheduling::BusinessCalendar;

/// A pair of `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoursConfig {
    /// Opening time, `HH:MM`.
    pub open: String,
    /// Closing time, `HH:MM`.
    pub close: String,
}

/// Declarative description of a [`BusinessCalendar`].
///
/// [`CalendarConfig::build`] replays the configuration in a fixed order: default hours for
/// every weekday, `weekly` hours, `closed_weekdays`, date `overrides` and finally
/// `closed_dates`. A weekday listed in both `weekly` and `closed_weekdays` ends up closed.
///
/// # Examples
/// ```rust
/// # use readyby::json::JSON;
/// # use readyby::scheduling::{CalendarConfig, OpeningHours, nd};
/// let config = CalendarConfig::from_json(r#"{
///     "open": "09:00",
///     "close": "15:00",
///     "weekly": {"Fri": {"open": "10:00", "close": "17:00"}},
///     "closed_dates": ["2010-12-25"]
/// }"#).unwrap();
/// let cal = config.build().unwrap();
/// assert!(!cal.is_open(&nd(2010, 12, 25)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Default opening time applied to every weekday.
    #[serde(default = "default_open")]
    pub open: String,
    /// Default closing time applied to every weekday.
    #[serde(default = "default_close")]
    pub close: String,
    /// Recurring hours replacing the default for particular weekdays.
    #[serde(default)]
    pub weekly: IndexMap<Weekday, HoursConfig>,
    /// Weekdays closed by default.
    #[serde(default)]
    pub closed_weekdays: Vec<Weekday>,
    /// Special hours keyed by `YYYY-MM-DD` date.
    #[serde(default)]
    pub overrides: IndexMap<String, HoursConfig>,
    /// `YYYY-MM-DD` dates on which the business is closed.
    #[serde(default)]
    pub closed_dates: Vec<String>,
}

fn default_open() -> String {
    "09:00".to_string()
}
fn default_close() -> String {
    "17:00".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
            weekly: IndexMap::new(),
            closed_weekdays: Vec::new(),
            overrides: IndexMap::new(),
            closed_dates: Vec::new(),
        }
    }
}

impl CalendarConfig {
    /// Build the calendar, validating every time and date along the way.
    pub fn build(&self) -> Result<BusinessCalendar> {
        let mut cal = BusinessCalendar::try_new(&self.open, &self.close)?;
        for (weekday, hours) in &self.weekly {
            cal.set_weekly_hours(*weekday, &hours.open, &hours.close)?;
        }
        cal.close_weekdays(&self.closed_weekdays);
        for (date, hours) in &self.overrides {
            cal.set_date_override_hours(date, &hours.open, &hours.close)?;
        }
        cal.close_dates(self.closed_dates.as_slice())?;
        Ok(cal)
    }
}
