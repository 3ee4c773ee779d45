mod business_cal;
pub(crate) mod dates;
mod dateroll;
mod window;

pub use crate::scheduling::calendars::{
    business_cal::BusinessCalendar,
    dateroll::{OpeningHours, DEFAULT_SEARCH_LIMIT},
    dates::{format_instant, nd, ndt, next_date, parse_date, parse_instant, parse_time},
    window::OpeningWindow,
};
