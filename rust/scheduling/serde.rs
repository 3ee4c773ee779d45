use crate::json::JSON;
use crate::scheduling::{BusinessCalendar, CalendarConfig, OpeningWindow};

impl JSON for BusinessCalendar {}
impl JSON for OpeningWindow {}
impl JSON for CalendarConfig {}
