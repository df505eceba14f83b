// SPDX-License-Identifier: MPL-2.0
//! Calendar week shown in the header and window title.
//!
//! Weeks run Monday to Sunday, matching how the server counts check-ins.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Monday and Sunday of the week containing `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    #[must_use]
    pub fn containing(day: NaiveDate) -> Self {
        let offset = i64::from(day.weekday().num_days_from_monday());
        let start = day - TimeDelta::days(offset);
        Self {
            start,
            end: start + TimeDelta::days(6),
        }
    }

    /// Week of the local calendar date.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    #[must_use]
    pub fn start_label(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_label(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}
