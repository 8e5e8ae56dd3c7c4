use chrono::{Local, NaiveDate};

use crate::domain::Month;

/// Clock abstracts access to the current date so store operations remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date in local time.
    fn today(&self) -> NaiveDate;

    /// Returns the calendar month containing `today()`.
    fn current_month(&self) -> Month {
        Month::from_date(self.today())
    }
}

/// Real-time clock backed by the system's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
