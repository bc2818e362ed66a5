use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::year_month::YearMonth;

/// A day of the Gregorian calendar, with no time-of-day component.
///
/// Months are counted from zero, `0` being January.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components, returns `None` if this day does not
    /// exist.
    ///
    /// ```
    /// use month_grid::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2024, 1, 29).is_some());
    /// assert!(CalendarDate::new(2023, 1, 29).is_none());
    /// assert!(CalendarDate::new(2023, 12, 1).is_none());
    /// ```
    pub fn new(year: i32, month0: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, starting from `0` for January.
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Day of the month, starting from `1`.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Check if this day falls on a Saturday or a Sunday.
    ///
    /// ```
    /// use month_grid::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2024, 1, 3).unwrap().is_weekend());
    /// assert!(CalendarDate::new(2024, 1, 4).unwrap().is_weekend());
    /// assert!(!CalendarDate::new(2024, 1, 5).unwrap().is_weekend());
    /// ```
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The month this day belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(self.0)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
