use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::date::CalendarDate;
use crate::error::{Error, Result};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Check if a year of the Gregorian calendar has 366 days.
///
/// ```
/// use month_grid::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(2023));
/// assert!(!is_leap_year(2100));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month, `month0` starting from `0` for January.
///
/// ```
/// use month_grid::count_days;
///
/// assert_eq!(count_days(2024, 0), 31);
/// assert_eq!(count_days(2024, 1), 29);
/// assert_eq!(count_days(2023, 1), 28);
/// assert_eq!(count_days(2023, 10), 30);
/// ```
pub const fn count_days(year: i32, month0: u32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// A month of a given year, which is the unit a date picker navigates by.
///
/// The month is always normalized into `0..=11` and its first day is always
/// representable.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Build a month from a year and a month that may overflow by one in
    /// either direction: `-1` is December of the previous year and `12` is
    /// January of the next year.
    ///
    /// ```
    /// use month_grid::{Error, YearMonth};
    ///
    /// let dec = YearMonth::new(2024, -1).unwrap();
    /// assert_eq!((dec.year(), dec.month0()), (2023, 11));
    ///
    /// let jan = YearMonth::new(2024, 12).unwrap();
    /// assert_eq!((jan.year(), jan.month0()), (2025, 0));
    ///
    /// assert_eq!(YearMonth::new(2024, 13), Err(Error::InvalidMonth(13)));
    /// ```
    pub fn new(year: i32, month: i32) -> Result<Self> {
        let (normalized_year, month0) = match month {
            -1 => (year.checked_sub(1), 11),
            0..=11 => (Some(year), month.unsigned_abs()),
            12 => (year.checked_add(1), 0),
            _ => return Err(Error::InvalidMonth(month)),
        };

        normalized_year
            .and_then(|year| Self::from_parts(year, month0))
            .ok_or(Error::OutOfRange { year, month })
    }

    fn from_parts(year: i32, month0: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
        Some(Self { year, month0 })
    }

    pub(crate) fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, starting from `0` for January.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// English name of the month.
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }

    pub fn first_day(&self) -> CalendarDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .expect("first of a normalized month should always exist")
            .into()
    }

    pub fn count_days(&self) -> u32 {
        count_days(self.year, self.month0)
    }

    /// Check if a day belongs to this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Get the previous month, or `None` if it can't be represented.
    ///
    /// ```
    /// use month_grid::YearMonth;
    ///
    /// let jan = YearMonth::new(2024, 0).unwrap();
    /// assert_eq!(jan.pred(), Some(YearMonth::new(2023, 11).unwrap()));
    /// ```
    pub fn pred(&self) -> Option<Self> {
        if self.month0 == 0 {
            Self::from_parts(self.year.checked_sub(1)?, 11)
        } else {
            Self::from_parts(self.year, self.month0 - 1)
        }
    }

    /// Get the next month, or `None` if it can't be represented.
    ///
    /// ```
    /// use month_grid::YearMonth;
    ///
    /// let dec = YearMonth::new(2024, 11).unwrap();
    /// assert_eq!(dec.succ(), Some(YearMonth::new(2025, 0).unwrap()));
    /// ```
    pub fn succ(&self) -> Option<Self> {
        if self.month0 == 11 {
            Self::from_parts(self.year.checked_add(1)?, 0)
        } else {
            Self::from_parts(self.year, self.month0 + 1)
        }
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

impl fmt::Display for YearMonth {
    /// ```
    /// use month_grid::YearMonth;
    ///
    /// assert_eq!(YearMonth::new(2024, 1).unwrap().to_string(), "February 2024");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
