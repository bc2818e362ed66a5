use chrono::{Datelike, Days};

use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::year_month::YearMonth;

/// Number of days in a row of the grid, which is a week starting on Sunday.
pub const GRID_WIDTH: usize = 7;

/// Number of rows in the grid, enough for any month to fit.
pub const GRID_HEIGHT: usize = 6;

/// Total number of cells in a grid.
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// A day displayed in a month grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DayCell {
    date: CalendarDate,
    other_month: bool,
}

impl DayCell {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Check if this cell belongs to the previous or next month and is only
    /// displayed to fill the grid.
    pub fn is_other_month(&self) -> bool {
        self.other_month
    }

    pub fn is_in_month(&self) -> bool {
        !self.other_month
    }

    pub fn is_weekend(&self) -> bool {
        self.date.is_weekend()
    }
}

/// The 42 days displayed for a month, in chronological order and split in
/// weeks starting on Sunday.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: [DayCell; GRID_SIZE],
}

impl MonthGrid {
    /// The month this grid was built for.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell; GRID_SIZE] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.cells.iter()
    }

    /// Iterate over the rows of the grid.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use month_grid::build;
    ///
    /// let grid = build(2024, 8).unwrap();
    /// assert_eq!(grid.weeks().count(), 6);
    ///
    /// for week in grid.weeks() {
    ///     assert_eq!(week[0].date().weekday(), Weekday::Sun);
    ///     assert_eq!(week[6].date().weekday(), Weekday::Sat);
    /// }
    /// ```
    pub fn weeks(&self) -> std::slice::ChunksExact<'_, DayCell> {
        self.cells.chunks_exact(GRID_WIDTH)
    }

    /// Find the cell displaying a given day, if any.
    ///
    /// ```
    /// use month_grid::{build, CalendarDate};
    ///
    /// let grid = build(2024, 1).unwrap();
    /// let jan_30 = CalendarDate::new(2024, 0, 30).unwrap();
    /// let jan_01 = CalendarDate::new(2024, 0, 1).unwrap();
    ///
    /// assert!(grid.find(jan_30).unwrap().is_other_month());
    /// assert!(grid.find(jan_01).is_none());
    /// ```
    pub fn find(&self, date: CalendarDate) -> Option<&DayCell> {
        let first = self.cells[0].date.as_naive();
        let offset = usize::try_from((date.as_naive() - first).num_days()).ok()?;
        self.cells.get(offset)
    }
}

impl IntoIterator for MonthGrid {
    type Item = DayCell;
    type IntoIter = std::array::IntoIter<DayCell, GRID_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the grid displayed for a month, `month` starting from `0` for
/// January. Months `-1` and `12` are carried over to the previous and next
/// years.
///
/// The grid starts with the last days of the previous month, up to the first
/// Sunday before the 1st of the month, then lists all days of the month, and
/// ends with as many days of the next month as required to get 42 cells.
///
/// ```
/// use month_grid::{build, Error};
///
/// let grid = build(2024, 12).unwrap();
/// assert_eq!(grid.month().to_string(), "January 2025");
///
/// assert_eq!(build(2024, 13), Err(Error::InvalidMonth(13)));
/// ```
pub fn build(year: i32, month: i32) -> Result<MonthGrid> {
    build_month(YearMonth::new(year, month)?)
}

/// Build the grid displayed for a month, see [`build`].
pub fn build_month(month: YearMonth) -> Result<MonthGrid> {
    let out_of_range = || Error::OutOfRange {
        year: month.year(),
        month: month.month0() as i32,
    };

    let first_day = month.first_day().as_naive();
    let leading_days = first_day.weekday().num_days_from_sunday();

    let start = first_day
        .checked_sub_days(Days::new(leading_days.into()))
        .ok_or_else(out_of_range)?;

    // The whole grid must fit in the supported range of dates.
    start
        .checked_add_days(Days::new(GRID_SIZE as u64 - 1))
        .ok_or_else(out_of_range)?;

    let cells = std::array::from_fn(|offset| {
        let date: CalendarDate = (start + Days::new(offset as u64)).into();
        DayCell { date, other_month: !month.contains(date) }
    });

    Ok(MonthGrid { month, cells })
}
