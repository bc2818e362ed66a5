#![doc = include_str!("../README.md")]

pub mod error;

mod date;
mod grid;
mod year_month;

#[cfg(test)]
mod tests;

pub use crate::date::CalendarDate;
pub use crate::error::{Error, Result};
pub use crate::grid::{build, build_month, DayCell, MonthGrid, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};
pub use crate::year_month::{count_days, is_leap_year, YearMonth};
