#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod clock;
pub mod dismiss;
pub mod picker;
pub mod state;
pub mod view;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::dismiss::{ListenerGuard, ListenerHost, NoHost};
pub use crate::picker::DatePicker;
pub use crate::state::PickerState;
pub use crate::view::{CellView, WEEKDAY_LABELS};
pub use month_grid::{build, CalendarDate, DayCell, MonthGrid, YearMonth};
