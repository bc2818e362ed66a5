use chrono::Local;

use month_grid::CalendarDate;

/// Source of the current date, used to pick the initial month and to
/// highlight today in the grid.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads today from the local wall clock every time it is asked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

/// Always returns the same day.
///
/// ```
/// use date_picker::{Clock, FixedClock};
/// use month_grid::CalendarDate;
///
/// let today = CalendarDate::new(2024, 1, 29).unwrap();
/// assert_eq!(FixedClock(today).today(), today);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl FixedClock {
    /// Take a snapshot of another clock.
    pub fn snapshot(clock: &impl Clock) -> Self {
        Self(clock.today())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<F: Fn() -> CalendarDate> Clock for F {
    fn today(&self) -> CalendarDate {
        self()
    }
}
