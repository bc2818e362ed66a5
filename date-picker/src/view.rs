use month_grid::{CalendarDate, DayCell};

use crate::state::PickerState;

/// Column headers of the grid, weeks start on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A cell of the grid together with everything a renderer needs to style it.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CellView {
    pub cell: DayCell,
    pub selected: bool,
    pub today: bool,
    pub weekend: bool,
}

impl CellView {
    pub(crate) fn new(cell: DayCell, state: &PickerState, today: CalendarDate) -> Self {
        Self {
            cell,
            selected: state.is_selected(&cell),
            today: cell.date() == today,
            weekend: cell.is_weekend(),
        }
    }

    /// Day of the month to display.
    pub fn day(&self) -> u32 {
        self.cell.date().day()
    }

    /// Cells from the previous or next month are rendered disabled.
    pub fn is_selectable(&self) -> bool {
        self.cell.is_in_month()
    }
}
