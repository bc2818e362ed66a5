use month_grid::{CalendarDate, DayCell, YearMonth};

/// Selection and navigation state of a date picker.
///
/// Whether the picker is open and which date is selected are independent:
/// the selection survives closing and reopening the picker until it is
/// replaced or cleared.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct PickerState {
    selected: Option<CalendarDate>,
    visible: YearMonth,
    is_open: bool,
}

impl PickerState {
    /// A closed picker with no selection, displaying the month of `today`.
    pub fn new(today: CalendarDate) -> Self {
        Self {
            selected: None,
            visible: today.year_month(),
            is_open: false,
        }
    }

    // --
    // -- Accessors
    // --

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// The month currently displayed in the grid.
    pub fn visible(&self) -> YearMonth {
        self.visible
    }

    pub fn visible_year(&self) -> i32 {
        self.visible.year()
    }

    /// The displayed month, starting from `0` for January.
    pub fn visible_month0(&self) -> u32 {
        self.visible.month0()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    // --
    // -- Transitions
    // --

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Display the previous month, carrying over to December of the previous
    /// year from January.
    pub fn go_to_prev_month(&mut self) {
        match self.visible.pred() {
            Some(month) => self.visible = month,
            None => {
                #[cfg(feature = "log")]
                log::warn!("No month can be displayed before {}", self.visible);
            }
        }
    }

    /// Display the next month, carrying over to January of the next year from
    /// December.
    pub fn go_to_next_month(&mut self) {
        match self.visible.succ() {
            Some(month) => self.visible = month,
            None => {
                #[cfg(feature = "log")]
                log::warn!("No month can be displayed after {}", self.visible);
            }
        }
    }

    /// Select the day of a cell and close the picker. Cells from the previous
    /// or next month can't be selected: nothing happens and `false` is
    /// returned.
    pub fn select_day(&mut self, cell: &DayCell) -> bool {
        if cell.is_other_month() {
            #[cfg(feature = "log")]
            log::debug!(date:% = cell.date(); "Ignored selection of a day from another month");
            return false;
        }

        self.selected = Some(cell.date());
        self.is_open = false;
        true
    }

    /// Remove the selection and close the picker.
    pub fn clear(&mut self) {
        self.selected = None;
        self.is_open = false;
    }

    // --
    // -- Predicates
    // --

    /// Check if a cell displays the selected date.
    pub fn is_selected(&self, cell: &DayCell) -> bool {
        self.selected == Some(cell.date())
    }
}
