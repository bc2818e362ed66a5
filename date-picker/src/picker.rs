use month_grid::{build_month, DayCell, MonthGrid};

use crate::clock::{Clock, SystemClock};
use crate::dismiss::{ListenerGuard, ListenerHost, NoHost};
use crate::state::PickerState;
use crate::view::CellView;

/// A date picker, as owned by the widget displaying it.
///
/// The renderer reads [`DatePicker::state`] and [`DatePicker::cells`] and
/// forwards user gestures to the transitions: a click on a day calls
/// [`DatePicker::select_day`], the arrows call
/// [`DatePicker::go_to_prev_month`] and [`DatePicker::go_to_next_month`], the
/// input toggles the picker, "Done" closes it and "Clear" clears it.
///
/// ```
/// use date_picker::{DatePicker, FixedClock};
/// use month_grid::CalendarDate;
///
/// let today = CalendarDate::new(2024, 1, 14).unwrap();
/// let mut picker = DatePicker::with_clock(FixedClock(today));
/// picker.open();
/// picker.go_to_next_month();
///
/// let grid = picker.grid().unwrap();
/// assert_eq!(grid.month().to_string(), "March 2024");
///
/// let cell = grid.iter().find(|cell| cell.is_in_month()).unwrap();
/// assert!(picker.select_day(cell));
/// assert!(!picker.state().is_open());
/// assert_eq!(picker.selected_label(), "2024-03-01");
/// ```
#[derive(Debug)]
pub struct DatePicker<C: Clock = SystemClock, H: ListenerHost = NoHost> {
    state: PickerState,
    clock: C,
    host: H,
    /// Registered exactly while the picker is open.
    listener: Option<ListenerGuard<H>>,
}

impl DatePicker<SystemClock, NoHost> {
    /// A closed picker displaying the current month of the local clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DatePicker<SystemClock, NoHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DatePicker<C, NoHost> {
    /// A closed picker displaying the current month of given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: PickerState::new(clock.today()),
            clock,
            host: NoHost,
            listener: None,
        }
    }
}

impl<C: Clock, H: ListenerHost> DatePicker<C, H> {
    /// Attach the source of outside clicks that should dismiss this picker.
    pub fn with_host<H2: ListenerHost>(self, host: H2) -> DatePicker<C, H2> {
        let mut picker = DatePicker {
            state: self.state,
            clock: self.clock,
            host,
            listener: None,
        };

        picker.sync_listener();
        picker
    }

    // --
    // -- Accessors
    // --

    /// Get a snapshot of the current state.
    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Check if an outside click listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Build the grid for the displayed month.
    ///
    /// This may only fail for months at the edge of the supported range of
    /// dates.
    pub fn grid(&self) -> month_grid::Result<MonthGrid> {
        build_month(self.state.visible())
    }

    /// Build the grid for the displayed month and evaluate how each cell
    /// must be rendered.
    pub fn cells(&self) -> month_grid::Result<impl Iterator<Item = CellView> + '_> {
        let today = self.clock.today();
        let grid = self.grid()?;

        Ok(grid
            .into_iter()
            .map(move |cell| CellView::new(cell, &self.state, today)))
    }

    /// Header text for the displayed month, such as "February 2024".
    pub fn title(&self) -> String {
        self.state.visible().to_string()
    }

    /// Text displayed in the input, empty if nothing is selected.
    pub fn selected_label(&self) -> String {
        self.state
            .selected()
            .map(|date| date.to_string())
            .unwrap_or_default()
    }

    // --
    // -- Predicates
    // --

    pub fn is_selected(&self, cell: &DayCell) -> bool {
        self.state.is_selected(cell)
    }

    /// Check if a cell displays the current day, as given by the clock now.
    pub fn is_today(&self, cell: &DayCell) -> bool {
        cell.date() == self.clock.today()
    }

    pub fn is_weekend(&self, cell: &DayCell) -> bool {
        cell.is_weekend()
    }

    // --
    // -- Transitions
    // --

    pub fn open(&mut self) {
        self.state.open();
        self.sync_listener();
    }

    pub fn close(&mut self) {
        self.state.close();
        self.sync_listener();
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
        self.sync_listener();
    }

    pub fn go_to_prev_month(&mut self) {
        self.state.go_to_prev_month();

        #[cfg(feature = "log")]
        log::debug!(month:% = self.state.visible(); "Showing previous month");
    }

    pub fn go_to_next_month(&mut self) {
        self.state.go_to_next_month();

        #[cfg(feature = "log")]
        log::debug!(month:% = self.state.visible(); "Showing next month");
    }

    /// Select the day of a cell and close the picker, see
    /// [`PickerState::select_day`].
    pub fn select_day(&mut self, cell: &DayCell) -> bool {
        let applied = self.state.select_day(cell);

        if applied {
            #[cfg(feature = "log")]
            log::debug!(date:% = cell.date(); "Selected day");

            self.sync_listener();
        }

        applied
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.sync_listener();

        #[cfg(feature = "log")]
        log::debug!("Cleared selection");
    }

    /// Handle a pointer press reported by the listener host. A press outside
    /// of the picker while it is open closes it, returns `true` if it did.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if inside || !self.state.is_open() || self.listener.is_none() {
            return false;
        }

        #[cfg(feature = "log")]
        log::debug!("Closing picker after an outside click");

        self.close();
        true
    }

    /// Hold a listener registration exactly while the picker is open.
    fn sync_listener(&mut self) {
        match (self.state.is_open(), self.listener.is_some()) {
            (true, false) => self.listener = Some(ListenerGuard::acquire(&self.host)),
            (false, true) => self.listener = None,
            _ => {}
        }
    }
}
