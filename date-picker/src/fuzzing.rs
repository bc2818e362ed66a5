//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use std::cell::Cell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use chrono::NaiveDate;

use month_grid::{CalendarDate, GRID_SIZE};

use crate::clock::FixedClock;
use crate::dismiss::ListenerHost;
use crate::DatePicker;

/// A user gesture forwarded to the picker
#[derive(Arbitrary, Clone, Debug)]
pub enum Action {
    Open,
    Close,
    Toggle,
    PrevMonth,
    NextMonth,
    SelectCell(u8),
    Clear,
    PointerDown { inside: bool },
}

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub year: i32,
    pub ordinal: u16,
    pub actions: Vec<Action>,
}

/// Counts registered listeners.
#[derive(Clone, Debug, Default)]
pub struct CountingHost(Rc<Cell<u32>>);

impl CountingHost {
    pub fn active(&self) -> u32 {
        self.0.get()
    }
}

impl ListenerHost for CountingHost {
    type Handle = ();

    fn register(&self) -> Self::Handle {
        self.0.set(self.0.get() + 1);
    }

    fn unregister(&self, _handle: Self::Handle) {
        self.0.set(self.0.get() - 1);
    }
}

/// Replay the actions and check that the picker's invariants hold after
/// each of them. Returns `false` if the input is not relevant.
pub fn run_fuzz_picker(data: Data) -> bool {
    let Some(today) = NaiveDate::from_yo_opt(data.year, data.ordinal.into()) else {
        return false;
    };

    let today = CalendarDate::from(today);
    let host = CountingHost::default();
    let mut picker = DatePicker::with_clock(FixedClock(today)).with_host(host.clone());

    // Make sure the grid is valid around the initial month.
    if picker.grid().is_err() {
        return false;
    }

    for action in data.actions {
        let before = picker.state();

        match action {
            Action::Open => picker.open(),
            Action::Close => picker.close(),
            Action::Toggle => picker.toggle(),
            Action::PrevMonth => picker.go_to_prev_month(),
            Action::NextMonth => picker.go_to_next_month(),
            Action::Clear => picker.clear(),
            Action::PointerDown { inside } => {
                let closed = picker.pointer_down(inside);
                assert_eq!(closed, before.is_open() && !inside);
            }
            Action::SelectCell(index) => {
                let Ok(grid) = picker.grid() else {
                    continue;
                };

                let cell = grid.cells()[usize::from(index) % GRID_SIZE];
                let applied = picker.select_day(&cell);
                assert_eq!(applied, cell.is_in_month());

                if applied {
                    assert_eq!(picker.state().selected(), Some(cell.date()));
                    assert!(!picker.state().is_open());
                } else {
                    assert_eq!(picker.state(), before);
                }
            }
        }

        let state = picker.state();
        assert_eq!(host.active(), u32::from(state.is_open()));
        assert_eq!(picker.is_listening(), state.is_open());

        if let Ok(grid) = picker.grid() {
            let in_month = grid.iter().filter(|cell| cell.is_in_month()).count();
            assert_eq!(in_month as u32, state.visible().count_days());

            for pair in grid.cells().windows(2) {
                assert_eq!(
                    pair[0].date().as_naive().succ_opt(),
                    Some(pair[1].date().as_naive()),
                );
            }
        }
    }

    drop(picker);
    assert_eq!(host.active(), 0);
    true
}
