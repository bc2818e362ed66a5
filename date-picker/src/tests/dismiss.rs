use std::cell::RefCell;
use std::rc::Rc;

use crate::{cell, date, DatePicker, FixedClock, ListenerGuard, ListenerHost, NoHost};

/// Keeps track of the listeners registered on it.
#[derive(Clone, Default)]
struct RecordingHost {
    next_id: Rc<RefCell<u32>>,
    active: Rc<RefCell<Vec<u32>>>,
}

impl RecordingHost {
    fn active(&self) -> Vec<u32> {
        self.active.borrow().clone()
    }

    fn registered(&self) -> u32 {
        *self.next_id.borrow()
    }
}

impl ListenerHost for RecordingHost {
    type Handle = u32;

    fn register(&self) -> u32 {
        let mut next_id = self.next_id.borrow_mut();
        let id = *next_id;
        *next_id += 1;
        self.active.borrow_mut().push(id);
        id
    }

    fn unregister(&self, handle: u32) {
        self.active.borrow_mut().retain(|id| *id != handle);
    }
}

fn picker_with_host() -> (DatePicker<FixedClock, RecordingHost>, RecordingHost) {
    let host = RecordingHost::default();
    let picker = DatePicker::with_clock(FixedClock(date!("2024-02-14"))).with_host(host.clone());
    (picker, host)
}

#[test]
fn guard_releases_on_drop() {
    let host = RecordingHost::default();
    let guard = ListenerGuard::acquire(&host);
    assert_eq!(host.active(), [0]);
    assert_eq!(format!("{guard:?}"), "ListenerGuard { registered: true }");
    drop(guard);
    assert!(host.active().is_empty());
}

#[test]
fn listens_only_while_open() {
    let (mut picker, host) = picker_with_host();
    assert!(!picker.is_listening());
    assert!(host.active().is_empty());

    picker.open();
    assert!(picker.is_listening());
    assert_eq!(host.active(), [0]);

    // Opening twice keeps the same registration.
    picker.open();
    assert_eq!(host.active(), [0]);

    picker.go_to_next_month();
    assert_eq!(host.active(), [0]);

    picker.close();
    assert!(!picker.is_listening());
    assert!(host.active().is_empty());

    picker.toggle();
    assert_eq!(host.active(), [1]);
    picker.toggle();
    assert!(host.active().is_empty());
    assert_eq!(host.registered(), 2);
}

#[test]
fn released_on_select_and_clear() {
    let (mut picker, host) = picker_with_host();

    picker.open();
    assert!(!picker.select_day(&cell!("2024-01-31", in = 2024, 1)));
    assert_eq!(host.active(), [0]);

    assert!(picker.select_day(&cell!("2024-02-02")));
    assert!(host.active().is_empty());

    picker.open();
    assert_eq!(host.active(), [1]);
    picker.clear();
    assert!(host.active().is_empty());
}

#[test]
fn released_on_teardown() {
    let (mut picker, host) = picker_with_host();
    picker.open();
    assert_eq!(host.active(), [0]);

    drop(picker);
    assert!(host.active().is_empty());
}

#[test]
fn released_when_host_is_replaced() {
    let (mut picker, host) = picker_with_host();
    picker.open();

    let other = RecordingHost::default();
    let picker = picker.with_host(other.clone());
    assert!(host.active().is_empty());
    assert_eq!(other.active(), [0]);
    assert!(picker.state().is_open());

    let picker = picker.with_host(NoHost);
    assert!(other.active().is_empty());
    assert!(picker.is_listening());
}

#[test]
fn outside_click_closes() {
    let (mut picker, host) = picker_with_host();

    // Nothing to dismiss while closed.
    assert!(!picker.pointer_down(false));

    picker.open();
    assert!(!picker.pointer_down(true));
    assert!(picker.state().is_open());

    assert!(picker.pointer_down(false));
    assert!(!picker.state().is_open());
    assert!(host.active().is_empty());
}

#[test]
fn outside_click_keeps_selection() {
    let (mut picker, _host) = picker_with_host();
    picker.select_day(&cell!("2024-02-02"));
    picker.open();
    picker.go_to_prev_month();

    assert!(picker.pointer_down(false));
    assert_eq!(picker.state().selected(), Some(date!("2024-02-02")));
    assert_eq!(picker.title(), "January 2024");
}
