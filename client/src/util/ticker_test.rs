use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Test handle that tracks how many instances are alive.
struct CountedHandle {
    live: Rc<Cell<usize>>,
}

impl CountedHandle {
    fn new(live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self { live: Rc::clone(live) }
    }
}

impl Drop for CountedHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[test]
fn new_slot_is_idle() {
    let slot = TickerSlot::<()>::new();
    assert!(!slot.is_running());
}

#[test]
fn ensure_running_starts_once() {
    let live = Rc::new(Cell::new(0));
    let mut slot = TickerSlot::new();

    assert!(slot.ensure_running(|| CountedHandle::new(&live)));
    assert!(slot.is_running());
    assert_eq!(live.get(), 1);

    for _ in 0..5 {
        assert!(!slot.ensure_running(|| CountedHandle::new(&live)));
    }
    assert_eq!(live.get(), 1);
}

#[test]
fn dropping_slot_cancels_timer() {
    let live = Rc::new(Cell::new(0));
    {
        let mut slot = TickerSlot::new();
        slot.ensure_running(|| CountedHandle::new(&live));
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn start_interval_is_inert_without_browser() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    start_interval(move || flag.set(true));
    assert!(!fired.get());
}
