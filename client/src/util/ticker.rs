//! Owned slot for the clock's periodic refresh timer.
//!
//! DESIGN
//! ======
//! The slot owns at most one timer handle and only ever starts one. Timer
//! handles cancel themselves on drop (`gloo_timers::callback::Interval`
//! does), so dropping the slot tears the timer down with the component that
//! owns it.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

/// Refresh period for the clock display.
pub const TICK_PERIOD_MS: u32 = 1_000;

/// Timer handle type for the current build.
#[cfg(feature = "hydrate")]
pub type TickHandle = gloo_timers::callback::Interval;

/// Server renders never tick; the handle is a placeholder.
#[cfg(not(feature = "hydrate"))]
pub type TickHandle = ();

/// Start a browser interval calling `tick` every [`TICK_PERIOD_MS`].
pub fn start_interval(tick: impl FnMut() + 'static) -> TickHandle {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Interval::new(TICK_PERIOD_MS, tick)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tick;
    }
}

/// Holds the single active timer, if any.
#[derive(Debug)]
pub struct TickerSlot<H> {
    active: Option<H>,
}

impl<H> Default for TickerSlot<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H> TickerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Start a timer with `start` unless one is already running.
    ///
    /// Returns `true` when a new timer was started.
    pub fn ensure_running(&mut self, start: impl FnOnce() -> H) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(start());
        true
    }
}
