//! Clock page: offset clock, timezone picker, theme toggle, shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. Buttons and keyboard shortcuts funnel into one
//! `ClockAction` dispatcher so both paths share the same behavior.
//!
//! DESIGN
//! ======
//! The refresh timer lives in a `TickerSlot` owned by an effect. The effect
//! starts the timer the first time `ClockState::ticking` turns on and never
//! again; disposing the page drops the slot and cancels the timer.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use leptos::html::Span;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::clock_face::ClockFace;
use crate::components::control_bar::ControlBar;
use crate::components::gmt_selector::GmtSelector;
use crate::state::clock::{ClockAction, ClockState};
use crate::state::theme::Theme;
use crate::util::notice::{self, STATISTICS_PLACEHOLDER};
use crate::util::shortcuts::SHORTCUT_HINTS;
use crate::util::theme_storage;
use crate::util::ticker::{TickHandle, TickerSlot, start_interval};

/// Clock page — wires controls, the refresh timer, and global shortcuts.
#[component]
pub fn ClockPage() -> impl IntoView {
    let clock = expect_context::<RwSignal<ClockState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let display_ref = NodeRef::<Span>::new();

    let dispatch = Callback::new(move |action: ClockAction| run_action(action, clock, theme, display_ref));

    // Initial zone: same path as reset, which also draws once.
    Effect::new(move || {
        log::info!("initializing clock");
        run_action(ClockAction::Reset, clock, theme, display_ref);
    });

    // Start the periodic refresh once ticking is requested.
    let ticking = Memo::new(move |_| clock.with(|c| c.ticking));
    let ticker = Rc::new(RefCell::new(TickerSlot::<TickHandle>::new()));
    Effect::new(move || {
        if !ticking.get() {
            return;
        }
        let started = ticker
            .borrow_mut()
            .ensure_running(|| start_interval(move || refresh_display(clock, display_ref)));
        if started {
            log::info!("clock updates started");
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let Some(shortcut) = crate::util::shortcuts::resolve(ev.ctrl_key(), &ev.key()) else {
                return;
            };
            ev.prevent_default();
            dispatch.run(ClockAction::from(shortcut));
        });
        on_cleanup(move || handle.remove());
    }

    let on_confirm = Callback::new(move |()| dispatch.run(ClockAction::ConfirmSelection));
    let title = move || clock.with(ClockState::title);

    view! {
        <Title text=title/>
        <main class="clock-page">
            <h1 class="clock-page__heading">"RTClock"</h1>
            <ClockFace display_ref=display_ref/>
            <ControlBar on_action=dispatch/>
            <GmtSelector on_confirm=on_confirm/>
            <footer class="clock-page__shortcuts">
                {SHORTCUT_HINTS
                    .iter()
                    .map(|(keys, action)| {
                        view! {
                            <span class="clock-page__shortcut">
                                <kbd>{*keys}</kbd>
                                " "
                                {*action}
                            </span>
                        }
                    })
                    .collect_view()}
            </footer>
        </main>
    }
}

/// Apply one user intent to the page state.
fn run_action(action: ClockAction, clock: RwSignal<ClockState>, theme: RwSignal<Theme>, display_ref: NodeRef<Span>) {
    match action {
        ClockAction::ToggleSelector => {
            log::info!("toggle GMT selector");
            clock.update(ClockState::toggle_selector);
        }
        ClockAction::ConfirmSelection => {
            clock.update(|c| {
                let offset = c.confirm_selection();
                log::info!("timezone set to {} ({offset} hours)", c.selected);
            });
            refresh_display(clock, display_ref);
        }
        ClockAction::Update => {
            log::info!("manual update");
            refresh_display(clock, display_ref);
        }
        ClockAction::Reset => {
            log::info!("resetting to GMT+0");
            clock.update(|c| {
                c.reset();
            });
            refresh_display(clock, display_ref);
        }
        ClockAction::ToggleTheme => {
            let next = theme_storage::toggle(theme.get_untracked());
            theme.set(next);
        }
        ClockAction::ShowStatistics => notice::show(STATISTICS_PLACEHOLDER),
    }
}

/// Redraw the readout for the current UTC time.
///
/// No-op with an error log when the readout is not mounted.
fn refresh_display(clock: RwSignal<ClockState>, display_ref: NodeRef<Span>) {
    if display_ref.get_untracked().is_none() {
        log::error!("clock display element not found");
        return;
    }
    clock.update(|c| c.redraw(Utc::now()));
    log::debug!("current timezone: {}", clock.with_untracked(ClockState::zone_label));
}
