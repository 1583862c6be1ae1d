//! Collapsible timezone picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting an option only records it in `ClockState::selected`; the offset
//! changes when the confirm button fires `on_confirm`.

#[cfg(test)]
#[path = "gmt_selector_test.rs"]
mod gmt_selector_test;

use leptos::prelude::*;

use crate::state::clock::ClockState;
use crate::util::gmt::listed_zones;

/// Timezone selector panel, hidden until toggled open.
#[component]
pub fn GmtSelector(on_confirm: Callback<()>) -> impl IntoView {
    let clock = expect_context::<RwSignal<ClockState>>();

    let is_hidden = move || !clock.with(|c| c.selector_open);
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        clock.update(|c| c.select(value));
    };
    let on_confirm_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        on_confirm.run(());
    };

    view! {
        <div id="gmt_selector" class="gmt-selector" class:hide=is_hidden>
            <select
                id="gmt_select"
                class="gmt-selector__select"
                prop:value=move || clock.with(|c| c.selected.clone())
                on:change=on_change
            >
                {listed_zones()
                    .into_iter()
                    .map(|zone| {
                        let is_selected = {
                            let zone = zone.clone();
                            move || clock.with(|c| c.selected == zone)
                        };
                        let label = zone.clone();
                        view! {
                            <option value=zone selected=is_selected>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button id="set_timezone" class="btn gmt-selector__confirm" on:click=on_confirm_click>
                "Set timezone"
            </button>
        </div>
    }
}
