//! Large time readout for the selected zone.

use leptos::html::Span;
use leptos::prelude::*;

use crate::state::clock::ClockState;

/// Clock readout. `display_ref` lets the page check the readout is mounted
/// before drawing into it.
#[component]
pub fn ClockFace(display_ref: NodeRef<Span>) -> impl IntoView {
    let clock = expect_context::<RwSignal<ClockState>>();

    let time_text = move || clock.with(|c| c.display_text().to_owned());
    let zone_text = move || clock.with(ClockState::zone_label);

    view! {
        <section class="clock-face">
            <span id="app_data" class="clock-face__time" node_ref=display_ref>
                {time_text}
            </span>
            <span class="clock-face__zone">{zone_text}</span>
        </section>
    }
}
