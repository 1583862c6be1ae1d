//! Row of clock and theme controls.
//!
//! Every button maps to one `ClockAction`; the page decides what it does.

use leptos::prelude::*;

use crate::state::clock::ClockAction;
use crate::state::theme::Theme;

/// Control buttons for the clock page.
#[component]
pub fn ControlBar(on_action: Callback<ClockAction>) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let fire = move |action: ClockAction| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            on_action.run(action);
        }
    };

    view! {
        <nav class="control-bar">
            <button
                id="change_gmt_btn"
                class="btn control-bar__zone"
                on:click=fire(ClockAction::ToggleSelector)
                title="Choose timezone"
            >
                "Change timezone"
            </button>
            <button id="update" class="btn" on:click=fire(ClockAction::Update) title="Update (Ctrl+U)">
                "Update"
            </button>
            <button id="reset" class="btn" on:click=fire(ClockAction::Reset) title="Reset to GMT+0 (Ctrl+R)">
                "Reset"
            </button>
            <button
                id="toggle_theme"
                class="btn control-bar__theme"
                on:click=fire(ClockAction::ToggleTheme)
                title="Toggle theme (Ctrl+T)"
            >
                {move || theme.get().button_label()}
            </button>
            <button id="show_statistics" class="btn" on:click=fire(ClockAction::ShowStatistics)>
                "Statistics"
            </button>
        </nav>
    }
}
