//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::clock::ClockPage;
use crate::state::clock::ClockState;
use crate::state::theme::Theme;
use crate::util::theme_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the clock and theme contexts and applies the stored theme once
/// the page is live.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let clock = RwSignal::new(ClockState::default());
    let theme = RwSignal::new(Theme::default());

    provide_context(clock);
    provide_context(theme);

    Effect::new(move || {
        let initial = theme_storage::read_preference();
        theme_storage::apply(initial);
        theme.set(initial);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rtclock.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ClockPage/>
            </Routes>
        </Router>
    }
}
