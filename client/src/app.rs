//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, login::LoginPage, private::PrivatePage, register::RegisterPage};
use crate::state::session::SessionState;

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
/// Provides the tab's `SessionState` and sets up client-side routing. The
/// session only starts reporting a stored token once this effect has run in
/// the browser, so hydration sees the same markup the server produced.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionState::browser();
    provide_context(session);
    Effect::new(move || session.mark_hydrated());

    view! {
        <Stylesheet id="leptos" href="/pkg/session-gate.css"/>
        <Title text="JWT Authentication"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("private") view=PrivatePage/>
                </Routes>
            </main>
        </Router>
    }
}
