//! Members-only page gated by the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page runs `run_guard` once against the backend. Until the
//! guard settles it shows a loading line; protected content only renders in
//! the `Validated` phase. Every failure path ends in a history-replacing
//! redirect to `/login`.
//!
//! LIFECYCLE
//! =========
//! The in-flight validation is bound to a `MountLifetime` that `on_cleanup`
//! cancels, so navigating away early never clears the token or redirects
//! from a page that is already gone.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::guard::GuardPhase;
use crate::state::session::SessionState;
use crate::util::nav::logout;

#[component]
pub fn PrivatePage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();
    let phase = RwSignal::new(GuardPhase::CheckingToken);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::BackendValidator;
        use crate::state::guard::run_guard;
        use crate::util::lifetime::MountLifetime;
        use crate::util::nav::settle;

        let lifetime = MountLifetime::new();
        let task_lifetime = lifetime.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = run_guard(session, &BackendValidator, &task_lifetime, |p| phase.set(p.clone())).await;
            settle(&outcome, &navigate);
        });
        on_cleanup(move || lifetime.cancel());
    }

    let display_name = move || phase.with(|p| p.user().map(|u| u.name.clone()).unwrap_or_default());
    let on_logout = move |_: leptos::ev::MouseEvent| logout(session, &navigate);

    view! {
        <Show
            when=move || phase.with(|p| p.user().is_some())
            fallback=|| view! { <div class="private-page__loading">"Validating..."</div> }
        >
            <div class="private-page">
                <div class="private-card">
                    <header class="private-card__header">
                        <h2>"Members Only"</h2>
                        <p>"Welcome " <strong>{display_name}</strong></p>
                    </header>
                    <div class="private-card__body">
                        <p>
                            {display_name}
                            ", this page is only visible with a validated session."
                        </p>
                    </div>
                    <footer class="private-card__footer">
                        <button class="btn btn--danger" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </footer>
                </div>
            </div>
        </Show>
    }
}
