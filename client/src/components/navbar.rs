//! Top navigation bar with session-aware actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above every route. Guests get Register and Login
//! links; a tab holding a token gets a single Logout button. The choice is
//! re-evaluated whenever `SessionState` reports a token change.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::nav::{HOME_PATH, LOGIN_PATH, REGISTER_PATH, logout};

/// Which action set the navbar shows. Exactly one is ever rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavActions {
    /// Register + Login links.
    Guest,
    /// Logout button.
    Member,
}

impl NavActions {
    pub fn for_token_present(has_token: bool) -> Self {
        if has_token { Self::Member } else { Self::Guest }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();
    let on_logout = move |_: leptos::ev::MouseEvent| logout(session, &navigate);

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <a class="navbar__brand" href=HOME_PATH>
                    "JWT Authentication"
                </a>
                <div class="navbar__actions">
                    {move || match NavActions::for_token_present(session.has_token()) {
                        NavActions::Guest => {
                            view! {
                                <a class="btn navbar__link" href=REGISTER_PATH>
                                    "Register"
                                </a>
                                <a class="btn navbar__link" href=LOGIN_PATH>
                                    "Login"
                                </a>
                            }
                                .into_any()
                        }
                        NavActions::Member => {
                            view! {
                                <button class="btn navbar__logout" on:click=on_logout.clone()>
                                    "Log out"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
