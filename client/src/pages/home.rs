//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::nav::{LOGIN_PATH, PRIVATE_PATH, REGISTER_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionState>();

    view! {
        <div class="home-page">
            <h1>"JWT Authentication"</h1>
            <Show
                when=move || session.has_token()
                fallback=|| {
                    view! {
                        <p>
                            "Create an account or sign in to reach the members area. "
                            <a href=REGISTER_PATH>"Register"</a>
                            " / "
                            <a href=LOGIN_PATH>"Login"</a>
                        </p>
                    }
                }
            >
                <p>
                    "You are signed in. "
                    <a href=PRIVATE_PATH>"Go to the members area"</a>
                </p>
            </Show>
        </div>
    }
}
