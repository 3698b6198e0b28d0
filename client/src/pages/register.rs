//! Registration page. A successful sign-up sends the user on to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::util::nav::LOGIN_PATH;

const EMAIL_REQUIRED: &str = "The email field is required.";
const NAME_REQUIRED: &str = "You must provide a name.";
const PASSWORD_REQUIRED: &str = "You must provide a password.";

/// Validated sign-up fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Trim email and name, require all three fields. The password is only
/// required to be non-empty.
pub(crate) fn validate_register_input(email: &str, name: &str, password: &str) -> Result<RegisterInput, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(RegisterInput { email: email.to_owned(), name: name.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&email.get(), &name.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&input.email, &input.name, &input.password).await {
                    Ok(msg) => {
                        log::info!("registration succeeded: {msg}");
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::info!("registration failed: {e}");
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
