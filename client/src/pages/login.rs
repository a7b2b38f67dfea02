//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState, LoginOutcome};

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(auth, email_value, password_value).await {
                LoginOutcome::Success { redirect } => navigate(&redirect, NavigateOptions::default()),
                LoginOutcome::Failure(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <A href="/" attr:class="auth-page__back">"Back to home"</A>
                <div class="auth-page__brand">"Fixity"</div>
                <div class="auth-card">
                    <p class="auth-card__context">"Access to civic risk reporting system"</p>
                    <h2 class="auth-card__title">"Login"</h2>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-card__error">{move || error.get()}</div>
                    </Show>
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Enter your email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Enter your password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Authenticating..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="auth-card__warning">"All submissions are publicly indexed."</p>
                    <p class="auth-card__switch">
                        "First time reporting? "
                        <A href="/register">"Create an account"</A>
                    </p>
                </div>
                <p class="auth-page__footnote">"Civic Risk Index updates continuously."</p>
            </div>
        </div>
    }
}
