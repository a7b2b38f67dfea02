//! Account registration for citizens (email OTP) and authorities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Citizens verify their email with a one-time code before the account is
//! created; the backend answers with a redirect into the citizen area.
//! Authorities register directly against a jurisdiction chosen from the static
//! state/district/block tables and are sent to `/login` afterwards.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{ApiResponse, AuthorityRegistration, CitizenRegistration};
use crate::util::jurisdictions::{STATES, blocks_of, districts_of};

const ACKNOWLEDGE_TERMS: &str = "Please acknowledge the terms";
const OTP_FAILED: &str = "Failed to send OTP";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Which registration form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterTab {
    #[default]
    Citizen,
    Authority,
}

/// Trim the email and require it before asking for a code.
pub fn validate_otp_request(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter email");
    }
    Ok(email.to_owned())
}

/// A code counts as sent when the backend answers with a `message`.
pub fn interpret_otp_response(response: Result<ApiResponse, String>) -> Result<(), String> {
    match response {
        Ok(ApiResponse { message: Some(_), .. }) => Ok(()),
        Ok(ApiResponse { error, .. }) => Err(error.unwrap_or_else(|| OTP_FAILED.to_owned())),
        Err(_) => Err(OTP_FAILED.to_owned()),
    }
}

pub fn require_acknowledgement(acknowledged: bool) -> Result<(), &'static str> {
    if acknowledged { Ok(()) } else { Err(ACKNOWLEDGE_TERMS) }
}

/// Citizen registration succeeds when the backend names a redirect target.
pub fn interpret_citizen_registration(response: Result<ApiResponse, String>) -> Result<String, String> {
    match response {
        Ok(ApiResponse { redirect: Some(redirect), .. }) => Ok(redirect),
        Ok(ApiResponse { error, .. }) => Err(error.unwrap_or_else(|| REGISTRATION_FAILED.to_owned())),
        Err(_) => Err(REGISTRATION_FAILED.to_owned()),
    }
}

/// Authority registration succeeds unless the backend reports an error.
pub fn interpret_authority_registration(response: Result<ApiResponse, String>) -> Result<(), String> {
    match response {
        Ok(resp) if resp.error.is_none() && resp.success != Some(false) => Ok(()),
        _ => Err(REGISTRATION_FAILED.to_owned()),
    }
}

/// Default jurisdiction preselected on the authority form.
pub fn default_authority_form() -> AuthorityRegistration {
    AuthorityRegistration {
        state: "Odisha".to_owned(),
        district: "Khordha".to_owned(),
        block: "Bhubaneswar Ward 19".to_owned(),
        ..AuthorityRegistration::default()
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let tab = RwSignal::new(RegisterTab::default());
    let tab_class = move |which: RegisterTab| {
        if tab.get() == which { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <A href="/" attr:class="auth-page__back">"Back to home"</A>
                <div class="auth-page__brand">"Fixity"</div>
                <div class="auth-card">
                    <p class="auth-card__context">"Register to submit civic risk reports"</p>
                    <h2 class="auth-card__title">"Create Account"</h2>
                    <div class="auth-tabs">
                        <button class=move || tab_class(RegisterTab::Citizen) on:click=move |_| tab.set(RegisterTab::Citizen)>
                            "Citizen"
                        </button>
                        <button class=move || tab_class(RegisterTab::Authority) on:click=move |_| tab.set(RegisterTab::Authority)>
                            "Authority"
                        </button>
                    </div>
                    <Show when=move || tab.get() == RegisterTab::Citizen fallback=|| view! { <AuthorityForm/> }>
                        <CitizenForm/>
                    </Show>
                    <p class="auth-card__switch">
                        "Already registered? "
                        <A href="/login">"Login"</A>
                    </p>
                </div>
                <p class="auth-page__footnote">"Civic Risk Index updates continuously."</p>
            </div>
        </div>
    }
}

#[component]
fn CitizenForm() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let otp_sent = RwSignal::new(false);
    let acknowledged = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_send_otp = move |_| {
        if busy.get() {
            return;
        }
        let email_value = match validate_otp_request(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        leptos::task::spawn_local(async move {
            match interpret_otp_response(api::send_otp(&email_value).await) {
                Ok(()) => {
                    otp_sent.set(true);
                    info.set("OTP sent. Check your email.".to_owned());
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = require_acknowledgement(acknowledged.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        let form = CitizenRegistration { username: username.get(), password: password.get(), otp: otp.get() };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match interpret_citizen_registration(api::register_citizen(&form).await) {
                Ok(redirect) => navigate(&redirect, NavigateOptions::default()),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <Show when=move || !error.get().is_empty()>
                <div class="auth-card__error">{move || error.get()}</div>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <div class="auth-card__info">{move || info.get()}</div>
            </Show>
            <label class="auth-label">"Username"</label>
            <input
                class="auth-input"
                type="text"
                required
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <label class="auth-label">"Email"</label>
            <input
                class="auth-input"
                type="email"
                required
                disabled=move || otp_sent.get()
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label class="auth-label">"Password"</label>
            <input
                class="auth-input"
                type="password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <Show
                when=move || otp_sent.get()
                fallback=move || {
                    view! {
                        <button class="auth-button" type="button" disabled=move || busy.get() on:click=on_send_otp>
                            {move || if busy.get() { "Sending..." } else { "Verify Email & Send OTP" }}
                        </button>
                    }
                }
            >
                <label class="auth-label">"Enter 4-digit OTP"</label>
                <input
                    class="auth-input auth-input--code"
                    type="text"
                    placeholder="XXXX"
                    maxlength="4"
                    required
                    prop:value=move || otp.get()
                    on:input=move |ev| otp.set(event_target_value(&ev))
                />
                <label class="auth-check">
                    <input
                        type="checkbox"
                        prop:checked=move || acknowledged.get()
                        on:change=move |ev| acknowledged.set(event_target_checked(&ev))
                    />
                    <span>"I understand reports contribute to a public civic risk index."</span>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get() || !acknowledged.get()>
                    {move || if busy.get() { "Verifying..." } else { "Complete Registration" }}
                </button>
            </Show>
            <p class="auth-card__warning">"All submissions are publicly indexed."</p>
        </form>
    }
}

#[component]
fn AuthorityForm() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(default_authority_form());
    let acknowledged = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = require_acknowledgement(acknowledged.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        let body = form.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match interpret_authority_registration(api::register_authority(&body).await) {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <Show when=move || !error.get().is_empty()>
                <div class="auth-card__error">{move || error.get()}</div>
            </Show>
            <label class="auth-label">"Officer Name"</label>
            <input
                class="auth-input"
                type="text"
                required
                prop:value=move || form.get().username
                on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
            />
            <label class="auth-label">"Gov Email"</label>
            <input
                class="auth-input"
                type="email"
                placeholder="name@gov.in"
                required
                prop:value=move || form.get().email
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <label class="auth-label">"Password"</label>
            <input
                class="auth-input"
                type="password"
                required
                prop:value=move || form.get().password
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
            <div class="auth-form__row">
                <div>
                    <label class="auth-label">"State"</label>
                    <select
                        class="auth-input"
                        on:change=move |ev| {
                            form.update(|f| {
                                f.state = event_target_value(&ev);
                                f.district.clear();
                                f.block.clear();
                            });
                        }
                        prop:value=move || form.get().state
                    >
                        {STATES
                            .iter()
                            .map(|&s| view! { <option value=s>{s}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class="auth-label">"District"</label>
                    <select
                        class="auth-input"
                        on:change=move |ev| {
                            form.update(|f| {
                                f.district = event_target_value(&ev);
                                f.block.clear();
                            });
                        }
                        prop:value=move || form.get().district
                    >
                        <option value="">"Select District"</option>
                        {move || {
                            districts_of(&form.get().state)
                                .iter()
                                .map(|&d| view! { <option value=d>{d}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>
            <label class="auth-label">"Block / Ward"</label>
            <select
                class="auth-input"
                required
                disabled=move || form.get().district.is_empty()
                on:change=move |ev| form.update(|f| f.block = event_target_value(&ev))
                prop:value=move || form.get().block
            >
                <option value="">"Select Block / Ward"</option>
                {move || {
                    blocks_of(&form.get().district)
                        .iter()
                        .map(|&b| view! { <option value=b>{b}</option> })
                        .collect_view()
                }}
            </select>
            <label class="auth-check">
                <input
                    type="checkbox"
                    prop:checked=move || acknowledged.get()
                    on:change=move |ev| acknowledged.set(event_target_checked(&ev))
                />
                <span>"I understand all actions are logged in the public civic risk system."</span>
            </label>
            <button class="auth-button" type="submit" disabled=move || busy.get() || !acknowledged.get()>
                {move || if busy.get() { "Registering..." } else { "Register Authority" }}
            </button>
            <p class="auth-card__warning">"Authority actions are publicly auditable."</p>
        </form>
    }
}
