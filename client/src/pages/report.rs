//! Incident report form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logged-in users file a report with category, impact context, jurisdiction,
//! an optional GPS fix and an optional photo. The form is sent as multipart
//! so the photo travels with the fields; the backend scores the report and
//! answers with a redirect.
//!
//! ERROR HANDLING
//! ==============
//! Presence checks run before submission and show per-field messages. Backend
//! rejections show the backend's `error`; transport failures show a generic
//! retry message.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ApiResponse, IssueCategory};
use crate::state::auth::AuthState;
use crate::util::geo;
use crate::util::jurisdictions::{STATES, blocks_of, districts_of};

/// Impact contexts offered on the form: `(wire value, label)`.
pub const CONTEXT_OPTIONS: [(&str, &str); 5] = [
    ("residential", "Residential"),
    ("school", "School Zone"),
    ("hospital", "Hospital/Clinic"),
    ("highway", "Major Road/Highway"),
    ("commercial", "Market/Commercial"),
];

const SUBMIT_FAILED: &str = "Failed to submit report. Please try again.";

/// Editable report fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub state: String,
    pub district: String,
    pub block: String,
    pub location_context: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: IssueCategory::Pothole,
            state: "Odisha".to_owned(),
            district: String::new(),
            block: String::new(),
            location_context: CONTEXT_OPTIONS[0].0.to_owned(),
            latitude: None,
            longitude: None,
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub state: Option<&'static str>,
    pub district: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.district.is_none() && self.description.is_none()
    }
}

pub fn validate_report(form: &ReportDraft) -> FieldErrors {
    FieldErrors {
        state: form.state.is_empty().then_some("State is required."),
        district: form.district.is_empty().then_some("District is required."),
        description: form.description.trim().is_empty().then_some("Description is required."),
    }
}

/// Title used when the reporter leaves it blank, e.g. "Road Hazard in Patia".
pub fn default_title(form: &ReportDraft) -> String {
    let place = if form.block.is_empty() { &form.district } else { &form.block };
    format!("{} in {place}", form.category.official_label())
}

/// Multipart fields in submission order. Coordinates are omitted when unset.
pub fn report_fields(form: &ReportDraft) -> Vec<(&'static str, String)> {
    let title = if form.title.trim().is_empty() { default_title(form) } else { form.title.clone() };
    let mut fields = vec![
        ("title", title),
        ("description", form.description.clone()),
        ("category", form.category.as_str().to_owned()),
        ("state", form.state.clone()),
        ("district", form.district.clone()),
        ("block", form.block.clone()),
        ("location_context", form.location_context.clone()),
    ];
    if let Some(lat) = form.latitude.clone() {
        fields.push(("latitude", lat));
    }
    if let Some(lng) = form.longitude.clone() {
        fields.push(("longitude", lng));
    }
    fields
}

/// What to do after the backend answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(String),
    Error(String),
}

pub fn interpret_submission(response: Result<ApiResponse, String>) -> SubmitOutcome {
    match response {
        Ok(ApiResponse { redirect: Some(redirect), .. }) => SubmitOutcome::Navigate(redirect),
        Ok(ApiResponse { error: Some(error), .. }) => SubmitOutcome::Error(error),
        Ok(_) => SubmitOutcome::Navigate("/profile".to_owned()),
        Err(_) => SubmitOutcome::Error(SUBMIT_FAILED.to_owned()),
    }
}

/// Short reference tag shown in the form header.
pub fn reference_tag(now_ms: i64) -> String {
    format!("REF-{:06X}", now_ms.rem_euclid(0x100_0000))
}

#[cfg(feature = "hydrate")]
async fn send_report(
    fields: Vec<(&'static str, String)>,
    file_input: NodeRef<leptos::html::Input>,
) -> Result<ApiResponse, String> {
    let image = file_input
        .get_untracked()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0));
    crate::net::api::submit_report(&fields, image).await
}

#[cfg(not(feature = "hydrate"))]
async fn send_report(
    fields: Vec<(&'static str, String)>,
    file_input: NodeRef<leptos::html::Input>,
) -> Result<ApiResponse, String> {
    let _ = (fields, file_input);
    Err("not available on server".to_owned())
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || {
            let state = auth.get();
            if state.loading {
                view! { <div class="page-loading"><div class="spinner"></div></div> }.into_any()
            } else if state.user.is_none() {
                view! {
                    <div class="page-gate">
                        <p>"Authentication required to submit reports."</p>
                        <A href="/login">"Login to continue →"</A>
                    </div>
                }
                    .into_any()
            } else {
                view! { <ReportFormPanel/> }.into_any()
            }
        }}
    }
}

#[component]
fn ReportFormPanel() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(ReportDraft::default());
    let field_errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let location_status = RwSignal::new(String::new());
    let image_name = RwSignal::new(None::<String>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let reference = RwSignal::new(String::new());
    Effect::new(move || reference.set(reference_tag(crate::util::time::now_ms())));

    let on_locate = move |_| {
        location_status.set("Detecting...".to_owned());
        leptos::task::spawn_local(async move {
            match geo::current_position().await {
                Ok(fix) => {
                    form.update(|f| {
                        f.latitude = Some(format!("{:.6}", fix.lat));
                        f.longitude = Some(format!("{:.6}", fix.lng));
                    });
                    location_status.set(format!("{:.6}, {:.6}", fix.lat, fix.lng));
                }
                Err(message) => location_status.set(format!("Access denied: {message}")),
            }
        });
    };

    let on_image_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            image_name.set(name);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        let errors = validate_report(&current);
        let valid = errors.is_empty();
        field_errors.set(errors);
        if !valid {
            return;
        }
        busy.set(true);
        error.set(String::new());
        let fields = report_fields(&current);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match interpret_submission(send_report(fields, file_input).await) {
                SubmitOutcome::Navigate(path) => navigate(&path, NavigateOptions::default()),
                SubmitOutcome::Error(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    let category_class = move |category: &IssueCategory| {
        if &form.get().category == category { "choice choice--selected" } else { "choice" }
    };
    let context_class = move |value: &str| {
        if form.get().location_context == value { "choice choice--selected" } else { "choice" }
    };

    view! {
        <div class="report">
            <div class="report__header">
                <span class="report__tag">"New Risk Signal"</span>
                <span class="report__ref">{move || reference.get()}</span>
                <h1>"Report Civic Incident"</h1>
                <p>
                    "Detailed reports help authorities calculate risk and prioritize resources effectively. "
                    "All submissions are verified against the Civic Risk Index."
                </p>
            </div>
            <form class="report__form" on:submit=on_submit>
                <section class="report__section">
                    <h3>"Incident Category"</h3>
                    <div class="report__choices">
                        {IssueCategory::SELECTABLE
                            .into_iter()
                            .map(|category| {
                                let label = category.official_label().to_owned();
                                let for_class = category.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=move || category_class(&for_class)
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            let picked = category.clone();
                                            form.update(|f| f.category = picked);
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="report__section">
                    <h3>"Impact Context"</h3>
                    <p class="report__hint">"Where is this occurring? Helps calculate vulnerability score."</p>
                    <div class="report__choices">
                        {CONTEXT_OPTIONS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || context_class(value)
                                        on:click=move |_| form.update(|f| f.location_context = value.to_owned())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="report__section">
                    <h3>"Location"</h3>
                    <div class="report__grid">
                        <div>
                            <label class="field-label">"State"</label>
                            <select
                                class="field-input"
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.state = event_target_value(&ev);
                                        f.district.clear();
                                        f.block.clear();
                                    });
                                }
                                prop:value=move || form.get().state
                            >
                                <option value="">"Select State"</option>
                                {STATES.iter().map(|&s| view! { <option value=s>{s}</option> }).collect_view()}
                            </select>
                            {move || field_errors.get().state.map(|m| view! { <p class="field-error">{m}</p> })}
                        </div>
                        <div>
                            <label class="field-label">"District"</label>
                            <select
                                class="field-input"
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
                            {move || field_errors.get().district.map(|m| view! { <p class="field-error">{m}</p> })}
                        </div>
                        <div>
                            <label class="field-label">"Block / Ward"</label>
                            <select
                                class="field-input"
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
                        </div>
                    </div>
                    <button type="button" class="report__locate" on:click=on_locate>
                        "Use current location"
                    </button>
                    <Show when=move || !location_status.get().is_empty()>
                        <p class="report__location">{move || location_status.get()}</p>
                    </Show>
                </section>

                <section class="report__section">
                    <h3>"Evidence"</h3>
                    <label class="report__upload">
                        <input type="file" accept="image/*" node_ref=file_input on:change=on_image_change/>
                        {move || match image_name.get() {
                            Some(name) => {
                                view! {
                                    <p class="report__upload-done">"Image Selected"</p>
                                    <p class="report__upload-name">{name}</p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <span class="report__upload-cta">"Click to upload"</span>
                                    <span class="report__upload-hint">"JPG, PNG (Max 5MB)"</span>
                                }
                                    .into_any()
                            }
                        }}
                    </label>
                    <label class="field-label">"Title"</label>
                    <input
                        class="field-input"
                        type="text"
                        placeholder=move || default_title(&form.get())
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <label class="field-label">"Description"</label>
                    <textarea
                        class="field-input"
                        rows="4"
                        placeholder="Describe the issue..."
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                    {move || field_errors.get().description.map(|m| view! { <p class="field-error">{m}</p> })}
                </section>

                <Show when=move || !error.get().is_empty()>
                    <div class="report__error">
                        <p class="report__error-title">"Submission Error:"</p>
                        <p>{move || error.get()}</p>
                    </div>
                </Show>
                <button class="report__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Report" }}
                </button>
            </form>
        </div>
    }
}
