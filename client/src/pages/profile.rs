//! Citizen profile: own reports and lifetime impact.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::Issue;
use crate::state::auth::AuthState;
use crate::util::auth::{Access, Requirement, check_access, install_access_redirect};
use crate::util::issue_metrics::{high_severity_count, resolved_count};
use crate::util::time::format_date;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_access_redirect(auth, Requirement::Citizen, use_navigate());

    let issues = RwSignal::new(Vec::<Issue>::new());
    let loading = RwSignal::new(true);

    // Fetch once, after the guard admits the viewer.
    Effect::new(move |fetched: Option<bool>| {
        if fetched == Some(true) {
            return true;
        }
        if check_access(&auth.get(), Requirement::Citizen) != Access::Granted {
            return false;
        }
        leptos::task::spawn_local(async move {
            match api::fetch_my_issues().await {
                Ok(list) => issues.set(list),
                Err(e) => leptos::logging::warn!("my issues fetch failed: {e}"),
            }
            loading.set(false);
        });
        true
    });

    view! {
        <Show
            when=move || !auth.get().loading && !loading.get()
            fallback=|| view! { <div class="page-loading">"LOADING CONTROL PANEL..."</div> }
        >
            <div class="profile">
                <div class="card card--stat">
                    <h3 class="stat-label">"Reporter Credibility"</h3>
                    <div class="stat-value">"85"<span class="stat-value__unit">"/100"</span></div>
                    <div class="meter"><div class="meter__fill" style="width:85%"></div></div>
                    <p class="stat-note">"Top 10% Contributor"</p>
                    <p class="stat-footnote">"Based on verification accuracy, frequency, and evidence quality."</p>
                </div>
                <div class="card card--action">
                    <span class="card__tag">"Primary Action"</span>
                    <h2>"Log New Issue"</h2>
                    <p>
                        "Report civic hazards directly to the index. Your submission adds pressure to "
                        "the public record and compels authority action."
                    </p>
                    <A href="/report" attr:class="button button--light">"INITIATE REPORT"</A>
                </div>
                <div class="card card--stat">
                    <h3 class="stat-label">"Local CRI Snapshot"</h3>
                    <div class="stat-value stat-value--orange">"73"</div>
                    <span class="pill pill--orange">"Elevated Risk"</span>
                    <p class="stat-footnote">"Pune District: +6 points this week due to monsoon damage reports"</p>
                </div>

                <div class="card card--impact">
                    <h3 class="stat-label">"Lifetime Impact"</h3>
                    <div class="impact-grid">
                        <div class="impact">
                            <span class="impact__label">"Total Reported"</span>
                            <span class="impact__value">{move || issues.with(Vec::len)}</span>
                        </div>
                        <div class="impact impact--green">
                            <span class="impact__label">"Resolved"</span>
                            <span class="impact__value">{move || issues.with(|list| resolved_count(list))}</span>
                        </div>
                        <div class="impact">
                            <span class="impact__label">"Avg Response"</span>
                            <span class="impact__value">"1.2d"</span>
                        </div>
                        <div class="impact impact--red">
                            <span class="impact__label">"Critical"</span>
                            <span class="impact__value">{move || issues.with(|list| high_severity_count(list))}</span>
                        </div>
                    </div>
                </div>

                <div class="card card--ledger">
                    <div class="card__head">
                        <h3 class="stat-label">"Evidence Log"</h3>
                        <span class="card__badge">"IMMUTABLE LEDGER"</span>
                    </div>
                    <Show
                        when=move || issues.with(|list| !list.is_empty())
                        fallback=|| view! { <p class="empty">"No records found in public ledger."</p> }
                    >
                        <ul class="ledger">
                            {move || {
                                issues
                                    .get()
                                    .into_iter()
                                    .map(|issue| view! { <ProfileIssueRow issue=issue/> })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>

                <div class="card card--map-cta">
                    <h2>"LIVE CIVIC RISK MAP"</h2>
                    <p>"Real-time geospatial visualization of unresolved issues weighted by severity and duration."</p>
                    <A href="/map" attr:class="button">"EXPLORE DATA"</A>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ProfileIssueRow(issue: Issue) -> impl IntoView {
    let date = issue.created_at.as_deref().map(format_date).unwrap_or_default();
    let thumbnail = issue.image_path.as_deref().map(|path| {
        view! { <img class="ledger__thumb" src=api::upload_url(path) alt="Evidence"/> }
    });
    let href = format!("/issue/{}", issue.id);

    view! {
        <li class="ledger__row">
            {thumbnail}
            <span class="ledger__date">{date}</span>
            <span class="ledger__place">{issue.place().to_owned()}</span>
            <A href=href attr:class="ledger__title">{issue.title.clone()}</A>
            <StatusBadge status=issue.status/>
        </li>
    }
}
