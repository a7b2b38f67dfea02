//! Authority command view: live case queue, zone CRI and case actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The queue is the authority's jurisdiction as scoped by the backend.
//! It is fetched once the guard admits the viewer and then every five
//! seconds. Status changes are posted one at a time; a confirmed change is
//! patched into the local list without waiting for the next poll.

#[cfg(test)]
#[path = "authority_dashboard_test.rs"]
mod authority_dashboard_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::risk_map::{RiskMap, Viewport};
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::{CriBand, CriPoint, Issue, IssueStatus};
use crate::state::auth::AuthState;
use crate::util::auth::{Access, Requirement, check_access, install_access_redirect};
use crate::util::issue_metrics::{
    CRITICAL_SEVERITY, critical_open_count, issue_age, pending_count, soonest_escalation, unresolved_count, zone_cri,
};
use crate::util::poll::poll_every;
use crate::util::time::{format_date, now_ms};

pub const DEPARTMENTS: [&str; 5] = ["Road Maintenance", "Sanitation Dept", "Electrical Division", "Water Supply", "Civil Works"];

const QUEUE_POLL: Duration = Duration::from_secs(5);
const HIGHLIGHT_SEVERITY: f64 = 75.0;
const TACTICAL_CENTER: (f64, f64) = (20.2961, 85.8245);
const TACTICAL_ZOOM: u8 = 13;

/// An action taken on a case from the detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseAction {
    Assign(String),
    StartWork,
    Resolve { note: String },
}

/// Status a case moves to for `action`.
///
/// # Errors
///
/// Resolving without a note is refused.
pub fn target_status(action: &CaseAction) -> Result<IssueStatus, &'static str> {
    match action {
        CaseAction::Assign(_) | CaseAction::StartWork => Ok(IssueStatus::InProgress),
        CaseAction::Resolve { note } if note.trim().is_empty() => Err("Resolution note is required."),
        CaseAction::Resolve { .. } => Ok(IssueStatus::Resolved),
    }
}

/// Set the status of issue `id` in place. Returns whether it was found.
pub fn apply_status(issues: &mut [Issue], id: i64, status: IssueStatus) -> bool {
    match issues.iter_mut().find(|i| i.id == id) {
        Some(issue) => {
            issue.status = status;
            true
        }
        None => false,
    }
}

/// Zone condition label; above the critical threshold the zone is critical.
pub fn zone_condition(cri: u32) -> (&'static str, bool) {
    if f64::from(cri) > CRITICAL_SEVERITY { ("Critical Condition", true) } else { ("Stable Condition", false) }
}

/// Element id of the live queue list.
const QUEUE_ID: &str = "queue";

/// In-page link to the live queue.
pub fn queue_link() -> String {
    format!("#{QUEUE_ID}")
}

/// Patch a confirmed status change into the queue and close its modal.
/// A page torn down mid-request leaves both signals untouched.
pub fn settle_case(issues: RwSignal<Vec<Issue>>, selected: RwSignal<Option<Issue>>, issue_id: i64, status: IssueStatus) {
    issues.update(|list| {
        apply_status(list, issue_id, status);
    });
    let showing = selected
        .try_with_untracked(|open| open.as_ref().is_some_and(|s| s.id == issue_id))
        .unwrap_or(false);
    if showing {
        selected.set(None);
    }
}

/// Map markers for located issues. Issues without coordinates are left off.
pub fn case_markers(issues: &[Issue]) -> Vec<CriPoint> {
    issues
        .iter()
        .filter_map(|issue| {
            let (lat, lng) = (issue.latitude?, issue.longitude?);
            Some(CriPoint {
                block: issue.title.clone(),
                cri: issue.severity_score,
                color: CriBand::from_score(issue.severity_score),
                lat,
                lng,
                issue_count: None,
            })
        })
        .collect()
}

#[component]
pub fn AuthorityDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_access_redirect(auth, Requirement::Authority, use_navigate());

    let issues = RwSignal::new(Vec::<Issue>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<Issue>);

    let refresh = move || async move {
        match api::fetch_authority_issues().await {
            Ok(list) => issues.set(list),
            Err(e) => leptos::logging::warn!("authority queue fetch failed: {e}"),
        }
        loading.set(false);
    };

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if check_access(&auth.get(), Requirement::Authority) != Access::Granted {
            return false;
        }
        leptos::task::spawn_local(refresh());
        true
    });
    // The loop only fetches once the viewer has been admitted.
    poll_every(QUEUE_POLL, move || async move {
        if check_access(&auth.get_untracked(), Requirement::Authority) == Access::Granted {
            refresh().await;
        }
    });

    let act = move |issue_id: i64, action: CaseAction| {
        let status = match target_status(&action) {
            Ok(status) => status,
            Err(message) => {
                leptos::logging::warn!("{message}");
                return;
            }
        };
        if let CaseAction::Assign(dept) = &action {
            leptos::logging::log!("assigning case {issue_id} to {dept}");
        }
        leptos::task::spawn_local(async move {
            match api::update_status(issue_id, status).await {
                Ok(resp) if resp.succeeded() => settle_case(issues, selected, issue_id, status),
                Ok(resp) => leptos::logging::warn!("status update refused: {:?}", resp.error),
                Err(e) => leptos::logging::warn!("status update failed: {e}"),
            }
        });
    };

    let cri = Memo::new(move |_| issues.with(|list| zone_cri(list)));
    let markers = Signal::derive(move || issues.with(|list| case_markers(list)));
    let tactical = Signal::derive(|| Viewport::new(TACTICAL_CENTER.0, TACTICAL_CENTER.1, TACTICAL_ZOOM));

    view! {
        <Show
            when=move || !auth.get().loading && !loading.get()
            fallback=|| view! { <div class="page-loading">"LOADING AUTHORITY CONSOLE..."</div> }
        >
            <div class="authority">
                <header class="page-header">
                    <div>
                        <h1>"Authority Overview"</h1>
                        <p>"Real-time civic risk monitoring and response command center."</p>
                    </div>
                    <span class="pill pill--green">"System Operational"</span>
                </header>

                <div class="bento">
                    <div class="card card--cri">
                        <h3 class="stat-label">"CRI"</h3>
                        <div class="stat-value">{move || cri.get()}<span class="stat-value__unit">"/100"</span></div>
                        {move || {
                            let (label, critical) = zone_condition(cri.get());
                            let class = if critical { "condition condition--critical" } else { "condition condition--stable" };
                            view! { <span class=class>{label}</span> }
                        }}
                        <div class="meter">
                            <div
                                class=move || if zone_condition(cri.get()).1 { "meter__fill meter__fill--red" } else { "meter__fill meter__fill--green" }
                                style=move || format!("width:{}%", cri.get())
                            ></div>
                        </div>
                        {move || {
                            issues
                                .with(|list| soonest_escalation(list, now_ms()))
                                .map(|(esc, count)| {
                                    view! {
                                        <div class="escalation-summary">
                                            <span>{format!("{count} escalating")}</span>
                                            <span class="mono">{esc.label()}</span>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="card card--queue">
                        <div class="card__head">
                            <h3 class="stat-label">"LIVE QUEUE"</h3>
                            <span class="pill pill--red">
                                {move || format!("{} PENDING", issues.with(|list| unresolved_count(list)))}
                            </span>
                            <span class="card__hint">"High Priority First"</span>
                        </div>
                        <Show
                            when=move || issues.with(|list| !list.is_empty())
                            fallback=|| view! { <div class="empty">"All Clear. No active cases."</div> }
                        >
                            <ul class="queue" id=QUEUE_ID>
                                {move || {
                                    let now = now_ms();
                                    issues
                                        .get()
                                        .into_iter()
                                        .filter(|issue| !issue.status.is_resolved())
                                        .map(|issue| view! { <QueueRow issue=issue now=now selected=selected/> })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </div>

                    <div class="card card--attention">
                        <h3 class="stat-label">"ATTENTION REQUIRED"</h3>
                        <div class="attention attention--critical">
                            <span class="attention__value">{move || issues.with(|list| critical_open_count(list))}</span>
                            <span class="attention__label">"Critical"</span>
                        </div>
                        <div class="attention">
                            <span class="attention__value">{move || issues.with(|list| pending_count(list))}</span>
                            <span class="attention__label">"Pending"</span>
                        </div>
                    </div>

                    <div class="card card--tactical">
                        <RiskMap points=markers viewport=tactical/>
                        <span class="map-tag">"Tactical View"</span>
                    </div>

                    <div class="card card--actions">
                        <h3 class="stat-label">"SYSTEM ACTIONS"</h3>
                        <a class="button button--dark" href=queue_link()>"View Full Case List"</a>
                        <button
                            class="button"
                            on:click=move |_| leptos::logging::log!("risk report queued for municipal commissioner")
                        >
                            "Generate Risk Report"
                        </button>
                        <h4 class="metrics-head">"PERFORMANCE METRICS" <span>"LAST 24H"</span></h4>
                        <div class="metric">
                            <span>"Avg Response Time"</span>
                            <span class="mono">"4.2h (+0.8)"</span>
                        </div>
                        <p class="insight">
                            "Insight: Delay increased due to 3 unresolved high-risk cases in Ward 19."
                        </p>
                    </div>
                </div>

                {move || selected.get().map(|issue| view! { <CaseModal issue=issue selected=selected act=act/> })}
            </div>
        </Show>
    }
}

#[component]
fn QueueRow(issue: Issue, now: i64, selected: RwSignal<Option<Issue>>) -> impl IntoView {
    let age = issue_age(issue.created_at.as_deref(), now);
    let row_class = if issue.severity_score > HIGHLIGHT_SEVERITY { "queue__row queue__row--critical" } else { "queue__row" };
    let escalation = age.urgent.then(|| {
        view! { <div class="queue__escalation">"NEXT ESCALATION: " {age.escalation.label()}</div> }
    });
    let title = issue.title.clone();
    let category = issue.category.to_string();
    let severity = issue.severity_score;
    let status = issue.status;

    view! {
        <li class=row_class on:click=move |_| selected.set(Some(issue.clone()))>
            <div class="queue__top">
                <h4>{title}</h4>
                <span class="queue__severity">{severity}</span>
            </div>
            <div class="queue__meta">
                <span class="tag">{category}</span>
                <span class=age.tone.class()>{age.text}</span>
            </div>
            <div class="queue__actions">
                <StatusBadge status=status/>
                <span class="queue__details">"Details"</span>
            </div>
            {escalation}
        </li>
    }
}

#[component]
fn CaseModal<F>(issue: Issue, selected: RwSignal<Option<Issue>>, act: F) -> impl IntoView
where
    F: Fn(i64, CaseAction) + Copy + Send + Sync + 'static,
{
    let note = RwSignal::new(String::new());
    let resolving = RwSignal::new(false);
    let id = issue.id;
    let pending = issue.status == IssueStatus::Pending;

    let evidence = match issue.image_path.as_deref() {
        Some(path) => view! { <img class="modal__evidence" src=api::upload_url(path) alt="Evidence"/> }.into_any(),
        None => view! { <div class="modal__no-evidence">"No Visual Evidence"</div> }.into_any(),
    };
    let reported = issue.created_at.as_deref().map_or_else(|| "N/A".to_owned(), format_date);
    let severity = if issue.severity_score > 0.0 { issue.severity_score.to_string() } else { "N/A".to_owned() };

    view! {
        <div class="modal-backdrop" on:click=move |_| selected.set(None)>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__head">
                    <div>
                        <span class="mono">{format!("INCIDENT ID: {id}")}</span>
                        <h2>{issue.title.clone()}</h2>
                    </div>
                    <StatusBadge status=issue.status/>
                    <button class="modal__close" on:click=move |_| selected.set(None)>"Close"</button>
                </div>
                <div class="modal__body">
                    {evidence}
                    <dl class="modal__facts">
                        <dt>"Location"</dt>
                        <dd>{issue.block.clone().unwrap_or_default()} " " {issue.district.clone().unwrap_or_default()}</dd>
                        <dt>"Severity"</dt>
                        <dd>{severity} " CRI"</dd>
                        <dt>"Category"</dt>
                        <dd>{issue.category.to_string()}</dd>
                        <dt>"Reported"</dt>
                        <dd>{reported}</dd>
                    </dl>
                    <h4>"Detailed Report"</h4>
                    <p>{issue.description.clone()}</p>
                </div>
                <div class="modal__actions">
                    <Show
                        when=move || resolving.get()
                        fallback=move || {
                            view! {
                                <label class="modal__assign">
                                    "Assign To:"
                                    <select on:change=move |ev| {
                                        let dept = event_target_value(&ev);
                                        if !dept.is_empty() {
                                            act(id, CaseAction::Assign(dept));
                                        }
                                    }>
                                        <option value="" disabled=true selected=true>"Select Department..."</option>
                                        {DEPARTMENTS.iter().map(|&d| view! { <option value=d>{d}</option> }).collect_view()}
                                    </select>
                                </label>
                                {pending.then(|| view! {
                                    <button class="button" on:click=move |_| act(id, CaseAction::StartWork)>
                                        "Start Work"
                                    </button>
                                })}
                                <button class="button button--green" on:click=move |_| resolving.set(true)>
                                    "Mark Resolved"
                                </button>
                            }
                        }
                    >
                        <label>
                            "Resolution Evidence & Notes (Required)"
                            <textarea
                                placeholder="Describe action taken, resources used, and outcome..."
                                prop:value=move || note.get()
                                on:input=move |ev| note.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button class="button button--ghost" on:click=move |_| resolving.set(false)>"Cancel"</button>
                        <button
                            class="button button--green"
                            disabled=move || note.with(|n| n.trim().is_empty())
                            on:click=move |_| act(id, CaseAction::Resolve { note: note.get_untracked() })
                        >
                            "Confirm Resolution"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
