//! Public record page for a single issue.
//!
//! Records are a fixed demonstration set keyed by id, aged relative to the
//! moment the page renders.

#[cfg(test)]
#[path = "issue_detail_test.rs"]
mod issue_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::status_badge::StatusBadge;
use crate::net::types::IssueStatus;
use crate::util::issue_metrics::risk_impact;
use crate::util::time::{MS_PER_HOUR, format_date_ms, now_ms};

/// Unresolved time after which an open record is flagged overdue.
const OVERDUE_HOURS: i64 = 48;

/// A demonstration record. Ages are hours before "now".
#[derive(Clone, Debug, PartialEq)]
pub struct PublicRecord {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub status: IssueStatus,
    pub block: &'static str,
    pub district: &'static str,
    pub state: &'static str,
    pub reported_hours_ago: i64,
    pub acknowledged_hours_ago: Option<i64>,
    pub resolved_hours_ago: Option<i64>,
    pub severity: f64,
}

pub fn find_record(id: &str) -> Option<PublicRecord> {
    match id {
        "1" => Some(PublicRecord {
            id: 1,
            title: "Large pothole causing traffic hazard",
            description: "A significant pothole has formed at the main junction near sector 12. Multiple \
                          vehicles have been damaged. The pothole is approximately 2 feet wide and 6 inches \
                          deep, posing a serious risk to two-wheelers and pedestrians.",
            category: "Road damage (pothole)",
            status: IssueStatus::InProgress,
            block: "Rohini",
            district: "North West",
            state: "Delhi",
            reported_hours_ago: 72,
            acknowledged_hours_ago: Some(48),
            resolved_hours_ago: None,
            severity: 78.0,
        }),
        "2" => Some(PublicRecord {
            id: 2,
            title: "Street light non-functional for 2 weeks",
            description: "The street light near the community park entrance has been non-functional. This \
                          creates a safety hazard for evening walkers and residents.",
            category: "Lighting infrastructure failure",
            status: IssueStatus::Pending,
            block: "Pitampura",
            district: "North West",
            state: "Delhi",
            reported_hours_ago: 336,
            acknowledged_hours_ago: None,
            resolved_hours_ago: None,
            severity: 45.0,
        }),
        _ => None,
    }
}

/// One step of the record timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStep {
    pub label: &'static str,
    pub at_ms: Option<i64>,
}

impl TimelineStep {
    pub fn complete(&self) -> bool {
        self.at_ms.is_some()
    }

    pub fn caption(&self) -> String {
        self.at_ms.map_or_else(|| "Awaiting action".to_owned(), format_date_ms)
    }
}

pub fn timeline(record: &PublicRecord, now_ms: i64) -> [TimelineStep; 3] {
    let at = |hours: i64| now_ms - hours * MS_PER_HOUR;
    [
        TimelineStep { label: "Reported", at_ms: Some(at(record.reported_hours_ago)) },
        TimelineStep { label: "Acknowledged", at_ms: record.acknowledged_hours_ago.map(at) },
        TimelineStep { label: "Resolved", at_ms: record.resolved_hours_ago.map(at) },
    ]
}

pub fn severity_class(score: f64) -> &'static str {
    if score >= 80.0 {
        "tone--red"
    } else if score >= 50.0 {
        "tone--orange"
    } else {
        "tone--green"
    }
}

pub fn is_overdue(record: &PublicRecord) -> bool {
    record.reported_hours_ago >= OVERDUE_HOURS && !record.status.is_resolved()
}

#[component]
pub fn IssueDetailPage() -> impl IntoView {
    let params = use_params_map();
    let record = Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| find_record(&id))));

    move || match record.get() {
        Some(record) => view! { <RecordView record=record/> }.into_any(),
        None => view! {
            <div class="not-found">
                <p>"Issue not found."</p>
                <A href="/community">"\u{2190} Back to Public Feed"</A>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn RecordView(record: PublicRecord) -> impl IntoView {
    let now = now_ms();
    let hours = record.reported_hours_ago;
    let accrued = risk_impact(hours, record.status);
    let steps = timeline(&record, now);
    let last = steps.len() - 1;
    let overdue = is_overdue(&record);
    let hours_class = if hours >= OVERDUE_HOURS { "big-number mono tone--red" } else { "big-number mono" };

    let steps_view = steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let marker = if step.complete() { "timeline__dot timeline__dot--done" } else { "timeline__dot" };
            let line = (index < last).then(|| {
                let class = if step.complete() { "timeline__line timeline__line--done" } else { "timeline__line" };
                view! { <div class=class></div> }
            });
            let ago = (step.label == "Reported").then(|| view! { <p class="mono muted">{format!("{hours}h ago")}</p> });
            view! {
                <li class="timeline__step">
                    <div class="timeline__rail">
                        <div class=marker></div>
                        {line}
                    </div>
                    <div>
                        <p class="timeline__label">{step.label}</p>
                        <p class="muted">{step.caption()}</p>
                        {ago}
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="record">
            <div class="record__head">
                <A href="/community" attr:class="back-link">"\u{2190} Back to Public Feed"</A>
                <p class="mono muted">{format!("Public Record #{}", record.id)}</p>
                <h1>{record.title}</h1>
                <p class="muted">{format!("{}, {}", record.block, record.district)} " \u{00B7} " {record.category}</p>
                <StatusBadge status=record.status/>
            </div>

            <div class="record__grid">
                <div class="record__main">
                    <section class="card">
                        <p class="section-label">"Description"</p>
                        <p>{record.description}</p>
                    </section>
                    <section class="card">
                        <p class="section-label">"Issue Timeline"</p>
                        <ol class="timeline">{steps_view}</ol>
                    </section>
                </div>

                <aside class="record__side">
                    <section class="card">
                        <p class="section-label">"Risk Impact"</p>
                        <p class="muted">"Severity Score"</p>
                        <span class=format!("big-number mono {}", severity_class(record.severity))>{record.severity}</span>
                        <p class="muted">"Risk Units Accrued"</p>
                        <span class="big-number mono">{format!("+{accrued}")}</span>
                        <p class="muted">"Time Unresolved"</p>
                        <span class=hours_class>{format!("{hours}h")}</span>
                    </section>
                    <section class="card">
                        <p class="section-label">"Visibility Status"</p>
                        <span class="pill pill--green">"Publicly Visible"</span>
                        <p class="muted">
                            "This issue is indexed in the public Civic Risk system and contributes to the local CRI."
                        </p>
                    </section>
                    <section class="card">
                        <p class="section-label">"Location"</p>
                        <dl class="modal__facts">
                            <dt>"Block"</dt>
                            <dd>{record.block}</dd>
                            <dt>"District"</dt>
                            <dd>{record.district}</dd>
                            <dt>"State"</dt>
                            <dd>{record.state}</dd>
                        </dl>
                    </section>
                    {overdue.then(|| view! {
                        <section class="card card--alert">
                            <p class="section-label">"Overdue"</p>
                            <p>
                                "This issue has been unresolved for over 48 hours. "
                                "It is now subject to public escalation protocols."
                            </p>
                        </section>
                    })}
                </aside>
            </div>

            <p class="mono muted">"This record is publicly indexed \u{2022} Civic Risk Index contribution active"</p>
        </div>
    }
}
