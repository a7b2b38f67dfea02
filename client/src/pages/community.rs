//! Public issue ledger, ordered by how long issues have gone unresolved.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::{Issue, IssueStatus};
use crate::util::issue_metrics::{is_escalating, pending_count, risk_impact, sort_feed, total_unresolved_hours};
use crate::util::time::{format_date, format_unresolved, hours_since, now_ms};

/// Color class for the unresolved-time figure.
pub fn age_class(hours: i64, status: IssueStatus) -> &'static str {
    if status.is_resolved() {
        "age age--resolved"
    } else if hours > 48 {
        "age age--critical"
    } else if hours > 24 {
        "age age--warning"
    } else {
        "age"
    }
}

/// Unresolved time as shown in the ledger; resolved issues show a dash.
pub fn unresolved_label(hours: i64, status: IssueStatus) -> String {
    if status.is_resolved() { "\u{2014}".to_owned() } else { format_unresolved(hours) }
}

/// `"block, district"` with missing parts left out.
pub fn location_line(issue: &Issue) -> String {
    [issue.block.as_deref(), issue.district.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let issues = RwSignal::new(Vec::<Issue>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<Issue>);

    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            match api::fetch_community_feed().await {
                Ok(mut list) => {
                    sort_feed(&mut list, now_ms());
                    issues.set(list);
                }
                Err(e) => leptos::logging::warn!("community feed fetch failed: {e}"),
            }
            loading.set(false);
        });
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
            <div class="ledger-page">
                <h1>"Civic Issue Ledger"</h1>
                <p>"All unresolved issues are listed below. Sorted by time unresolved."</p>
                <p class="mono muted">"This feed is publicly accessible."</p>

                <div class="stats-bar">
                    <span>"Total Issues: " <b class="mono">{move || issues.with(Vec::len)}</b></span>
                    <span>"Pending: " <b class="mono">{move || issues.with(|list| pending_count(list))}</b></span>
                    <span>
                        "Total Unresolved Time: "
                        <b class="mono">
                            {move || format_unresolved(issues.with(|list| total_unresolved_hours(list, now_ms())))}
                        </b>
                    </span>
                </div>

                <Show
                    when=move || issues.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"No issues recorded."</p> }
                >
                    <ul class="feed">
                        {move || {
                            let now = now_ms();
                            issues
                                .get()
                                .into_iter()
                                .map(|issue| view! { <FeedRow issue=issue now=now selected=selected/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>

                <p class="mono muted">"Visible to authorities and public \u{2022} Data publicly auditable"</p>

                {move || selected.get().map(|issue| view! { <RecordModal issue=issue selected=selected/> })}
            </div>
        </Show>
    }
}

#[component]
fn FeedRow(issue: Issue, now: i64, selected: RwSignal<Option<Issue>>) -> impl IntoView {
    let hours = hours_since(issue.created_at.as_deref(), now);
    let status = issue.status;
    let impact = risk_impact(hours, status);
    let escalating = is_escalating(hours, status);
    let row_class = if escalating { "feed__row feed__row--escalating" } else { "feed__row" };
    let title = issue.title.clone();
    let location = location_line(&issue);
    let reported = issue.created_at.as_deref().map_or_else(|| "\u{2014}".to_owned(), format_date);

    view! {
        <li class=row_class on:click=move |_| selected.set(Some(issue.clone()))>
            <div class="feed__time">
                <p class=age_class(hours, status)>{unresolved_label(hours, status)}</p>
                <p class="mono muted">{if status.is_resolved() { "resolved" } else { "unresolved" }}</p>
            </div>
            <div class="feed__body">
                <p class="feed__title">{title}</p>
                <p class="muted">{location}</p>
                <div class="feed__tags">
                    <StatusBadge status=status/>
                    {(impact > 0).then(|| view! { <span class="tag tag--risk">{format!("+{impact} CRI")}</span> })}
                    {escalating.then(|| view! { <span class="tag tag--escalating">"Escalating"</span> })}
                    <span class="tag">"Visibility: Public"</span>
                </div>
            </div>
            <p class="feed__date">{reported}</p>
        </li>
    }
}

#[component]
fn RecordModal(issue: Issue, selected: RwSignal<Option<Issue>>) -> impl IntoView {
    let hours = hours_since(issue.created_at.as_deref(), now_ms());
    let unresolved = if issue.status.is_resolved() { "Resolved".to_owned() } else { format_unresolved(hours) };
    let photo = issue
        .image_path
        .as_deref()
        .map(|path| view! { <img class="modal__evidence" src=api::upload_url(path) alt="Issue documentation"/> });
    let reported = issue.created_at.as_deref().map_or_else(|| "\u{2014}".to_owned(), format_date);

    view! {
        <div class="modal-backdrop" on:click=move |_| selected.set(None)>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__head">
                    <div>
                        <p class="mono muted">{format!("Public Record #{}", issue.id)}</p>
                        <h2>{issue.title.clone()}</h2>
                    </div>
                    <button class="modal__close" on:click=move |_| selected.set(None)>"Close"</button>
                </div>
                {photo}
                <p>{issue.description.clone()}</p>
                <dl class="modal__facts">
                    <dt>"Location"</dt>
                    <dd>{location_line(&issue)}</dd>
                    <dt>"Category"</dt>
                    <dd>{issue.category.to_string()}</dd>
                    <dt>"Status"</dt>
                    <dd><StatusBadge status=issue.status/></dd>
                    <dt>"Time unresolved"</dt>
                    <dd class="mono">{unresolved}</dd>
                    <dt>"Visibility"</dt>
                    <dd>"Public"</dd>
                    <dt>"Reported"</dt>
                    <dd>{reported}</dd>
                </dl>
                <p class="mono muted">"This record is publicly indexed in the Civic Risk system."</p>
            </div>
        </div>
    }
}
