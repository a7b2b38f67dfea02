//! Colored chip for an issue's status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::IssueStatus;

/// Tone modifier per status: amber pending, blue in progress, green resolved.
pub fn badge_tone(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Pending => "amber",
        IssueStatus::InProgress => "blue",
        IssueStatus::Resolved => "green",
    }
}

pub fn badge_class(status: IssueStatus) -> String {
    format!("status-badge status-badge--{}", badge_tone(status))
}

#[component]
pub fn StatusBadge(status: IssueStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.as_str()}</span> }
}
