//! Derived numbers shown on the issue dashboards and feed.
//!
//! Everything here is display arithmetic over issues the backend already
//! scored; nothing feeds back into the backend. The escalation curve mirrors
//! the backend's time-decay term (`2 * ln(hours + 1)`) so the countdown hint
//! matches what the next recalculation will add.

#[cfg(test)]
#[path = "issue_metrics_test.rs"]
mod issue_metrics_test;

use crate::net::types::{Issue, IssueStatus};
use crate::util::time::{hours_since, minutes_since};

/// Severity above which an issue counts as critical.
pub const CRITICAL_SEVERITY: f64 = 70.0;
/// Upper bound of every CRI figure.
pub const CRI_MAX: f64 = 100.0;

pub fn pending_count(issues: &[Issue]) -> usize {
    issues.iter().filter(|i| i.status == IssueStatus::Pending).count()
}

pub fn resolved_count(issues: &[Issue]) -> usize {
    issues.iter().filter(|i| i.status.is_resolved()).count()
}

pub fn unresolved_count(issues: &[Issue]) -> usize {
    issues.len() - resolved_count(issues)
}

/// Unresolved issues above the critical severity.
pub fn critical_open_count(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|i| !i.status.is_resolved() && i.severity_score > CRITICAL_SEVERITY)
        .count()
}

/// Issues above the critical severity regardless of status.
pub fn high_severity_count(issues: &[Issue]) -> usize {
    issues.iter().filter(|i| i.severity_score > CRITICAL_SEVERITY).count()
}

/// Zone CRI: the rounded sum of unresolved severities, capped at 100.
///
/// Resolving any scored issue drops it immediately.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn zone_cri(issues: &[Issue]) -> u32 {
    let total: f64 = issues
        .iter()
        .filter(|i| !i.status.is_resolved())
        .map(|i| i.severity_score)
        .sum();
    total.round().clamp(0.0, CRI_MAX) as u32
}

/// Visual urgency bucket of an issue's age.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeTone {
    /// Under an hour.
    Fresh,
    /// Under a day.
    Aging,
    /// Exactly one day.
    Overdue,
    /// Two days or more.
    Stale,
}

impl AgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Fresh => "age age--fresh",
            Self::Aging => "age age--aging",
            Self::Overdue => "age age--overdue",
            Self::Stale => "age age--stale",
        }
    }
}

/// Points the next hourly recalculation adds, and minutes until it does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Escalation {
    pub points: f64,
    pub minutes: i64,
    pub decimals: usize,
}

impl Escalation {
    pub fn label(&self) -> String {
        format!("+{:.*} pts in {}m", self.decimals, self.points, self.minutes)
    }
}

/// Age label, tone and escalation hint for one issue.
#[derive(Clone, Debug, PartialEq)]
pub struct IssueAge {
    pub text: String,
    pub tone: AgeTone,
    pub urgent: bool,
    pub escalation: Escalation,
}

#[allow(clippy::cast_precision_loss)]
fn escalation_step(hours: i64) -> f64 {
    let h = hours as f64;
    (h + 2.0).ln() * 2.0 - (h + 1.0).ln() * 2.0
}

/// Describe how long an issue has been open.
///
/// Issues become urgent after six hours.
pub fn issue_age(created: Option<&str>, now_ms: i64) -> IssueAge {
    let minutes = minutes_since(created, now_ms);
    let hours = minutes / 60;
    let days = hours / 24;
    let escalation = Escalation {
        points: escalation_step(hours),
        minutes: 60 - minutes % 60,
        decimals: if days > 1 { 2 } else { 1 },
    };

    let (text, tone, urgent) = if hours < 1 {
        ("Just now".to_owned(), AgeTone::Fresh, false)
    } else if hours < 24 {
        (format!("{hours}h ago"), AgeTone::Aging, hours > 6)
    } else if days == 1 {
        ("1 day ago".to_owned(), AgeTone::Overdue, true)
    } else {
        (format!("{days}d ago"), AgeTone::Stale, true)
    };

    IssueAge { text, tone, urgent, escalation }
}

/// The nearest upcoming escalation among urgent unresolved issues, with the
/// number of urgent issues.
pub fn soonest_escalation(issues: &[Issue], now_ms: i64) -> Option<(Escalation, usize)> {
    let urgent: Vec<Escalation> = issues
        .iter()
        .filter(|i| !i.status.is_resolved())
        .map(|i| issue_age(i.created_at.as_deref(), now_ms))
        .filter(|age| age.urgent)
        .map(|age| age.escalation)
        .collect();
    let count = urgent.len();
    urgent
        .into_iter()
        .reduce(|best, next| if next.minutes < best.minutes { next } else { best })
        .map(|esc| (esc, count))
}

/// Risk units an open issue has accrued: one per six hours, at most twenty.
pub fn risk_impact(hours: i64, status: IssueStatus) -> i64 {
    if status.is_resolved() { 0 } else { (hours / 6).clamp(0, 20) }
}

/// A pending issue older than two days is flagged as escalating.
pub fn is_escalating(hours: i64, status: IssueStatus) -> bool {
    hours > 48 && status == IssueStatus::Pending
}

/// Order the feed: unresolved first, then oldest (most pressure) first.
pub fn sort_feed(issues: &mut [Issue], now_ms: i64) {
    issues.sort_by(|a, b| {
        a.status
            .is_resolved()
            .cmp(&b.status.is_resolved())
            .then_with(|| {
                hours_since(b.created_at.as_deref(), now_ms).cmp(&hours_since(a.created_at.as_deref(), now_ms))
            })
    });
}

/// Sum of open hours across unresolved issues.
pub fn total_unresolved_hours(issues: &[Issue], now_ms: i64) -> i64 {
    issues
        .iter()
        .filter(|i| !i.status.is_resolved())
        .map(|i| hours_since(i.created_at.as_deref(), now_ms))
        .sum()
}
