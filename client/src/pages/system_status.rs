//! Public system status board with a simulated uptime clock.

#[cfg(test)]
#[path = "system_status_test.rs"]
mod system_status_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::util::poll::poll_every;
use crate::util::time::{format_uptime, now_ms};

/// Simulated uptime at page load: 14d 7h 23m.
pub const UPTIME_AT_LOAD_SECS: u64 = 14 * 86_400 + 7 * 3_600 + 23 * 60;
const FIRST_CALC_MINUTES: u32 = 12;

pub const COMPONENTS: [(&str, &str); 6] = [
    ("CRI Calculation Engine", "23ms"),
    ("Report Ingestion API", "45ms"),
    ("Authority Notification Service", "112ms"),
    ("Public Data API", "31ms"),
    ("Geolocation Service", "67ms"),
    ("Database Cluster", "8ms"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Calc,
    Alert,
    Maintenance,
    Deployment,
    Notification,
}

pub const EVENTS: [(&str, &str, EventKind); 5] = [
    ("2m ago", "CRI recalculation completed (all jurisdictions)", EventKind::Calc),
    ("12m ago", "Threshold alert: Rohini crossed CRI 90", EventKind::Alert),
    ("1h ago", "Scheduled database backup completed", EventKind::Maintenance),
    ("2h ago", "CRI methodology v2.3 deployed", EventKind::Deployment),
    ("6h ago", "Authority notification batch sent (47 recipients)", EventKind::Notification),
];

const DATA_SOURCES: [&str; 4] = [
    "Citizen reports via Fixity mobile and web applications",
    "Authority response data from authenticated dashboard actions",
    "Geographic data from verified location services",
    "Municipal open data APIs (integration pending)",
];

/// Uptime in seconds for a clock that started `UPTIME_AT_LOAD_SECS` before
/// `loaded_ms`.
#[allow(clippy::cast_sign_loss)]
pub fn uptime_secs(loaded_ms: i64, now_ms: i64) -> u64 {
    UPTIME_AT_LOAD_SECS + ((now_ms - loaded_ms).max(0) / 1000) as u64
}

/// Minutes since the last CRI calculation, wrapping after 59.
pub fn next_calc_minutes(previous: u32) -> u32 {
    if previous >= 59 { 0 } else { previous + 1 }
}

#[component]
pub fn SystemStatusPage() -> impl IntoView {
    let loaded = now_ms();
    let now = RwSignal::new(loaded);
    let last_calc = RwSignal::new(FIRST_CALC_MINUTES);
    poll_every(Duration::from_secs(1), move || async move {
        now.set(now_ms());
        last_calc.update(|m| *m = next_calc_minutes(*m));
    });

    view! {
        <article class="doc">
            <header class="doc__head">
                <p class="status-live">"All Systems Operational"</p>
                <h1>"System Status"</h1>
                <p>"Real-time status of Fixity infrastructure and CRI calculation systems."</p>
            </header>

            <div class="summary-row">
                <div class="summary">
                    <p class="section-label">"Uptime"</p>
                    <span class="big-number mono">{move || format_uptime(uptime_secs(loaded, now.get()))}</span>
                    <span class="muted">"99.98% this month"</span>
                </div>
                <div class="summary">
                    <p class="section-label">"Last CRI Calc"</p>
                    <span class="big-number mono">{move || format!("{}m ago", last_calc.get())}</span>
                    <span class="muted">{move || format!("Next in {}m", 60 - last_calc.get())}</span>
                </div>
                <div class="summary">
                    <p class="section-label">"Active Jurisdictions"</p>
                    <span class="big-number mono">"1,247"</span>
                    <span class="muted">"Being monitored"</span>
                </div>
                <div class="summary">
                    <p class="section-label">"Audit Mode"</p>
                    <span class="big-number mono">"PUBLIC"</span>
                    <span class="muted">"All data verifiable"</span>
                </div>
            </div>

            <section class="status-list">
                <p class="section-label">"Component Status"</p>
                {COMPONENTS
                    .iter()
                    .map(|&(name, latency)| view! {
                        <div class="status-list__row">
                            <span>{name}</span>
                            <span class="mono muted">{latency}</span>
                            <span class="pill pill--green">"Operational"</span>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="status-list">
                <p class="section-label">"Recent System Events"</p>
                {EVENTS
                    .iter()
                    .map(|&(time, event, kind)| {
                        let class = if kind == EventKind::Alert { "tone--red" } else { "tone--muted" };
                        view! {
                            <div class="status-list__row">
                                <span class="mono muted">{time}</span>
                                <span class=class>{event}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="doc-section">
                <p class="section-label">"Data Sources"</p>
                <ul class="doc-section__list">
                    {DATA_SOURCES.iter().map(|&s| view! { <li>{s}</li> }).collect_view()}
                </ul>
            </section>

            <p class="doc__foot">"System monitored 24/7 \u{2022} Incident history publicly available"</p>
            <p class="doc__foot">"Last audit: 18 Dec 2025 \u{2022} Compliance: Public Mode"</p>
        </article>
    }
}
