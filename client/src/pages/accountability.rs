//! Public jurisdiction rankings.

#[cfg(test)]
#[path = "accountability_test.rs"]
mod accountability_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::util::poll::poll_every;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jurisdiction {
    pub rank: u32,
    pub name: &'static str,
    pub district: &'static str,
    pub cri: u32,
    /// Hours from report to first authority action.
    pub avg_response: u32,
    /// Percent resolved within 48 hours.
    pub resolved: u32,
    pub trend: Trend,
}

const fn row(
    rank: u32,
    name: &'static str,
    district: &'static str,
    cri: u32,
    avg_response: u32,
    resolved: u32,
    trend: Trend,
) -> Jurisdiction {
    Jurisdiction { rank, name, district, cri, avg_response, resolved, trend }
}

pub const JURISDICTIONS: [Jurisdiction; 10] = [
    row(1, "Rohini", "North West Delhi", 94, 68, 23, Trend::Up),
    row(2, "Hinjewadi", "Pune", 88, 42, 34, Trend::Up),
    row(3, "Andheri West", "Mumbai Suburban", 82, 31, 41, Trend::Down),
    row(4, "Dwarka", "South West Delhi", 76, 28, 52, Trend::Up),
    row(5, "Wakad", "Pune", 72, 24, 61, Trend::Down),
    row(6, "Koramangala", "Bangalore Urban", 68, 22, 58, Trend::Up),
    row(7, "Pitampura", "North West Delhi", 65, 19, 67, Trend::Down),
    row(8, "Powai", "Mumbai Suburban", 54, 18, 72, Trend::Down),
    row(9, "Whitefield", "Bangalore Urban", 48, 16, 78, Trend::Down),
    row(10, "Viman Nagar", "Pune", 42, 14, 84, Trend::Down),
];

/// Rounded mean of `field` across `rows`; zero for an empty table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn rounded_mean(rows: &[Jurisdiction], field: impl Fn(&Jurisdiction) -> u32) -> u32 {
    if rows.is_empty() {
        return 0;
    }
    let sum: u32 = rows.iter().map(field).sum();
    (f64::from(sum) / rows.len() as f64).round() as u32
}

pub fn cri_tone(cri: u32) -> &'static str {
    if cri >= 80 {
        "tone--red"
    } else if cri >= 50 {
        "tone--orange"
    } else {
        "tone--green"
    }
}

pub fn response_tone(hours: u32) -> &'static str {
    if hours > 48 {
        "tone--red"
    } else if hours > 24 {
        "tone--orange"
    } else {
        "tone--muted"
    }
}

pub fn resolved_tone(percent: u32) -> &'static str {
    if percent < 50 {
        "tone--red"
    } else if percent < 70 {
        "tone--orange"
    } else {
        "tone--green"
    }
}

#[component]
pub fn AccountabilityPage() -> impl IntoView {
    let seconds = RwSignal::new(0_u64);
    poll_every(Duration::from_secs(1), move || async move {
        seconds.update(|s| *s += 1);
    });

    let avg_cri = rounded_mean(&JURISDICTIONS, |j| j.cri);
    let avg_response = rounded_mean(&JURISDICTIONS, |j| j.avg_response);
    let avg_resolved = rounded_mean(&JURISDICTIONS, |j| j.resolved);

    view! {
        <article class="doc">
            <header class="doc__head">
                <p class="section-label">"Public Record"</p>
                <h1>"Authority Accountability"</h1>
                <p>
                    "This page displays public performance metrics for all monitored jurisdictions. "
                    "Data is based on report resolution times and CRI trends."
                </p>
                <p class="mono muted">{move || format!("Updated {}s ago \u{2022} Publicly accessible", seconds.get())}</p>
            </header>

            <div class="summary-row">
                <div class="summary">
                    <p class="section-label">"National Avg CRI"</p>
                    <span class=format!("big-number {}", cri_tone(avg_cri))>{avg_cri}</span>
                </div>
                <div class="summary">
                    <p class="section-label">"Avg Response Time"</p>
                    <span class="big-number">{format!("{avg_response}h")}</span>
                    <span class="muted">"to first action"</span>
                </div>
                <div class="summary">
                    <p class="section-label">"Resolved Within 48h"</p>
                    <span class="big-number">{format!("{avg_resolved}%")}</span>
                    <span class="muted">"national avg"</span>
                </div>
            </div>

            <section class="rankings">
                <p class="section-label">"Jurisdiction Rankings by CRI"</p>
                <p class="muted">"Ranked by current Civic Risk Index \u{2022} Higher CRI = higher risk"</p>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Jurisdiction"</th>
                            <th>"CRI"</th>
                            <th>"Avg Response"</th>
                            <th>"Resolved 48h"</th>
                            <th>"Trend"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {JURISDICTIONS
                            .iter()
                            .map(|j| {
                                let row_class = if j.cri >= 80 { "row--critical" } else { "" };
                                let trend = match j.trend {
                                    Trend::Up => view! { <span class="tone--red">"\u{2197}"</span> }.into_any(),
                                    Trend::Down => view! { <span class="tone--green">"\u{2198}"</span> }.into_any(),
                                };
                                view! {
                                    <tr class=row_class>
                                        <td class="mono">{format!("#{}", j.rank)}</td>
                                        <td>
                                            <p>{j.name}</p>
                                            <p class="muted">{j.district}</p>
                                        </td>
                                        <td class=format!("mono {}", cri_tone(j.cri))>{j.cri}</td>
                                        <td class=format!("mono {}", response_tone(j.avg_response))>
                                            {format!("{}h", j.avg_response)}
                                        </td>
                                        <td class=format!("mono {}", resolved_tone(j.resolved))>
                                            {format!("{}%", j.resolved)}
                                        </td>
                                        <td>{trend}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="doc-section">
                <p class="section-label">"Methodology"</p>
                <p>
                    "Rankings are calculated based on current CRI scores. Response time measures hours from report "
                    "submission to first authority action. Resolution rate measures percentage of issues resolved "
                    "within 48 hours. No individual authority names are displayed. Data is aggregated at "
                    "jurisdiction level."
                </p>
            </section>

            <p class="doc__foot">"This data is publicly accessible \u{2022} Rankings updated hourly"</p>
        </article>
    }
}
