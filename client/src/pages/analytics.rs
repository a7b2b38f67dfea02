//! Authority analytics console: KPIs, risk composition, trend and hotspots.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::collections::BTreeMap;
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::charts::{BarChart, DoughnutChart, LineChart};
use crate::net::api;
use crate::net::types::{AnalyticsPackage, Hotspot, Pillar};
use crate::state::auth::AuthState;
use crate::util::auth::{Access, Requirement, check_access, install_access_redirect};
use crate::util::poll::poll_every;

const ANALYTICS_POLL: Duration = Duration::from_secs(5);

/// Headline label and tone for a system CRI score.
pub fn cri_label(score: f64) -> (&'static str, &'static str) {
    if score > 80.0 {
        ("CRITICAL", "tone--red")
    } else if score > 50.0 {
        ("MODERATE", "tone--orange")
    } else {
        ("STABLE", "tone--green")
    }
}

pub fn pillar_slices(pillars: &[Pillar]) -> Vec<(String, f64)> {
    pillars.iter().map(|p| (p.name.clone(), p.risk)).collect()
}

pub fn distribution_bars(distribution: &BTreeMap<String, u32>) -> Vec<(String, u32)> {
    distribution.iter().map(|(k, v)| (k.clone(), *v)).collect()
}

/// Hotspot duration, `"0h"` when the backend leaves it blank.
pub fn hotspot_duration(spot: &Hotspot) -> &str {
    if spot.duration.is_empty() { "0h" } else { &spot.duration }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_access_redirect(auth, Requirement::Authority, use_navigate());

    let data = RwSignal::new(None::<AnalyticsPackage>);
    let loading = RwSignal::new(true);
    let refreshing = RwSignal::new(false);

    let fetch = move || async move {
        refreshing.set(true);
        match api::fetch_analytics().await {
            Ok(package) => data.set(Some(package)),
            Err(e) => leptos::logging::warn!("failed to fetch analytics: {e}"),
        }
        loading.set(false);
        refreshing.set(false);
    };

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if check_access(&auth.get(), Requirement::Authority) != Access::Granted {
            return false;
        }
        leptos::task::spawn_local(fetch());
        true
    });
    poll_every(ANALYTICS_POLL, move || async move {
        if check_access(&auth.get_untracked(), Requirement::Authority) == Access::Granted {
            fetch().await;
        }
    });

    let trend_labels = Signal::derive(move || data.with(|d| d.as_ref().map(|p| p.trend.labels.clone()).unwrap_or_default()));
    let trend_values = Signal::derive(move || data.with(|d| d.as_ref().map(|p| p.trend.values.clone()).unwrap_or_default()));
    let slices = Signal::derive(move || data.with(|d| d.as_ref().map(|p| pillar_slices(&p.pillars)).unwrap_or_default()));
    let bars = Signal::derive(move || data.with(|d| d.as_ref().map(|p| distribution_bars(&p.distribution)).unwrap_or_default()));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"LOADING CONTROL ROOM..."</div> }>
            <Show when=move || data.with(Option::is_some) fallback=|| view! { <div class="page-loading">"No Data Available"</div> }>
                <div class="analytics">
                    <header class="page-header">
                        <div>
                            <h1>"Operational Control Room"</h1>
                            <p>"Real-time risk monitoring & department accountability"</p>
                        </div>
                        <div class="page-header__actions">
                            <button class="button button--ghost">"Export Report"</button>
                            <button
                                class="button button--dark"
                                disabled=move || refreshing.get()
                                on:click=move |_| leptos::task::spawn_local(fetch())
                            >
                                {move || if refreshing.get() { "Refreshing..." } else { "Live Refresh" }}
                            </button>
                        </div>
                    </header>

                    {move || {
                        data.get().map(|package| {
                            let summary = package.summary;
                            let (label, tone) = cri_label(summary.cri_score);
                            view! {
                                <div class="kpi-row">
                                    <KpiCard
                                        title="Current CRI Score"
                                        value=summary.cri_score.to_string()
                                        subtext=label
                                        tone=tone
                                        tooltip="Scale: 0-100. Aggregated risk based on unresolved civic issues"
                                    />
                                    <KpiCard
                                        title="High-Risk Issues"
                                        value=summary.high_risk_count.to_string()
                                        subtext="Requiring immediate intervention"
                                        tone="tone--ink"
                                        tooltip="Issues exceeding risk threshold of 70"
                                    />
                                    <KpiCard
                                        title="Avg Resolution Time"
                                        value=summary.avg_res_time
                                        subtext="Department efficiency metric"
                                        tone="tone--ink"
                                        tooltip="Average time from reporting to verified resolution"
                                    />
                                    <KpiCard
                                        title="Repeat Complaint Rate"
                                        value=summary.repeat_rate
                                        subtext="Ineffective resolution signal"
                                        tone="tone--orange"
                                        tooltip="Percentage of issues reported multiple times"
                                    />
                                </div>
                            }
                        })
                    }}

                    <div class="widget-row">
                        <section class="widget">
                            <h3>"Risk Composition"</h3>
                            <p class="widget__sub">"Contribution by primary risk pillars"</p>
                            <DoughnutChart slices=slices/>
                        </section>
                        <section class="widget widget--wide">
                            <h3>"7-Day Risk Trajectory"</h3>
                            <p class="widget__sub">"Impact of inaction vs. resolution"</p>
                            <LineChart labels=trend_labels values=trend_values/>
                            <span class="widget__note tone--red">"Risk Accumulating"</span>
                        </section>
                    </div>

                    <div class="widget-row">
                        <section class="widget widget--wide">
                            <h3>"Top Risk Locations"</h3>
                            <p class="widget__sub">"Localized intervention priorities"</p>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Area / Block"</th>
                                        <th>"CRI Score"</th>
                                        <th>"Dominant Risk"</th>
                                        <th>"Duration"</th>
                                        <th>"Action"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        data.with(|d| d.as_ref().map(|p| p.hotspots.clone()).unwrap_or_default())
                                            .into_iter()
                                            .map(|spot| {
                                                let duration = hotspot_duration(&spot).to_owned();
                                                view! {
                                                    <tr>
                                                        <td>{spot.area}</td>
                                                        <td><span class="score">{spot.cri}</span></td>
                                                        <td>{spot.dominant_risk}</td>
                                                        <td class="mono">{duration}</td>
                                                        <td><button class="button button--small">"Deploy"</button></td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        </section>
                        <section class="widget">
                            <h3>"Issue Load by Category"</h3>
                            <p class="widget__sub">"Volume by technical category"</p>
                            <BarChart bars=bars/>
                        </section>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn KpiCard(
    title: &'static str,
    #[prop(into)] value: String,
    subtext: &'static str,
    tone: &'static str,
    tooltip: &'static str,
) -> impl IntoView {
    view! {
        <div class="kpi" title=tooltip>
            <h4>{title}</h4>
            <div class=format!("kpi__value {tone}")>{value}</div>
            <div class="kpi__sub">{subtext}</div>
        </div>
    }
}
