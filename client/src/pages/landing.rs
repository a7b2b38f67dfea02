//! Public landing page.
//!
//! Section ids (`home`, `timeline`, `integrity`, `live-map`, `audience`) are
//! the anchors the marketing navbar links to.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::risk_map::{RiskMap, Viewport};
use crate::pages::cri_map::{initial_viewport, national_overview};
use crate::util::poll::poll_every;

/// Headline readout: `(area, cri, status)`.
pub const RISK_ZONES: [(&str, u32, &str); 3] =
    [("Delhi", 94, "Critical"), ("Pune", 72, "Elevated"), ("Bhubaneswar", 45, "Monitoring")];

/// One stage of risk accumulation for an ignored issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub day: &'static str,
    pub cri: &'static str,
    pub level: &'static str,
    pub desc: &'static str,
}

pub const STAGES: [Stage; 4] = [
    Stage {
        day: "Day 1",
        cri: "+2",
        level: "Minor",
        desc: "Issue reported to authorities. The clock starts ticking immediately.",
    },
    Stage {
        day: "Day 14",
        cri: "+11",
        level: "Escalated",
        desc: "No response received. The issue has entered the visible risk zone.",
    },
    Stage {
        day: "Day 45",
        cri: "+28",
        level: "Critical",
        desc: "Threshold crossed. Automatic notification sent to oversight bodies.",
    },
    Stage {
        day: "Day 90",
        cri: "+65",
        level: "Systemic",
        desc: "Systemic failure recorded. This area is now a high-priority risk zone.",
    },
];

const INTEGRITY: [(&str, &str); 4] = [
    (
        "Geo-Tag Verification",
        "Every report is cryptographically anchored to a physical location. Spoofing is mathematically impossible.",
    ),
    ("Time Escalation", "Risk scores compound automatically every 24 hours of inaction."),
    ("Public Visibility", "Data flows directly to public dashboards. Transparency is the default."),
    (
        "Authority Acknowledgment",
        "Official responses are tracked and time-stamped. Silence is recorded as a decision.",
    ),
];

const FRESHNESS_CYCLE_SECS: u64 = 180;

/// CSS color for a timeline level.
pub fn level_color(level: &str) -> &'static str {
    match level {
        "Systemic" => "#000000",
        "Critical" => "var(--risk-critical)",
        "Escalated" => "var(--risk-elevated)",
        _ => "var(--text-muted)",
    }
}

/// "Last updated" label after `elapsed_secs` on the page. The label starts
/// at two minutes, and each three-minute cycle then counts up from "just now".
pub fn freshness_label(elapsed_secs: u64) -> &'static str {
    if elapsed_secs < FRESHNESS_CYCLE_SECS {
        return "Updated 2 minutes ago";
    }
    match (elapsed_secs - FRESHNESS_CYCLE_SECS) % FRESHNESS_CYCLE_SECS / 60 {
        0 => "Updated just now",
        1 => "Updated 1 minute ago",
        _ => "Updated 2 minutes ago",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Audience {
    #[default]
    Citizens,
    Authorities,
}

pub struct AudiencePitch {
    pub headline: &'static str,
    pub body: &'static str,
    pub points: [&'static str; 3],
    pub cta: &'static str,
    pub href: &'static str,
}

impl Audience {
    pub fn pitch(self) -> AudiencePitch {
        match self {
            Self::Citizens => AudiencePitch {
                headline: "Force accountability through visibility.",
                body: "When reports are public, they cannot be ignored. Track your submission from intake to \
                       resolution, and watch the risk score escalate if action isn't taken.",
                points: ["Instant public record", "Automatic risk escalation", "Proof of negligence"],
                cta: "Start a Report",
                href: "/report",
            },
            Self::Authorities => AudiencePitch {
                headline: "Manage risk before it becomes a crisis.",
                body: "Access a unified dashboard of civic health. Identify critical infrastructure failures \
                       early and deploy resources based on data, not noise.",
                points: ["Real-time heatmap", "Duplicate detection", "Performance analytics"],
                cta: "Access Portal",
                href: "/login",
            },
        }
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Hero/>
            <RiskTimeline/>
            <IntegrityStack/>
            <MapPreview/>
            <AudienceToggle/>
            <FinalCta/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let elapsed = RwSignal::new(0_u64);
    poll_every(Duration::from_secs(60), move || async move {
        elapsed.update(|s| *s += 60);
    });

    view! {
        <section id="home" class="hero">
            <div class="hero__message">
                <p class="hero__eyebrow">"Public Civic Risk Measurement System"</p>
                <h1>"Civic neglect is no longer invisible."</h1>
                <p class="hero__focus">"It Is Measurable Risk"</p>
                <p>
                    "Fixity tracks unresolved civic issues over time and converts public inaction into a "
                    "visible, escalating risk index."
                </p>
                <p class="hero__assert">"Unresolved issues automatically increase civic risk."</p>
                <div class="hero__cta">
                    <A href="/report" attr:class="button button--dark">"Report an Issue \u{2192}"</A>
                    <div class="live-indicator">
                        <span class="live-indicator__dot"></span>
                        <span class="live-indicator__label">"CRI Live"</span>
                        <span class="live-indicator__time">{move || freshness_label(elapsed.get())}</span>
                    </div>
                </div>
                <p class="muted">"All reports are public and contribute to the risk index."</p>
            </div>

            <div class="hero__side">
                <ul class="readout">
                    {RISK_ZONES
                        .iter()
                        .map(|&(area, cri, status)| {
                            let class = format!("readout__row readout__row--{}", status.to_lowercase());
                            view! {
                                <li class=class>
                                    <span>{area}</span>
                                    <span class="mono">{cri}</span>
                                    <span>{status}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <A href="/map" attr:class="big-link">
                    <h3>"CRI Check Your Own City"</h3>
                    <p>"View real-time risk maps for Odisha blocks & districts."</p>
                </A>
                <A href="/how-cri-works" attr:class="big-link">
                    <h3>"Everything About CRI"</h3>
                    <p>"Understand the methodology behind the risk score."</p>
                </A>
            </div>
        </section>
    }
}

#[component]
fn RiskTimeline() -> impl IntoView {
    view! {
        <section id="timeline" class="risk-timeline">
            <h2>"Unresolved issues accumulate risk over time."</h2>
            <p>"Every day of inaction increases the Civic Risk Index."</p>
            <ol class="stack">
                {STAGES
                    .iter()
                    .map(|stage| {
                        let style = format!("--level-color:{}", level_color(stage.level));
                        view! {
                            <li class="stack__card" style=style>
                                <span class="stack__meta">{stage.day}</span>
                                <h3>{format!("CRI {}", stage.cri)}</h3>
                                <span class="stack__level">{stage.level}</span>
                                <p>{stage.desc}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <p class="mono">"Risk calculation is automatic and publicly auditable."</p>
            <p class="mono">"Risk does not reset without resolution."</p>
        </section>
    }
}

#[component]
fn IntegrityStack() -> impl IntoView {
    view! {
        <section id="integrity" class="integrity">
            <p class="section-label">"Report Integrity Layer"</p>
            <h2>"How reports become risk."</h2>
            <div class="integrity__grid">
                {INTEGRITY
                    .iter()
                    .map(|&(title, desc)| view! {
                        <div class="integrity__card">
                            <h3>{title}</h3>
                            <p>{desc}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <p class="muted">
                "No AI claims. No blockchain. "
                <b>"Every step is time-stamped and publicly auditable."</b>
            </p>
        </section>
    }
}

#[component]
fn MapPreview() -> impl IntoView {
    let points = Signal::derive(national_overview);
    let view_port = Signal::derive(|| Viewport { zoom: 11, ..initial_viewport() });

    view! {
        <section id="live-map" class="map-preview">
            <h2>"Live Civic Risk Heatmap"</h2>
            <p>"Real-time data from across the city. Verified and visualized."</p>
            <A href="/map" attr:class="map-preview__frame">
                <RiskMap points=points viewport=view_port/>
                <span class="map-preview__status">"System Online \u{2022} Monitoring"</span>
                <span class="map-preview__cta">"Explore Interactive Map"</span>
            </A>
        </section>
    }
}

#[component]
fn AudienceToggle() -> impl IntoView {
    let audience = RwSignal::new(Audience::default());
    let tab_class = move |tab: Audience| if audience.get() == tab { "toggle__tab toggle__tab--active" } else { "toggle__tab" };

    view! {
        <section id="audience" class="audience">
            <p class="section-label">"Select Perspective"</p>
            <div class="toggle">
                <button class=move || tab_class(Audience::Citizens) on:click=move |_| audience.set(Audience::Citizens)>
                    "Citizens"
                </button>
                <button
                    class=move || tab_class(Audience::Authorities)
                    on:click=move |_| audience.set(Audience::Authorities)
                >
                    "Authorities"
                </button>
            </div>
            {move || {
                let pitch = audience.get().pitch();
                view! {
                    <div class="audience__panel">
                        <h3>{pitch.headline}</h3>
                        <p>{pitch.body}</p>
                        <ul>{pitch.points.iter().map(|&p| view! { <li>{p}</li> }).collect_view()}</ul>
                        <A href=pitch.href attr:class="button">{pitch.cta} " \u{2192}"</A>
                    </div>
                }
            }}
        </section>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <section class="final-cta">
            <h2>"Accountability is inevitable."</h2>
            <p>"The Civic Risk Index ensures that no failure goes unrecorded. Start measuring what matters."</p>
            <A href="/report" attr:class="button button--dark">"Report an Issue \u{2192}"</A>
        </section>
    }
}
