//! Methodology page for the Civic Risk Index.

use leptos::prelude::*;

use crate::components::doc_section::DocSection;

const MEASURES: &[&str] = &[
    "Volume \u{2014} Number of unresolved issues in a jurisdiction",
    "Duration \u{2014} How long issues have remained unaddressed",
    "Severity \u{2014} Category-based risk weighting (e.g., safety hazards rank higher)",
    "Pattern \u{2014} Clustering of similar issues in the same area",
];

const INCREASES: &[&str] = &[
    "New civic issue reported",
    "Existing issue remains unresolved (time decay penalty)",
    "High-severity category (safety, sanitation, infrastructure failure)",
    "Multiple reports in same geographic cluster",
    "Issue crosses 48-hour unresolved threshold",
];

const DECREASES: &[&str] = &[
    "Issue marked as resolved by authority",
    "Fast response time (resolution within 24 hours)",
    "Issue acknowledged and marked \"In Progress\"",
];

/// `(score, label, tone, consequences)`
const THRESHOLDS: [(u32, &str, &str, &[&str]); 3] = [
    (
        50,
        "ELEVATED",
        "orange",
        &[
            "Jurisdiction flagged for monitoring",
            "Appears on public risk map with orange indicator",
            "Weekly reports generated for authorities",
        ],
    ),
    (
        80,
        "CRITICAL",
        "red",
        &[
            "Jurisdiction escalated to critical status",
            "Automatic notification to higher authorities",
            "Public visibility increased",
            "Response time tracking begins",
        ],
    ),
    (
        100,
        "FAILURE",
        "black",
        &[
            "Maximum risk threshold breached",
            "Jurisdiction appears in public failure list",
            "Mandatory escalation protocol triggered",
        ],
    ),
];

const RECALC_TRIGGERS: &[&str] = &["A new issue is reported", "An issue status changes", "A threshold is crossed"];

#[component]
pub fn HowCriWorksPage() -> impl IntoView {
    view! {
        <article class="doc">
            <header class="doc__head">
                <p class="section-label">"Documentation"</p>
                <h1>"How the Civic Risk Index Works"</h1>
                <p>
                    "The Civic Risk Index (CRI) is a real-time measurement of unresolved civic issues within a "
                    "geographic jurisdiction. It transforms citizen reports into a quantifiable accountability metric."
                </p>
            </header>

            <DocSection
                title="What CRI Measures"
                intro="CRI is not a count of complaints. It is a weighted index that reflects:"
                items=MEASURES
            />
            <div class="doc__pair">
                <DocSection title="What Increases CRI" items=INCREASES marker="+" tone="red"/>
                <DocSection title="What Decreases CRI" items=DECREASES marker="\u{2212}" tone="green">
                    <p class="doc__note">"Note: CRI does not decrease on its own. Resolution requires explicit action."</p>
                </DocSection>
            </div>

            <section class="doc-section">
                <h2>"Threshold Behaviors"</h2>
                <p class="doc-section__intro">"CRI operates on a 0-100 scale. System behavior changes at key thresholds:"</p>
                <div class="thresholds">
                    {THRESHOLDS
                        .iter()
                        .map(|&(score, label, tone, effects)| view! {
                            <div class=format!("threshold threshold--{tone}")>
                                <span class="threshold__score mono">{score}</span>
                                <span class="threshold__label">{label}</span>
                                <ul>{effects.iter().map(|&e| view! { <li>{e}</li> }).collect_view()}</ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <DocSection
                title="Calculation Frequency"
                intro="CRI is recalculated every hour for all active jurisdictions. Real-time updates are triggered when:"
                items=RECALC_TRIGGERS
            >
                <p class="mono muted">"Last system-wide recalculation: 12 minutes ago"</p>
            </DocSection>

            <p class="doc__foot">
                "This documentation is publicly accessible. CRI methodology is transparent by design."
            </p>
        </article>
    }
}
