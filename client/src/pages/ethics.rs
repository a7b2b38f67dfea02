//! Governance page: safeguards against misuse.

use leptos::prelude::*;

use crate::components::doc_section::DocSection;

const TRUST: &[&str] = &[
    "All citizens can submit reports regardless of trust level",
    "New users start with a neutral baseline, not a penalty",
    "Trust scores change slowly over time based on report accuracy",
    "Trust indicators are not publicly displayed or ranked",
];

const SPAM: &[&str] = &[
    "Duplicate detection based on location and description similarity",
    "Rate limiting on submissions per user per jurisdiction",
    "Image verification to confirm evidence authenticity",
    "GPS validation to ensure location accuracy",
];

const PRIVACY: &[&str] = &[
    "Reporter identity is not displayed on public feeds",
    "Personal data is not shared with third parties",
    "Location data is used only for issue mapping and CRI calculation",
    "Users can request data deletion at any time",
];

const TRANSPARENCY: &[&str] = &[
    "CRI methodology is publicly documented",
    "Authority response data is aggregated and published",
    "System status and audit logs are publicly accessible",
    "No private dashboards exist for unaccountable monitoring",
];

#[component]
pub fn EthicsPage() -> impl IntoView {
    view! {
        <article class="doc">
            <header class="doc__head">
                <p class="section-label">"Governance"</p>
                <h1>"Ethics & Safeguards"</h1>
                <p>
                    "Fixity is designed to increase civic accountability without enabling misuse. This document "
                    "outlines the safeguards in place to ensure fair and responsible operation."
                </p>
            </header>

            <DocSection
                title="Trust Indicators"
                intro="Trust indicators are used internally to reduce spam and improve report prioritization. They do not restrict citizens from reporting issues."
                items=TRUST
            />
            <DocSection
                title="Spam Prevention"
                intro="The system employs multiple layers to detect and reduce spam without silencing legitimate reports:"
                items=SPAM
                tone="orange"
            />
            <DocSection title="Data Privacy" items=PRIVACY/>
            <DocSection title="Public Transparency" items=TRANSPARENCY/>

            <section class="doc-section">
                <h2>"Equal Access"</h2>
                <p>
                    "Fixity is designed to serve all citizens equally. No demographic, location, or socioeconomic "
                    "data is used to prioritize or deprioritize reports. The system operates on the principle that "
                    "every civic issue deserves attention."
                </p>
            </section>

            <p class="doc__foot">
                "This document is publicly accessible. Questions or concerns can be directed to system administrators."
            </p>
        </article>
    }
}
