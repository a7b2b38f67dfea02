//! Landing-page footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <A href="/" attr:class="footer__logo">"Fixity"</A>
                    <p>
                        "Transforming civic complaints into quantifiable risk. "
                        "Making municipal neglect visible and accountable."
                    </p>
                </div>
                <div class="footer__column">
                    <p class="footer__heading">"Platform"</p>
                    <A href="/report">"Report Issue"</A>
                    <A href="/map">"Risk Map"</A>
                    <A href="/community">"Community Feed"</A>
                </div>
                <div class="footer__column">
                    <p class="footer__heading">"Access"</p>
                    <A href="/login">"Citizen Login"</A>
                    <A href="/authority/dashboard">"Authority Portal"</A>
                </div>
                <div class="footer__column">
                    <p class="footer__heading">"Transparency"</p>
                    <A href="/accountability">"Accountability"</A>
                    <A href="/system-status">"System Status"</A>
                    <A href="/ethics">"Ethics"</A>
                </div>
            </div>
            <div class="footer__bottom">
                <p>"© 2024 Fixity"</p>
                <p class="footer__tagline">"Public data. Continuously updated."</p>
            </div>
        </footer>
    }
}
