//! Marketing navbar shown on the landing route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::dashboard_layout::NavItem;
use crate::net::types::Role;
use crate::state::auth::{self, AuthState};

const AUTHORITY_LINKS: [NavItem; 3] = [
    NavItem { label: "Report", href: "/report", icon: "alert" },
    NavItem { label: "Analytics", href: "/analytics", icon: "chart" },
    NavItem { label: "Authority", href: "/authority/dashboard", icon: "shield" },
];

const SECTION_LINKS: [NavItem; 5] = [
    NavItem { label: "Home", href: "#home", icon: "home" },
    NavItem { label: "Timeline", href: "#timeline", icon: "chart" },
    NavItem { label: "Integrity", href: "#integrity", icon: "shield" },
    NavItem { label: "Live Map", href: "#live-map", icon: "map" },
    NavItem { label: "Perspective", href: "#audience", icon: "user" },
];

/// Authorities get work links; everyone else scrolls the landing sections.
pub fn navbar_links(state: &AuthState) -> &'static [NavItem] {
    if state.is_authority() { &AUTHORITY_LINKS } else { &SECTION_LINKS }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        leptos::task::spawn_local(auth::logout(auth));
    };

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">
                <span class="navbar__mark"></span>
                <span class="navbar__title">"Fixity"</span>
            </A>
            <nav class="navbar__links">
                {move || {
                    navbar_links(&auth.get())
                        .iter()
                        .map(|item| view! { <a class="navbar__link" href=item.href>{item.label}</a> })
                        .collect_view()
                }}
            </nav>
            <div class="navbar__session">
                {move || match auth.get().user {
                    Some(user) => {
                        let role = match user.role() {
                            Role::Authority => "Authority",
                            Role::Citizen => "Citizen",
                        };
                        view! {
                            <div class="navbar__user">
                                <span class="navbar__username">{user.username().to_owned()}</span>
                                <span class="navbar__role">{role}</span>
                                <button class="navbar__logout" title="Logout" on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <A href="/login" attr:class="navbar__login">"Login"</A> }.into_any(),
                }}
            </div>
        </header>
    }
}
