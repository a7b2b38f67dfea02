//! Sidebar + content frame wrapping every dashboard route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wraps every dashboard page in this frame. The
//! navigation set follows the viewer's role (guests get the citizen set), so
//! the same frame serves both audiences.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::{CurrentUser, Role};
use crate::state::auth::{self, AuthState};
use crate::state::theme::Theme;

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

const AUTHORITY_NAV: [NavItem; 3] = [
    NavItem { label: "Dashboard", href: "/authority/dashboard", icon: "shield" },
    NavItem { label: "Analytics", href: "/analytics", icon: "chart" },
    NavItem { label: "Reports", href: "/report", icon: "alert" },
];

const CITIZEN_NAV: [NavItem; 5] = [
    NavItem { label: "Risk Map", href: "/map", icon: "map" },
    NavItem { label: "Report", href: "/report", icon: "alert" },
    NavItem { label: "Feed", href: "/community", icon: "share" },
    NavItem { label: "How to Use CRI", href: "/how-cri-works", icon: "book" },
    NavItem { label: "Profile", href: "/profile", icon: "user" },
];

const GUEST_NAME: &str = "Guest User";
const GUEST_EMAIL: &str = "citizen@fixity.in";

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Authority => &AUTHORITY_NAV,
        Role::Citizen => &CITIZEN_NAV,
    }
}

/// Active highlighting is an exact path match.
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    item.href == pathname
}

/// Avatar initial, display name and email line for the sidebar card.
pub fn user_badge(user: Option<&CurrentUser>) -> (String, String, String) {
    let Some(user) = user else {
        return ("G".to_owned(), GUEST_NAME.to_owned(), GUEST_EMAIL.to_owned());
    };
    let name = user.username();
    let initial = name
        .chars()
        .next()
        .map_or_else(|| "G".to_owned(), |c| c.to_uppercase().collect());
    let email = match user {
        CurrentUser::Citizen(c) => c.email.clone(),
        CurrentUser::Authority(a) => a.email.clone(),
    };
    (initial, name.to_owned(), email)
}

/// Dashboard chrome. Children render in the content card.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let location = use_location();
    let navigate = use_navigate();

    let badge = move || user_badge(auth.get().user.as_ref());
    let items = move || nav_items(auth.get().layout_role());

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            auth::logout(auth).await;
            navigate("/login", NavigateOptions::default());
        });
    };

    let on_theme = move |_| theme.update(|t| *t = t.toggled());

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <div class="dashboard__user">
                    <div class="dashboard__avatar">{move || badge().0}</div>
                    <div class="dashboard__identity">
                        <h2 class="dashboard__name">{move || badge().1}</h2>
                        <p class="dashboard__email">{move || badge().2}</p>
                    </div>
                </div>
                <nav class="dashboard__nav">
                    {move || {
                        let pathname = location.pathname.get();
                        items()
                            .iter()
                            .map(|item| {
                                let class = if is_active(item, &pathname) {
                                    "dashboard__link dashboard__link--active"
                                } else {
                                    "dashboard__link"
                                };
                                view! {
                                    <A href=item.href attr:class=class>
                                        <span class=format!("icon icon--{}", item.icon)></span>
                                        <span class="dashboard__label">{item.label}</span>
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                <div class="dashboard__actions">
                    <button class="dashboard__theme" on:click=on_theme>
                        {move || match theme.get() {
                            Theme::Public => "Monitoring view",
                            Theme::Monitoring => "Public view",
                        }}
                    </button>
                    <button class="dashboard__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="dashboard__content">
                <div class="dashboard__card">{children()}</div>
            </main>
        </div>
    }
}
