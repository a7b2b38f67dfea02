//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    accountability::AccountabilityPage, analytics::AnalyticsPage, authority_dashboard::AuthorityDashboardPage,
    community::CommunityPage, cri_map::CriMapPage, ethics::EthicsPage, how_cri_works::HowCriWorksPage,
    issue_detail::IssueDetailPage, landing::LandingPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, report::ReportPage, system_status::SystemStatusPage,
};
use crate::state::auth::{AuthState, refresh_user};
use crate::state::theme::Theme;
use crate::util::auth::{Requirement, install_access_redirect};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and theme contexts, restores the stored theme, loads
/// the current identity once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let theme_mode = RwSignal::new(Theme::default());
    provide_context(auth);
    provide_context(theme_mode);

    // First run restores the stored preference before subscribing.
    Effect::new(move |restored: Option<bool>| {
        if restored.is_none() {
            theme_mode.set(theme::read_preference());
        }
        theme::store(theme_mode.get());
        true
    });

    Effect::new(move |_| {
        leptos::task::spawn_local(refresh_user(auth));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fixity.css"/>
        <Title text="Fixity"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <div class="not-found">"Page not found."</div> }>
                    <Route path=StaticSegment("") view=LandingShell/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>

                    <Route path=StaticSegment("map") view=|| view! { <DashboardLayout><CriMapPage/></DashboardLayout> }/>
                    <Route path=StaticSegment("report") view=|| view! { <DashboardLayout><ReportPage/></DashboardLayout> }/>
                    <Route
                        path=StaticSegment("community")
                        view=|| view! { <DashboardLayout><CommunityPage/></DashboardLayout> }
                    />
                    <Route path=StaticSegment("profile") view=|| view! { <DashboardLayout><ProfilePage/></DashboardLayout> }/>
                    <Route
                        path=StaticSegment("how-cri-works")
                        view=|| view! { <DashboardLayout><HowCriWorksPage/></DashboardLayout> }
                    />
                    <Route
                        path=StaticSegment("accountability")
                        view=|| view! { <DashboardLayout><AccountabilityPage/></DashboardLayout> }
                    />
                    <Route
                        path=StaticSegment("system-status")
                        view=|| view! { <DashboardLayout><SystemStatusPage/></DashboardLayout> }
                    />
                    <Route
                        path=(StaticSegment("issue"), ParamSegment("id"))
                        view=|| view! { <DashboardLayout><IssueDetailPage/></DashboardLayout> }
                    />
                    <Route path=StaticSegment("ethics") view=|| view! { <DashboardLayout><EthicsPage/></DashboardLayout> }/>
                    <Route
                        path=StaticSegment("authority")
                        view=|| view! {
                            <DashboardLayout>
                                <Protected><AuthorityDashboardPage/></Protected>
                            </DashboardLayout>
                        }
                    />
                    <Route
                        path=(StaticSegment("authority"), WildcardSegment("rest"))
                        view=|| view! {
                            <DashboardLayout>
                                <Protected><AuthorityDashboardPage/></Protected>
                            </DashboardLayout>
                        }
                    />
                    <Route
                        path=StaticSegment("analytics")
                        view=|| view! {
                            <DashboardLayout>
                                <Protected><AnalyticsPage/></Protected>
                            </DashboardLayout>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// The landing page is the only view with the marketing navbar and footer.
#[component]
fn LandingShell() -> impl IntoView {
    view! {
        <Navbar/>
        <LandingPage/>
        <Footer/>
    }
}

/// Renders `children` for logged-in visitors; everyone else is sent to the
/// login page.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_access_redirect(auth, Requirement::LoggedIn, use_navigate());

    move || {
        let state = auth.get();
        if state.loading {
            view! { <div class="page-loading mono">"Verifying Access..."</div> }.into_any()
        } else if state.user.is_some() {
            children().into_any()
        } else {
            ().into_any()
        }
    }
}
