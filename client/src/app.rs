//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin_register::AdminRegistrationPage, audits::AuditsPage, available_badges::AvailableBadgesPage,
    badges::BadgesPage, companies::CompaniesPage, criteria::CriteriaPage, dashboard::DashboardPage,
    digital_badges::DigitalBadgesPage, forgot_password::ForgotPasswordPage,
    industry_dashboard::IndustryDashboardPage, landing::LandingPage, login::LoginPage, login::RegisterPage,
    profiles::ProfilesPage, reset_password::ResetPasswordPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
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
/// Provides the auth context and maps every portal path to its page. There
/// are no route guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/selo.css"/>
        <Title text="Selo FIEA"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("admin-register") view=AdminRegistrationPage/>
                <Route path=StaticSegment("empresas") view=CompaniesPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("selos")) view=BadgesPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("criterios")) view=CriteriaPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("auditorias")) view=AuditsPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("perfis")) view=ProfilesPage/>
                <Route path=(StaticSegment("industry"), StaticSegment("dashboard")) view=IndustryDashboardPage/>
                <Route
                    path=(StaticSegment("industry"), StaticSegment("dashboard"), StaticSegment("selos"))
                    view=DigitalBadgesPage
                />
                <Route
                    path=(StaticSegment("industry"), StaticSegment("dashboard"), StaticSegment("selos-disponiveis"))
                    view=AvailableBadgesPage
                />
            </Routes>
        </Router>
    }
}
