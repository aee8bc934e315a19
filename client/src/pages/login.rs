//! Login page: sign-in and industry sign-up tabs.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::auth_form::AuthForm;
use crate::pages::landing::{SiteFooter, SiteHeader};
use crate::state::auth::AuthTab;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let tab = Signal::derive(move || AuthTab::from_query(query.read().get("tab").as_deref()));

    view! {
        <div class="site">
            <SiteHeader/>
            <main class="auth-page">
                <AuthForm initial_tab=tab/>
            </main>
            <SiteFooter/>
        </div>
    }
}

/// Industry sign-up: the same card opened on the register tab.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main class="auth-page">
                <AuthForm initial_tab=Signal::stored(AuthTab::Register)/>
            </main>
            <SiteFooter/>
        </div>
    }
}
