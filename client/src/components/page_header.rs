//! Top bar shared by the portal's inner pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages pass their title and, when they sit below a dashboard, the link back
//! to it. Extra actions (logout, "new" buttons) go in as children.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] back_href: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__inner">
                <div>
                    {back_href
                        .map(|href| {
                            view! {
                                <a class="page-header__back" href=href>
                                    "← Voltar para o Portal"
                                </a>
                            }
                        })}
                    <h1 class="page-header__title">{title}</h1>
                </div>
                <div class="page-header__actions">{children.map(|c| c())}</div>
            </div>
        </header>
    }
}

/// "Sair" link that also clears the signed-in user.
#[component]
pub fn LogoutLink() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <a class="page-header__logout" href="/login" on:click=move |_| auth.update(|a| a.user = None)>
            "Sair"
        </a>
    }
}
