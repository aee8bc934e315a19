//! Portal users, grouped by role.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::User;
use crate::state::profiles::group_by_role;

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let users = RwSignal::new(None::<Vec<User>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_profiles().await;
        users.set(Some(items));
    });

    view! {
        <div class="portal">
            <PageHeader title="Perfis de Acesso" back_href="/dashboard">
                <a class="btn btn--primary" href="/admin-register">
                    "+ Novo Administrador"
                </a>
            </PageHeader>
            <main class="portal__main">
                {move || match users.get() {
                    None => view! { <p class="muted">"Carregando..."</p> }.into_any(),
                    Some(items) if items.is_empty() => {
                        view! { <p class="muted">"Nenhum usuário cadastrado."</p> }.into_any()
                    }
                    Some(items) => {
                        group_by_role(&items)
                            .into_iter()
                            .map(|(role, members)| {
                                view! {
                                    <section class="pillar-group">
                                        <h2 class="pillar-group__title">{role.label()}</h2>
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Nome"</th>
                                                    <th>"E-mail"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {members
                                                    .into_iter()
                                                    .map(|u| view! { <tr><td>{u.name}</td><td>{u.email}</td></tr> })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    </section>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
