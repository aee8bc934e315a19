//! Company registry: table view with create/edit modal and delete.

use leptos::prelude::*;

use crate::components::company_form::CompanyForm;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::net::types::{Company, CompanyStatus};
use crate::state::auth::AuthState;
use crate::state::records::RecordList;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let back_href = auth.get_untracked().user.map_or("/dashboard", |user| user.role.home_path());

    let list = RwSignal::new(RecordList::<Company>::default());
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Company>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = api::fetch_companies().await;
        list.update(|l| l.load(items));
    });

    let open_new = move |_| {
        editing.set(None);
        show_form.set(true);
    };
    let on_close = Callback::new(move |()| show_form.set(false));
    let on_save = Callback::new(move |mut company: Company| {
        list.update(|l| company.id = l.upsert(company.clone()));
        api::record_save("companies", &company);
        show_form.set(false);
    });
    let on_edit = Callback::new(move |company: Company| {
        editing.set(Some(company));
        show_form.set(true);
    });
    let on_delete = Callback::new(move |id: u32| {
        list.update(|l| {
            l.remove(id);
        });
        api::record_delete("companies", id);
    });

    view! {
        <div class="portal">
            <PageHeader title="Empresas" back_href=back_href>
                <button class="btn btn--primary" type="button" on:click=open_new>
                    "+ Cadastrar Empresa"
                </button>
            </PageHeader>
            <main class="portal__main">
                <Show when=move || !list.get().loading fallback=|| view! { <p class="muted">"Carregando..."</p> }>
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| view! { <p class="muted">"Nenhuma empresa cadastrada."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Nome Fantasia"</th>
                                    <th>"Razão Social"</th>
                                    <th>"CNPJ"</th>
                                    <th>"Setor"</th>
                                    <th>"Porte"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    list.get()
                                        .items
                                        .into_iter()
                                        .map(|company| view! { <CompanyRow company=company on_edit=on_edit on_delete=on_delete/> })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </main>

            <Show when=move || show_form.get()>
                {move || view! { <CompanyForm company=editing.get_untracked() on_close=on_close on_save=on_save/> }}
            </Show>
        </div>
    }
}

#[component]
fn CompanyRow(company: Company, on_edit: Callback<Company>, on_delete: Callback<u32>) -> impl IntoView {
    let id = company.id;
    let active = company.status == CompanyStatus::Active;
    let edit_target = company.clone();

    view! {
        <tr>
            <td>{company.trade_name}</td>
            <td>{company.legal_name}</td>
            <td>{company.tax_id}</td>
            <td>{company.sector}</td>
            <td>{company.size.label()}</td>
            <td>
                <span class="status-pill" class:status-pill--ok=active class:status-pill--bad=!active>
                    {company.status.label()}
                </span>
            </td>
            <td class="data-table__actions">
                <button class="btn btn--small" type="button" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Editar"
                </button>
                <button class="btn btn--small btn--danger" type="button" on:click=move |_| on_delete.run(id)>
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}
