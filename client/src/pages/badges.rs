//! Badge management: list, create/edit via `DynamicForm`, delete with confirmation.

use leptos::prelude::*;

use crate::components::dynamic_form::DynamicForm;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::net::types::Badge;
use crate::state::records::RecordList;
use crate::util::dates;

#[component]
pub fn BadgesPage() -> impl IntoView {
    let list = RwSignal::new(RecordList::<Badge>::default());
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Badge>);
    let delete_id = RwSignal::new(None::<u32>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = api::fetch_badges().await;
        list.update(|l| l.load(items));
    });

    let open_new = move |_| {
        editing.set(None);
        show_form.set(true);
    };
    let on_edit = Callback::new(move |badge: Badge| {
        editing.set(Some(badge));
        show_form.set(true);
    });
    let on_close = Callback::new(move |()| show_form.set(false));
    let on_save = Callback::new(move |mut badge: Badge| {
        list.update(|l| badge.id = l.upsert(badge.clone()));
        api::record_save("badges", &badge);
        show_form.set(false);
    });
    let on_delete_cancel = move |_| delete_id.set(None);
    let on_delete_confirm = move |_| {
        if let Some(id) = delete_id.get_untracked() {
            list.update(|l| {
                l.remove(id);
            });
            api::record_delete("badges", id);
        }
        delete_id.set(None);
    };

    view! {
        <div class="portal">
            <PageHeader title="Gerenciamento de Selos" back_href="/dashboard">
                <button class="btn btn--primary" type="button" on:click=open_new>
                    "+ Criar Novo Selo"
                </button>
            </PageHeader>
            <main class="portal__main">
                <Show when=move || !list.get().loading fallback=|| view! { <p class="muted">"Carregando..."</p> }>
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| view! { <p class="muted">"Nenhum selo cadastrado."</p> }
                    >
                        <div class="card-grid">
                            {move || {
                                list.get()
                                    .items
                                    .into_iter()
                                    .map(|badge| {
                                        let id = badge.id;
                                        view! {
                                            <BadgeTile
                                                badge=badge
                                                on_edit=on_edit
                                                on_delete=Callback::new(move |()| delete_id.set(Some(id)))
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </main>

            <Show when=move || show_form.get()>
                {move || view! { <DynamicForm badge=editing.get_untracked() on_close=on_close on_save=on_save/> }}
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <div class="dialog-backdrop" on:click=on_delete_cancel>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Excluir Selo"</h2>
                        <p>"Tem certeza que deseja excluir este selo? Esta ação não pode ser desfeita."</p>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=on_delete_cancel>
                                "Cancelar"
                            </button>
                            <button class="btn btn--danger" type="button" on:click=on_delete_confirm>
                                "Excluir"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn BadgeTile(badge: Badge, on_edit: Callback<Badge>, on_delete: Callback<()>) -> impl IntoView {
    let window = format!(
        "{} a {}",
        dates::format_br(badge.issuance_start),
        dates::format_br(badge.issuance_end)
    );
    let criteria = badge.criteria.clone();
    let validity = format!("Validade: {} meses", badge.validity_months);
    let edit_target = badge.clone();

    view! {
        <article class="badge-tile">
            <div class="badge-tile__head">
                <img class="badge-tile__icon" src=badge.icon alt=badge.name.clone()/>
                <h3 class="badge-tile__title">{badge.name}</h3>
            </div>
            <p class="badge-tile__description">{badge.description}</p>
            <p class="muted">{validity}</p>
            <p class="muted">"Emissão: " {window}</p>
            <ul class="badge-tile__criteria">
                {criteria.into_iter().map(|c| view! { <li>{c}</li> }).collect::<Vec<_>>()}
            </ul>
            <div class="badge-tile__actions">
                <button class="btn" type="button" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Editar"
                </button>
                <button class="btn btn--danger" type="button" on:click=move |_| on_delete.run(())>
                    "Excluir"
                </button>
            </div>
        </article>
    }
}
