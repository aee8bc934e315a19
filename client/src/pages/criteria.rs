//! Evaluation criteria grouped by pillar, with an inline create/edit panel.

use leptos::prelude::*;

use crate::components::criterion_form::CriterionForm;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::net::types::Criterion;
use crate::state::criterion_form::group_by_pillar;
use crate::state::records::RecordList;

#[component]
pub fn CriteriaPage() -> impl IntoView {
    let list = RwSignal::new(RecordList::<Criterion>::default());
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Criterion>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = api::fetch_criteria().await;
        list.update(|l| l.load(items));
    });

    let open_new = move |_| {
        editing.set(None);
        show_form.set(true);
    };
    let on_cancel = Callback::new(move |()| show_form.set(false));
    let on_save = Callback::new(move |mut criterion: Criterion| {
        list.update(|l| criterion.id = l.upsert(criterion.clone()));
        api::record_save("criteria", &criterion);
        show_form.set(false);
    });
    let on_edit = Callback::new(move |criterion: Criterion| {
        editing.set(Some(criterion));
        show_form.set(true);
    });
    let on_delete = Callback::new(move |id: u32| {
        list.update(|l| {
            l.remove(id);
        });
        api::record_delete("criteria", id);
    });

    view! {
        <div class="portal">
            <PageHeader title="Critérios de Avaliação" back_href="/dashboard">
                <button class="btn btn--primary" type="button" on:click=open_new>
                    "+ Novo Critério"
                </button>
            </PageHeader>
            <main class="portal__main">
                <Show when=move || show_form.get()>
                    {move || view! { <CriterionForm criterion=editing.get_untracked() on_save=on_save on_cancel=on_cancel/> }}
                </Show>
                <Show when=move || !list.get().loading fallback=|| view! { <p class="muted">"Carregando..."</p> }>
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| view! { <p class="muted">"Nenhum critério cadastrado."</p> }
                    >
                        {move || {
                            group_by_pillar(&list.get().items)
                                .into_iter()
                                .map(|(pillar, criteria)| {
                                    view! {
                                        <section class="pillar-group">
                                            <h2 class="pillar-group__title">{pillar.label()}</h2>
                                            <ul class="criteria-table">
                                                {criteria
                                                    .into_iter()
                                                    .map(|criterion| {
                                                        view! { <CriterionRow criterion=criterion on_edit=on_edit on_delete=on_delete/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </section>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn CriterionRow(criterion: Criterion, on_edit: Callback<Criterion>, on_delete: Callback<u32>) -> impl IntoView {
    let id = criterion.id;
    let weight = format!("Peso: {}", criterion.weight);
    let description = criterion.description.clone();

    view! {
        <li class="criteria-table__row">
            <span class="criteria-table__description">{description}</span>
            <span class="criteria-table__weight">{weight}</span>
            <span class="criteria-table__actions">
                <button class="btn btn--small" type="button" on:click=move |_| on_edit.run(criterion.clone())>
                    "Editar"
                </button>
                <button class="btn btn--small btn--danger" type="button" on:click=move |_| on_delete.run(id)>
                    "Excluir"
                </button>
            </span>
        </li>
    }
}
