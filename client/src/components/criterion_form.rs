//! Inline panel for creating or editing a criterion.

use leptos::prelude::*;

use crate::net::types::{Criterion, Pillar};
use crate::state::criterion_form::CriterionForm as Draft;

#[component]
pub fn CriterionForm(
    criterion: Option<Criterion>,
    on_save: Callback<Criterion>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = criterion.as_ref().map_or(0, |c| c.id);
    let is_edit = criterion.is_some();
    let form = RwSignal::new(criterion.as_ref().map(Draft::from_criterion).unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().to_criterion(editing_id) {
            Ok(saved) => {
                error.set(None);
                on_save.run(saved);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="panel" on:submit=on_submit>
            <h3 class="panel__title">{if is_edit { "Editando Critério" } else { "Novo Critério" }}</h3>
            <Show when=move || error.get().is_some()>
                <div class="alert alert--error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <label class="field">
                <span class="field__label">"Pilar"</span>
                <select
                    class="field__input"
                    prop:value=move || form.get().pillar.label()
                    on:change=move |ev| form.update(|f| f.set_pillar(&event_target_value(&ev)))
                >
                    {Pillar::ALL
                        .into_iter()
                        .map(|pillar| view! { <option value=pillar.label()>{pillar.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="field">
                <span class="field__label">"Descrição"</span>
                <textarea
                    class="field__input"
                    rows="3"
                    required
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span class="field__label">{move || format!("Peso ({})", form.get().weight)}</span>
                <input
                    class="field__range"
                    type="range"
                    min="1"
                    max="5"
                    prop:value=move || form.get().weight.to_string()
                    on:input=move |ev| form.update(|f| f.set_weight(&event_target_value(&ev)))
                />
            </label>
            <div class="panel__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button class="btn btn--primary" type="submit">
                    "Salvar"
                </button>
            </div>
        </form>
    }
}
