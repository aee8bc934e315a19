//! Modal form for creating or editing a badge.
//!
//! The parent owns the badge list; this component only validates and hands a
//! finished `Badge` to `on_save` (id 0 for a new badge).

use leptos::prelude::*;

use crate::net::types::Badge;
use crate::state::badge_form::BadgeForm;
use crate::util::dates;

#[component]
pub fn DynamicForm(badge: Option<Badge>, on_close: Callback<()>, on_save: Callback<Badge>) -> impl IntoView {
    let editing_id = badge.as_ref().map_or(0, |b| b.id);
    let is_edit = badge.is_some();
    let form = RwSignal::new(badge.as_ref().map(BadgeForm::from_badge).unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().to_badge(editing_id, dates::today()) {
            Ok(saved) => {
                error.set(None);
                on_save.run(saved);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let add_criterion = move || {
        form.update(|f| {
            f.add_criterion();
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" type="button" on:click=move |_| on_close.run(()) aria-label="Fechar">
                    "✕"
                </button>
                <h2>{if is_edit { "Editar Selo" } else { "Criar Novo Selo" }}</h2>
                <form on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="alert alert--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <label class="field">
                        <span class="field__label">"Nome do Selo"</span>
                        <input
                            class="field__input"
                            type="text"
                            required
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
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
                        <span class="field__label">"URL do Ícone"</span>
                        <input
                            class="field__input"
                            type="url"
                            placeholder="https://exemplo.com/icone.png"
                            required
                            prop:value=move || form.get().icon
                            on:input=move |ev| form.update(|f| f.icon = event_target_value(&ev))
                        />
                    </label>
                    <div class="field-grid">
                        <label class="field">
                            <span class="field__label">"Validade (meses)"</span>
                            <input
                                class="field__input"
                                type="number"
                                min="1"
                                required
                                prop:value=move || form.get().validity_months.to_string()
                                on:input=move |ev| form.update(|f| f.set_validity(&event_target_value(&ev)))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Início da Emissão"</span>
                            <input
                                class="field__input"
                                type="date"
                                required
                                prop:value=move || form.get().issuance_start
                                on:input=move |ev| form.update(|f| f.issuance_start = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Fim da Emissão"</span>
                            <input
                                class="field__input"
                                type="date"
                                required
                                prop:value=move || form.get().issuance_end
                                on:input=move |ev| form.update(|f| f.issuance_end = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="field">
                        <span class="field__label">"Critérios"</span>
                        <div class="input-group">
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Adicionar um critério"
                                prop:value=move || form.get().criterion_input
                                on:input=move |ev| form.update(|f| f.criterion_input = event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_criterion();
                                    }
                                }
                            />
                            <button class="btn" type="button" on:click=move |_| add_criterion()>
                                "Adicionar"
                            </button>
                        </div>
                        <ul class="criteria-list">
                            {move || {
                                form.get()
                                    .criteria
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, criterion)| {
                                        view! {
                                            <li class="criteria-list__item">
                                                <span>{criterion}</span>
                                                <button
                                                    class="criteria-list__remove"
                                                    type="button"
                                                    aria-label="Remover critério"
                                                    on:click=move |_| {
                                                        form.update(|f| {
                                                            f.remove_criterion(index);
                                                        });
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            {if is_edit { "Salvar" } else { "Criar Selo" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
