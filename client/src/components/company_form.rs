//! Modal form for registering or editing a company.

use leptos::prelude::*;

use crate::net::types::{Company, CompanySize, CompanyStatus};
use crate::state::company_form::CompanyForm as Draft;

#[component]
pub fn CompanyForm(company: Option<Company>, on_close: Callback<()>, on_save: Callback<Company>) -> impl IntoView {
    let editing_id = company.as_ref().map_or(0, |c| c.id);
    let is_edit = company.is_some();
    let form = RwSignal::new(company.as_ref().map(Draft::from_company).unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().to_company(editing_id) {
            Ok(saved) => {
                error.set(None);
                on_save.run(saved);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" type="button" on:click=move |_| on_close.run(()) aria-label="Fechar">
                    "✕"
                </button>
                <h2>{if is_edit { "Editar Empresa" } else { "Cadastrar Empresa" }}</h2>
                <form on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="alert alert--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <div class="field-grid field-grid--two">
                        <label class="field">
                            <span class="field__label">"Razão Social"</span>
                            <input
                                class="field__input"
                                type="text"
                                required
                                prop:value=move || form.get().legal_name
                                on:input=move |ev| form.update(|f| f.legal_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Nome Fantasia"</span>
                            <input
                                class="field__input"
                                type="text"
                                required
                                prop:value=move || form.get().trade_name
                                on:input=move |ev| form.update(|f| f.trade_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"CNPJ"</span>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="00.000.000/0000-00"
                                required
                                prop:value=move || form.get().tax_id
                                on:input=move |ev| form.update(|f| f.tax_id = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Setor"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || form.get().sector
                                on:input=move |ev| form.update(|f| f.sector = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Porte"</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().size.label()
                                on:change=move |ev| {
                                    if let Some(size) = CompanySize::from_label(&event_target_value(&ev)) {
                                        form.update(|f| f.size = size);
                                    }
                                }
                            >
                                {CompanySize::ALL
                                    .into_iter()
                                    .map(|size| view! { <option value=size.label()>{size.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field__label">"Status"</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().status.label()
                                on:change=move |ev| {
                                    if let Some(status) = CompanyStatus::from_label(&event_target_value(&ev)) {
                                        form.update(|f| f.status = status);
                                    }
                                }
                            >
                                {CompanyStatus::ALL
                                    .into_iter()
                                    .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">"Endereço"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.get().address
                            on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                        />
                    </label>
                    <div class="field-grid field-grid--two">
                        <label class="field">
                            <span class="field__label">"E-mail"</span>
                            <input
                                class="field__input"
                                type="email"
                                required
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Telefone"</span>
                            <input
                                class="field__input"
                                type="tel"
                                prop:value=move || form.get().phone
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Salvar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
