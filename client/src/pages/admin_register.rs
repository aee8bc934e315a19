//! Sign-up form for FIEA administrators.

use leptos::prelude::*;

use crate::components::policy_checklist::PolicyChecklist;
use crate::pages::landing::{SiteFooter, SiteHeader};
use crate::state::auth::validate_admin_input;
use crate::util::password_policy::PasswordPolicy;

#[component]
pub fn AdminRegistrationPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let policy = Memo::new(move |_| PasswordPolicy::evaluate(&password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        info.set(None);
        let (name_value, email_value) =
            match validate_admin_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_admin(&name_value, &email_value).await {
                Ok(()) => info.set(Some("Administrador cadastrado com sucesso!".to_owned())),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value);
        }
    };

    view! {
        <div class="site">
            <SiteHeader/>
            <main class="auth-page">
                <div class="auth-card">
                    <div class="auth-card__panel">
                        <div class="auth-card__heading">
                            <h2>"Cadastro de Administrador"</h2>
                            <p>"Acesso restrito à equipe FIEA."</p>
                        </div>
                        <form on:submit=on_submit>
                            <Show when=move || error.get().is_some()>
                                <div class="alert alert--error" role="alert">
                                    {move || error.get().unwrap_or_default()}
                                </div>
                            </Show>
                            <Show when=move || info.get().is_some()>
                                <div class="alert alert--success">{move || info.get().unwrap_or_default()}</div>
                            </Show>
                            <label class="field">
                                <span class="field__label">"Nome Completo"</span>
                                <input
                                    class="field__input"
                                    type="text"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"E-mail Institucional"</span>
                                <input
                                    class="field__input"
                                    type="email"
                                    placeholder="nome@fiea.org.br"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Senha"</span>
                                <input
                                    class="field__input"
                                    type="password"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <PolicyChecklist policy=policy/>
                            <label class="field">
                                <span class="field__label">"Confirme a Senha"</span>
                                <input
                                    class="field__input"
                                    type="password"
                                    required
                                    prop:value=move || confirm.get()
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Cadastrando..." } else { "Cadastrar" }}
                            </button>
                        </form>
                        <a class="auth-card__back" href="/dashboard/perfis">
                            "Voltar para Perfis"
                        </a>
                    </div>
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}
