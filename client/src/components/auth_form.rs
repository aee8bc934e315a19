//! Combined sign-in / sign-up card used by the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login failures always show the same message so the UI never reveals which
//! field was wrong; counting attempts belongs to the backend.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::policy_checklist::PolicyChecklist;
use crate::state::auth::{AuthState, AuthTab, validate_login_input, validate_register_input};
use crate::util::password_policy::PasswordPolicy;

#[component]
pub fn AuthForm(#[prop(into)] initial_tab: Signal<AuthTab>) -> impl IntoView {
    let active = RwSignal::new(initial_tab.get_untracked());
    Effect::new(move || active.set(initial_tab.get()));

    view! {
        <div class="auth-card">
            <div class="auth-card__panel">
                <div class="auth-tabs">
                    <button
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=move || active.get() == AuthTab::Login
                        on:click=move |_| active.set(AuthTab::Login)
                    >
                        "Entrar"
                    </button>
                    <button
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=move || active.get() == AuthTab::Register
                        on:click=move |_| active.set(AuthTab::Register)
                    >
                        "Cadastrar-se"
                    </button>
                </div>
                <Show when=move || active.get() == AuthTab::Login fallback=RegisterPanel>
                    <LoginPanel/>
                </Show>
            </div>
            <p class="auth-card__terms">
                "Ao acessar o portal você concorda com nossos "
                <a href="#">"Termos de Serviço"</a>
                "."
            </p>
        </div>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    let home = user.role.home_path();
                    auth.update(|a| a.user = Some(user));
                    navigate(home, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, navigate, auth);
        }
    };

    view! {
        <div>
            <div class="auth-card__heading">
                <h2>"Acessar Portal"</h2>
                <p>"Bem-vindo de volta!"</p>
            </div>
            <form on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <label class="field">
                    <span class="field__label">"E-mail"</span>
                    <input
                        class="field__input"
                        type="email"
                        placeholder="email@empresa.com.br"
                        required
                        disabled=move || busy.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Senha"</span>
                    <input
                        class="field__input"
                        type="password"
                        placeholder="••••••••"
                        required
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <div class="auth-card__links">
                    <a href="/forgot-password">"Esqueceu sua senha?"</a>
                </div>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn RegisterPanel() -> impl IntoView {
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
        let (company_value, email_value) =
            match validate_register_input(&company.get(), &email.get(), &password.get()) {
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
            match crate::net::api::register(&company_value, &email_value).await {
                Ok(()) => info.set(Some("Cadastro enviado! Verifique seu e-mail para ativar a conta.".to_owned())),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (company_value, email_value);
        }
    };

    view! {
        <div>
            <div class="auth-card__heading">
                <h2>"Criar Nova Conta"</h2>
                <p>"Preencha os dados para se inscrever."</p>
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
                    <span class="field__label">"Nome da Indústria"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Nome da sua empresa"
                        required
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"E-mail de Acesso"</span>
                    <input
                        class="field__input"
                        type="email"
                        placeholder="email@empresa.com.br"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Crie uma Senha"</span>
                    <input
                        class="field__input"
                        type="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <PolicyChecklist policy=policy/>
                <button class="btn btn--success btn--block" type="submit" disabled=move || busy.get()>
                    "Criar Conta"
                </button>
            </form>
        </div>
    }
}
