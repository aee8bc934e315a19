//! Set a new password from an emailed reset link.
//!
//! The token arrives as `?token=`; without it the form is replaced by an
//! error and a link back to login.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::policy_checklist::PolicyChecklist;
use crate::pages::landing::{SiteFooter, SiteHeader};
use crate::state::password_reset::{MISSING_TOKEN_MESSAGE, SUCCESS_MESSAGE, token_from_query, validate_reset};
use crate::util::password_policy::PasswordPolicy;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = Memo::new(move |_| token_from_query(query.read().get("token")));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let policy = Memo::new(move |_| PasswordPolicy::evaluate(&password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let token_value = match validate_reset(&password.get(), &confirm.get(), token.get().as_deref()) {
            Ok(value) => value,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::reset_password(&token_value, &password.get_untracked()).await {
                error.set(Some(e));
                return;
            }
            done.set(true);
            gloo_timers::future::TimeoutFuture::new(crate::state::password_reset::REDIRECT_DELAY_MS).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token_value, done);
        }
    };

    view! {
        <div class="site">
            <SiteHeader/>
            <main class="auth-page">
                <div class="auth-card">
                    <div class="auth-card__panel">
                        <div class="auth-card__heading">
                            <h2>"Redefinir sua Senha"</h2>
                        </div>
                        <Show
                            when=move || token.get().is_some()
                            fallback=|| {
                                view! {
                                    <div class="alert alert--error" role="alert">
                                        {MISSING_TOKEN_MESSAGE}
                                    </div>
                                    <a class="auth-card__back" href="/login">
                                        "Voltar para o Login"
                                    </a>
                                }
                            }
                        >
                            <Show when=move || error.get().is_some()>
                                <div class="alert alert--error" role="alert">
                                    {move || error.get().unwrap_or_default()}
                                </div>
                            </Show>
                            <Show
                                when=move || !done.get()
                                fallback=|| view! { <div class="alert alert--success">{SUCCESS_MESSAGE}</div> }
                            >
                                <form on:submit=on_submit>
                                    <label class="field">
                                        <span class="field__label">"Nova Senha"</span>
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
                                        <span class="field__label">"Confirme a Nova Senha"</span>
                                        <input
                                            class="field__input"
                                            type="password"
                                            required
                                            prop:value=move || confirm.get()
                                            on:input=move |ev| confirm.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <button class="btn btn--primary btn--block" type="submit">
                                        "Salvar Nova Senha"
                                    </button>
                                </form>
                            </Show>
                        </Show>
                    </div>
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}
