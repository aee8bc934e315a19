//! Request a password-reset link by email.

use leptos::prelude::*;

use crate::pages::landing::{SiteFooter, SiteHeader};
use crate::state::validation::required;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        info.set(None);
        let email_value = match required(&email.get(), "E-mail") {
            Ok(value) => value,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(message) => info.set(Some(message.to_owned())),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="site">
            <SiteHeader/>
            <main class="auth-page">
                <div class="auth-card">
                    <div class="auth-card__panel">
                        <div class="auth-card__heading">
                            <h2>"Esqueceu sua senha?"</h2>
                            <p>"Informe seu e-mail para receber um link de redefinição."</p>
                        </div>
                        <Show when=move || error.get().is_some()>
                            <div class="alert alert--error" role="alert">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>
                        <Show
                            when=move || info.get().is_none()
                            fallback=move || {
                                view! { <div class="alert alert--success">{move || info.get().unwrap_or_default()}</div> }
                            }
                        >
                            <form on:submit=on_submit>
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
                                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Enviando..." } else { "Enviar link" }}
                                </button>
                            </form>
                        </Show>
                        <a class="auth-card__back" href="/login">
                            "Voltar para o Login"
                        </a>
                    </div>
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}
