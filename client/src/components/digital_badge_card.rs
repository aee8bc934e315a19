//! Card for one issued badge: dates, validity, QR code and share actions.

use leptos::prelude::*;

use crate::net::types::DigitalBadge;
use crate::util::{dates, qr};

/// How long the copy feedback stays visible.
#[cfg(feature = "hydrate")]
const COPY_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn DigitalBadgeCard(digital_badge: DigitalBadge) -> impl IntoView {
    let verify_url = digital_badge.verification_url();
    let qr_src = qr::qr_image_url(&verify_url, qr::DEFAULT_QR_SIZE);
    let qr_download = qr::qr_download_url(&verify_url, qr::DEFAULT_QR_SIZE);
    let file_name = qr::qr_file_name(&digital_badge.id);
    let expired = dates::is_expired(digital_badge.issue_date, digital_badge.badge.validity_months, dates::today());
    let issued = dates::format_br(digital_badge.issue_date);
    let expires = dates::format_br(digital_badge.expiry_date());
    let feedback = RwSignal::new(None::<(bool, String)>);

    let on_copy = {
        let verify_url = verify_url.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let verify_url = verify_url.clone();
                leptos::task::spawn_local(async move {
                    match crate::util::clipboard::copy_text(&verify_url).await {
                        Ok(()) => feedback.set(Some((true, "Link copiado!".to_owned()))),
                        Err(e) => {
                            log::warn!("copy verification link failed: {e}");
                            feedback.set(Some((false, e.to_string())));
                        }
                    }
                    gloo_timers::future::TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    feedback.set(None);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &verify_url;
            }
        }
    };

    view! {
        <article class="badge-card">
            <div class="badge-card__head">
                <img class="badge-card__icon" src=digital_badge.badge.icon.clone() alt=digital_badge.badge.name.clone()/>
                <div>
                    <h3 class="badge-card__title">{digital_badge.badge.name.clone()}</h3>
                    <p class="badge-card__company">{digital_badge.company.trade_name.clone()}</p>
                </div>
                <span class="status-pill" class:status-pill--ok=!expired class:status-pill--bad=expired>
                    {if expired { "Expirado" } else { "Válido" }}
                </span>
            </div>
            <dl class="badge-card__dates">
                <dt>"Emitido em"</dt>
                <dd>{issued}</dd>
                <dt>"Válido até"</dt>
                <dd>{expires}</dd>
            </dl>
            <img class="badge-card__qr" src=qr_src alt="QR Code de verificação"/>
            <div class="badge-card__actions">
                <a class="btn" href=qr_download download=file_name>
                    "Baixar QR Code"
                </a>
                <button class="btn btn--primary" type="button" on:click=on_copy>
                    "Copiar Link"
                </button>
            </div>
            <Show when=move || feedback.get().is_some()>
                {move || {
                    feedback
                        .get()
                        .map(|(ok, text)| {
                            view! {
                                <p class="badge-card__feedback" class:badge-card__feedback--error=!ok>
                                    {text}
                                </p>
                            }
                        })
                }}
            </Show>
            <a class="badge-card__verify" href=verify_url.clone() target="_blank" rel="noopener">
                {verify_url.clone()}
            </a>
        </article>
    }
}
