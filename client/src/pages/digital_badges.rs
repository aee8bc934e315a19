//! Badges issued to the signed-in industry, with QR codes and share links.

use leptos::prelude::*;

use crate::components::digital_badge_card::DigitalBadgeCard;
use crate::components::page_header::PageHeader;
use crate::net::types::DigitalBadge;

#[component]
pub fn DigitalBadgesPage() -> impl IntoView {
    let issued = RwSignal::new(None::<Vec<DigitalBadge>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_issued_badges().await;
        issued.set(Some(items));
    });

    view! {
        <div class="portal">
            <PageHeader title="Meus Selos" back_href="/industry/dashboard"/>
            <main class="portal__main">
                {move || match issued.get() {
                    None => view! { <p class="muted">"Carregando..."</p> }.into_any(),
                    Some(items) if items.is_empty() => {
                        view! { <p class="muted">"Nenhum selo conquistado ainda."</p> }.into_any()
                    }
                    Some(items) => {
                        view! {
                            <div class="card-grid">
                                {items
                                    .into_iter()
                                    .map(|digital_badge| view! { <DigitalBadgeCard digital_badge=digital_badge/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
