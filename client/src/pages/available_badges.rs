//! Badges currently open for application.

#[cfg(test)]
#[path = "available_badges_test.rs"]
mod available_badges_test;

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::Badge;
use crate::util::dates;

/// Whether `today` falls inside the badge's issuance window (inclusive).
#[must_use]
pub fn is_open(badge: &Badge, today: time::Date) -> bool {
    badge.issuance_start <= today && today <= badge.issuance_end
}

#[component]
pub fn AvailableBadgesPage() -> impl IntoView {
    let badges = RwSignal::new(None::<Vec<Badge>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_badges().await;
        badges.set(Some(items));
    });

    view! {
        <div class="portal">
            <PageHeader title="Selos Disponíveis" back_href="/industry/dashboard"/>
            <main class="portal__main">
                {move || match badges.get() {
                    None => view! { <p class="muted">"Carregando..."</p> }.into_any(),
                    Some(items) => {
                        let today = dates::today();
                        view! {
                            <div class="card-grid">
                                {items
                                    .into_iter()
                                    .map(|badge| {
                                        let open = is_open(&badge, today);
                                        view! {
                                            <article class="badge-tile">
                                                <div class="badge-tile__head">
                                                    <img class="badge-tile__icon" src=badge.icon alt=badge.name.clone()/>
                                                    <h3 class="badge-tile__title">{badge.name}</h3>
                                                </div>
                                                <p class="badge-tile__description">{badge.description}</p>
                                                <p class="muted">
                                                    {format!(
                                                        "Inscrições de {} a {}",
                                                        dates::format_br(badge.issuance_start),
                                                        dates::format_br(badge.issuance_end),
                                                    )}
                                                </p>
                                                <span
                                                    class="status-pill"
                                                    class:status-pill--ok=open
                                                    class:status-pill--bad=!open
                                                >
                                                    {if open { "Inscrições abertas" } else { "Inscrições encerradas" }}
                                                </span>
                                            </article>
                                        }
                                    })
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
