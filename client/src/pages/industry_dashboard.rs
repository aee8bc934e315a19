//! Industry manager portal: navigation tiles plus the self-assessment summary.

use leptos::prelude::*;

use crate::components::nav_card::{NavCard, Tone};
use crate::components::page_header::{LogoutLink, PageHeader};
use crate::state::assessments::{AssessmentsState, continue_path};

#[component]
pub fn IndustryDashboardPage() -> impl IntoView {
    let assessments = RwSignal::new(AssessmentsState { items: Vec::new(), loading: true });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_assessments().await;
        assessments.update(|s| {
            s.items = items;
            s.loading = false;
        });
    });

    view! {
        <div class="portal">
            <PageHeader title="Portal da Indústria">
                <LogoutLink/>
            </PageHeader>
            <main class="portal__main">
                <h2 class="portal__greeting">"Bem-vindo, Gestor da Indústria!"</h2>
                <div class="card-grid">
                    <NavCard
                        href="/empresas"
                        title="Minhas Empresas"
                        description="Visualize e gerencie as informações das empresas cadastradas."
                        icon="🏭"
                        tone=Tone::Indigo
                    />
                    <NavCard
                        href="/industry/dashboard/selos"
                        title="Selos Conquistados"
                        description="Visualize os selos de reconhecimento FIEA conquistados."
                        icon="✅"
                        tone=Tone::Green
                    />
                    <NavCard
                        href="/industry/dashboard/selos-disponiveis"
                        title="Selos Disponíveis"
                        description="Veja os selos abertos para inscrição e inicie um novo processo de certificação."
                        icon="🏅"
                        tone=Tone::Yellow
                    />
                    <AssessmentsCard assessments=assessments/>
                </div>
            </main>
        </div>
    }
}

#[component]
fn AssessmentsCard(assessments: RwSignal<AssessmentsState>) -> impl IntoView {
    let drafts = move || assessments.get().drafts();
    let submitted = move || assessments.get().submitted();
    let empty = move || {
        let state = assessments.get();
        !state.loading && state.items.is_empty()
    };

    view! {
        <section class="assessments">
            <h3 class="assessments__title">"Minhas Autoavaliações"</h3>
            <Show when=move || assessments.get().loading>
                <p class="muted">"Carregando..."</p>
            </Show>
            <Show when=move || !drafts().is_empty()>
                <h4 class="assessments__group assessments__group--draft">"Em Andamento (Rascunhos)"</h4>
                {move || {
                    drafts()
                        .into_iter()
                        .map(|draft| {
                            view! {
                                <a class="assessments__row" href=continue_path(&draft)>
                                    <div>
                                        <p class="assessments__name">{draft.badge_name.clone()}</p>
                                        <p class="muted">{format!("Progresso: {}%", draft.progress)}</p>
                                    </div>
                                    <span class="assessments__action">"Continuar"</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
            <Show when=move || !submitted().is_empty()>
                <h4 class="assessments__group assessments__group--submitted">"Submetidas (Em Análise)"</h4>
                {move || {
                    submitted()
                        .into_iter()
                        .map(|sub| {
                            view! {
                                <div class="assessments__row assessments__row--done">
                                    <p class="assessments__name">{sub.badge_name}</p>
                                    <span class="assessments__sent">"✓ Enviado"</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
            <Show when=empty>
                <p class="assessments__empty">"Nenhuma autoavaliação iniciada."</p>
            </Show>
        </section>
    }
}
