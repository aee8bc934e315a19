//! Admin portal landing: navigation tiles for the management screens.

use leptos::prelude::*;

use crate::components::nav_card::{NavCard, Tone};
use crate::components::page_header::{LogoutLink, PageHeader};
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Bem-vindo!".to_owned(), |user| format!("Bem-vindo, {}!", user.name))
    };

    view! {
        <div class="portal">
            <PageHeader title="Portal do Administrador">
                <LogoutLink/>
            </PageHeader>
            <main class="portal__main">
                <h2 class="portal__greeting">{greeting}</h2>
                <div class="card-grid">
                    <NavCard
                        href="/dashboard/selos"
                        title="Gerenciar Selos"
                        description="Crie, edite e acompanhe os selos de reconhecimento."
                        icon="🏅"
                        tone=Tone::Blue
                    />
                    <NavCard
                        href="/dashboard/criterios"
                        title="Critérios de Avaliação"
                        description="Defina os critérios de cada pilar e seus pesos."
                        icon="📋"
                        tone=Tone::Green
                    />
                    <NavCard
                        href="/dashboard/auditorias"
                        title="Auditorias"
                        description="Acompanhe as auditorias agendadas e concluídas."
                        icon="🔍"
                        tone=Tone::Yellow
                    />
                    <NavCard
                        href="/empresas"
                        title="Empresas"
                        description="Consulte e mantenha o cadastro das indústrias participantes."
                        icon="🏭"
                        tone=Tone::Indigo
                    />
                    <NavCard
                        href="/dashboard/perfis"
                        title="Perfis de Acesso"
                        description="Consulte administradores e gestores com acesso ao portal."
                        icon="👥"
                        tone=Tone::Blue
                    />
                </div>
            </main>
        </div>
    }
}
