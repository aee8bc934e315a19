//! Audit schedule, read-only.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::{Audit, AuditStatus};
use crate::util::dates;

#[component]
pub fn AuditsPage() -> impl IntoView {
    let audits = RwSignal::new(None::<Vec<Audit>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_audits().await;
        audits.set(Some(items));
    });

    view! {
        <div class="portal">
            <PageHeader title="Auditorias" back_href="/dashboard"/>
            <main class="portal__main">
                {move || match audits.get() {
                    None => view! { <p class="muted">"Carregando..."</p> }.into_any(),
                    Some(items) if items.is_empty() => {
                        view! { <p class="muted">"Nenhuma auditoria agendada."</p> }.into_any()
                    }
                    Some(items) => {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Empresa"</th>
                                        <th>"Selo"</th>
                                        <th>"Auditor"</th>
                                        <th>"Data"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items.into_iter().map(|audit| view! { <AuditRow audit=audit/> }).collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn AuditRow(audit: Audit) -> impl IntoView {
    let pill = match audit.status {
        AuditStatus::Scheduled => "status-pill status-pill--info",
        AuditStatus::InProgress => "status-pill status-pill--warn",
        AuditStatus::Completed => "status-pill status-pill--ok",
    };

    view! {
        <tr>
            <td>{audit.company_name}</td>
            <td>{audit.badge_name}</td>
            <td>{audit.auditor}</td>
            <td>{dates::format_br(audit.scheduled_for)}</td>
            <td>
                <span class=pill>{audit.status.label()}</span>
            </td>
        </tr>
    }
}
