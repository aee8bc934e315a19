//! Fixture records standing in for the portal backend.
//!
//! Every list page loads from here through `net::api`; edits stay in page
//! state and are discarded on navigation.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use time::macros::date;

use super::types::{
    Audit, AuditStatus, AssessmentStatus, Badge, Company, CompanySize, CompanyStatus, Criterion, DigitalBadge,
    Pillar, Role, SelfAssessment,
};

pub const BADGE_ICON: &str = "/badge.jpg";

/// Sign-in identity accepted by the simulated login endpoint.
#[derive(Clone, Debug)]
pub struct Account {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: Role,
}

pub const ACCOUNTS: &[Account] = &[
    Account { email: "admin@fiea.org.br", password: "Selo@2024", name: "Administrador FIEA", role: Role::Admin },
    Account { email: "gestor@alfametais.com.br", password: "Alfa@2024", name: "Gestor Alfa", role: Role::Manager },
];

#[must_use]
pub fn badges() -> Vec<Badge> {
    vec![
        Badge {
            id: 1,
            name: "Selo FIEA de Excelência 2024".to_owned(),
            description: "Concedido a empresas com excelência em gestão, sustentabilidade ambiental e inovação tecnológica."
                .to_owned(),
            icon: BADGE_ICON.to_owned(),
            criteria: vec![
                "Qualidade de Gestão".to_owned(),
                "Sustentabilidade Ambiental".to_owned(),
                "Inovação Tecnológica".to_owned(),
            ],
            validity_months: 12,
            issuance_start: date!(2024 - 01 - 01),
            issuance_end: date!(2024 - 12 - 31),
        },
        Badge {
            id: 2,
            name: "Selo Indústria Sustentável".to_owned(),
            description: "Reconhece práticas de produção limpa e uso eficiente de recursos naturais.".to_owned(),
            icon: BADGE_ICON.to_owned(),
            criteria: vec!["Gestão de Resíduos".to_owned(), "Eficiência Energética".to_owned()],
            validity_months: 24,
            issuance_start: date!(2024 - 03 - 01),
            issuance_end: date!(2025 - 02 - 28),
        },
    ]
}

#[must_use]
pub fn criteria() -> Vec<Criterion> {
    vec![
        Criterion {
            id: 1,
            pillar: Pillar::Quality,
            description: "Possui sistema de gestão da qualidade certificado.".to_owned(),
            weight: 5,
        },
        Criterion {
            id: 2,
            pillar: Pillar::Quality,
            description: "Mede a satisfação dos clientes ao menos uma vez por ano.".to_owned(),
            weight: 3,
        },
        Criterion {
            id: 3,
            pillar: Pillar::Sustainability,
            description: "Destina corretamente os resíduos industriais.".to_owned(),
            weight: 4,
        },
        Criterion {
            id: 4,
            pillar: Pillar::TechnologicalInnovation,
            description: "Investe em pesquisa e desenvolvimento.".to_owned(),
            weight: 4,
        },
    ]
}

#[must_use]
pub fn companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            legal_name: "Indústria Alfa Ltda.".to_owned(),
            trade_name: "Alfa Metais".to_owned(),
            tax_id: "00.000.000/0001-00".to_owned(),
            sector: "Metalurgia".to_owned(),
            size: CompanySize::Medium,
            status: CompanyStatus::Active,
            address: "Rua das Indústrias, Maceió - AL".to_owned(),
            email: "contato@alfametais.com.br".to_owned(),
            phone: "(11) 11111-1111".to_owned(),
        },
        Company {
            id: 2,
            legal_name: "Indústria Beta Ltda.".to_owned(),
            trade_name: "Beta Alimentos".to_owned(),
            tax_id: "11.111.111/0001-11".to_owned(),
            sector: "Alimentício".to_owned(),
            size: CompanySize::Large,
            status: CompanyStatus::Active,
            address: "Rua das Indústrias, Maceió - AL".to_owned(),
            email: "contato@betaalimentos.com.br".to_owned(),
            phone: "(22) 22222-2222".to_owned(),
        },
    ]
}

#[must_use]
pub fn issued_badges() -> Vec<DigitalBadge> {
    let badge = badges().remove(0);
    let mut companies = companies().into_iter();
    let (Some(alfa), Some(beta)) = (companies.next(), companies.next()) else {
        return Vec::new();
    };
    vec![
        DigitalBadge { id: "issued-001".to_owned(), badge: badge.clone(), company: alfa, issue_date: date!(2024 - 03 - 15) },
        DigitalBadge { id: "issued-002".to_owned(), badge, company: beta, issue_date: date!(2024 - 04 - 01) },
    ]
}

#[must_use]
pub fn assessments() -> Vec<SelfAssessment> {
    vec![
        SelfAssessment {
            id: "draft_1".to_owned(),
            badge_id: 1,
            badge_name: "Selo FIEA de Excelência".to_owned(),
            status: AssessmentStatus::Draft,
            progress: 50,
        },
        SelfAssessment {
            id: "sub_1".to_owned(),
            badge_id: 2,
            badge_name: "Selo Indústria Sustentável".to_owned(),
            status: AssessmentStatus::Submitted,
            progress: 100,
        },
    ]
}

#[must_use]
pub fn audits() -> Vec<Audit> {
    vec![
        Audit {
            id: 1,
            company_name: "Alfa Metais".to_owned(),
            badge_name: "Selo FIEA de Excelência 2024".to_owned(),
            auditor: "Carla Menezes".to_owned(),
            scheduled_for: date!(2024 - 02 - 20),
            status: AuditStatus::Completed,
        },
        Audit {
            id: 2,
            company_name: "Beta Alimentos".to_owned(),
            badge_name: "Selo FIEA de Excelência 2024".to_owned(),
            auditor: "Rafael Lima".to_owned(),
            scheduled_for: date!(2024 - 03 - 18),
            status: AuditStatus::InProgress,
        },
        Audit {
            id: 3,
            company_name: "Alfa Metais".to_owned(),
            badge_name: "Selo Indústria Sustentável".to_owned(),
            auditor: "Carla Menezes".to_owned(),
            scheduled_for: date!(2024 - 05 - 06),
            status: AuditStatus::Scheduled,
        },
    ]
}

/// Look up the account matching both credentials.
#[must_use]
pub fn find_account(email: &str, password: &str) -> Option<&'static Account> {
    ACCOUNTS
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
}
