//! Portal entity records shared by pages, forms and the simulated API.
//!
//! DESIGN
//! ======
//! These are plain display records. They carry serde derives so the shape
//! matches what a real backend would exchange, and calendar dates serialize
//! as `YYYY-MM-DD` like the HTML date inputs that edit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// =============================================================================
// BADGES
// =============================================================================

/// A certification badge ("selo") definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Image URL shown on cards and issued badges.
    pub icon: String,
    pub criteria: Vec<String>,
    pub validity_months: u32,
    #[serde(with = "iso_date")]
    pub issuance_start: Date,
    #[serde(with = "iso_date")]
    pub issuance_end: Date,
}

// =============================================================================
// CRITERIA
// =============================================================================

/// Fixed evaluation categories a criterion belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    #[default]
    Quality,
    Sustainability,
    TechnologicalInnovation,
}

impl Pillar {
    pub const ALL: [Self; 3] = [Self::Quality, Self::Sustainability, Self::TechnologicalInnovation];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Quality => "Qualidade",
            Self::Sustainability => "Sustentabilidade",
            Self::TechnologicalInnovation => "Inovação Tecnológica",
        }
    }

    /// Parse a `<select>` value back into a pillar.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// One scored dimension of a badge evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: u32,
    pub pillar: Pillar,
    pub description: String,
    /// Relative weight, 1 through 5.
    pub weight: u8,
}

// =============================================================================
// COMPANIES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Micro,
    #[default]
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub const ALL: [Self; 4] = [Self::Micro, Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Micro => "Micro",
            Self::Small => "Pequeno",
            Self::Medium => "Médio",
            Self::Large => "Grande",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    #[default]
    Active,
    Inactive,
}

impl CompanyStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Ativa",
            Self::Inactive => "Inativa",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// A registered industry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub legal_name: String,
    pub trade_name: String,
    /// CNPJ in the formatted `00.000.000/0000-00` shape.
    pub tax_id: String,
    pub sector: String,
    pub size: CompanySize,
    pub status: CompanyStatus,
    pub address: String,
    pub email: String,
    pub phone: String,
}

// =============================================================================
// ISSUED BADGES
// =============================================================================

/// A badge granted to a specific company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalBadge {
    pub id: String,
    pub badge: Badge,
    pub company: Company,
    #[serde(with = "iso_date")]
    pub issue_date: Date,
}

impl DigitalBadge {
    #[must_use]
    pub fn expiry_date(&self) -> Date {
        crate::util::dates::expiry_date(self.issue_date, self.badge.validity_months)
    }

    #[must_use]
    pub fn verification_url(&self) -> String {
        crate::util::qr::verification_url(&self.id)
    }
}

// =============================================================================
// SELF-ASSESSMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Submitted,
}

/// An applicant's response against a badge's criteria.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfAssessment {
    pub id: String,
    pub badge_id: u32,
    pub badge_name: String,
    pub status: AssessmentStatus,
    /// Completion percentage, 0 through 100.
    pub progress: u8,
}

// =============================================================================
// AUDITS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl AuditStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Agendada",
            Self::InProgress => "Em andamento",
            Self::Completed => "Concluída",
        }
    }
}

/// An on-site audit of a company applying for a badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub id: u32,
    pub company_name: String,
    pub badge_name: String,
    pub auditor: String,
    #[serde(with = "iso_date")]
    pub scheduled_for: Date,
    pub status: AuditStatus,
}

// =============================================================================
// ACCOUNTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// FIEA staff managing badges, criteria and audits.
    Admin,
    /// Industry manager applying for badges.
    Manager,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Admin, Self::Manager];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administradores",
            Self::Manager => "Gestores da Indústria",
        }
    }

    /// Landing route after a successful login.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/dashboard",
            Self::Manager => "/industry/dashboard",
        }
    }
}

/// The signed-in user as seen by the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: Role,
}
