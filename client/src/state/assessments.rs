//! Self-assessment list shown on the industry dashboard.

#[cfg(test)]
#[path = "assessments_test.rs"]
mod assessments_test;

use crate::net::types::{AssessmentStatus, SelfAssessment};

#[derive(Clone, Debug, Default)]
pub struct AssessmentsState {
    pub items: Vec<SelfAssessment>,
    pub loading: bool,
}

impl AssessmentsState {
    #[must_use]
    pub fn drafts(&self) -> Vec<SelfAssessment> {
        self.with_status(AssessmentStatus::Draft)
    }

    #[must_use]
    pub fn submitted(&self) -> Vec<SelfAssessment> {
        self.with_status(AssessmentStatus::Submitted)
    }

    fn with_status(&self, status: AssessmentStatus) -> Vec<SelfAssessment> {
        self.items.iter().filter(|a| a.status == status).cloned().collect()
    }
}

/// Route that reopens a draft for the badge it targets.
#[must_use]
pub fn continue_path(assessment: &SelfAssessment) -> String {
    format!("/industry/assessment/{}", assessment.badge_id)
}
