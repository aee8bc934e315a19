//! Editable draft behind the criterion form.

#[cfg(test)]
#[path = "criterion_form_test.rs"]
mod criterion_form_test;

use super::validation::{FormError, required};
use crate::net::types::{Criterion, Pillar};

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 5;
pub const DEFAULT_WEIGHT: u8 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriterionForm {
    pub pillar: Pillar,
    pub description: String,
    pub weight: u8,
}

impl Default for CriterionForm {
    fn default() -> Self {
        Self { pillar: Pillar::Quality, description: String::new(), weight: DEFAULT_WEIGHT }
    }
}

impl CriterionForm {
    #[must_use]
    pub fn from_criterion(criterion: &Criterion) -> Self {
        Self { pillar: criterion.pillar, description: criterion.description.clone(), weight: criterion.weight }
    }

    /// Apply a range-slider value, clamped into 1..=5.
    pub fn set_weight(&mut self, raw: &str) {
        let parsed = raw.trim().parse::<i64>().unwrap_or(i64::from(DEFAULT_WEIGHT));
        let clamped = parsed.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT));
        self.weight = u8::try_from(clamped).unwrap_or(DEFAULT_WEIGHT);
    }

    /// Apply a `<select>` value; unknown labels leave the pillar unchanged.
    pub fn set_pillar(&mut self, label: &str) {
        if let Some(pillar) = Pillar::from_label(label) {
            self.pillar = pillar;
        }
    }

    /// # Errors
    ///
    /// Returns [`FormError::Required`] for a blank description and
    /// [`FormError::Weight`] when the weight left the 1..=5 range.
    pub fn to_criterion(&self, id: u32) -> Result<Criterion, FormError> {
        let description = required(&self.description, "Descrição")?;
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight) {
            return Err(FormError::Weight);
        }
        Ok(Criterion { id, pillar: self.pillar, description, weight: self.weight })
    }
}

/// Criteria grouped by pillar in `Pillar::ALL` order, skipping empty pillars.
#[must_use]
pub fn group_by_pillar(criteria: &[Criterion]) -> Vec<(Pillar, Vec<Criterion>)> {
    Pillar::ALL
        .into_iter()
        .map(|pillar| (pillar, criteria.iter().filter(|c| c.pillar == pillar).cloned().collect::<Vec<_>>()))
        .filter(|(_, group)| !group.is_empty())
        .collect()
}
