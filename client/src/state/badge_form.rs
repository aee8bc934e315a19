//! Editable draft behind the badge create/edit modal.

#[cfg(test)]
#[path = "badge_form_test.rs"]
mod badge_form_test;

use time::Date;

use super::validation::{FormError, required};
use crate::net::types::Badge;
use crate::util::dates;

pub const DEFAULT_VALIDITY_MONTHS: u32 = 12;

/// Field values exactly as the inputs hold them.
///
/// Dates stay as `YYYY-MM-DD` strings until submit so a half-typed value
/// never gets rejected mid-edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeForm {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub criteria: Vec<String>,
    pub validity_months: u32,
    pub issuance_start: String,
    pub issuance_end: String,
    /// Text box feeding `add_criterion`.
    pub criterion_input: String,
}

impl Default for BadgeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            icon: String::new(),
            criteria: Vec::new(),
            validity_months: DEFAULT_VALIDITY_MONTHS,
            issuance_start: String::new(),
            issuance_end: String::new(),
            criterion_input: String::new(),
        }
    }
}

impl BadgeForm {
    #[must_use]
    pub fn from_badge(badge: &Badge) -> Self {
        Self {
            name: badge.name.clone(),
            description: badge.description.clone(),
            icon: badge.icon.clone(),
            criteria: badge.criteria.clone(),
            validity_months: badge.validity_months,
            issuance_start: dates::format_input(badge.issuance_start),
            issuance_end: dates::format_input(badge.issuance_end),
            criterion_input: String::new(),
        }
    }

    /// Parse a number input; anything unparsable becomes 0 and fails validation later.
    pub fn set_validity(&mut self, raw: &str) {
        self.validity_months = raw.trim().parse().unwrap_or(0);
    }

    /// Append the trimmed criterion input. Blank input is ignored.
    pub fn add_criterion(&mut self) -> bool {
        let value = self.criterion_input.trim();
        if value.is_empty() {
            return false;
        }
        self.criteria.push(value.to_owned());
        self.criterion_input.clear();
        true
    }

    /// Remove the criterion at `index`, keeping the others in order.
    pub fn remove_criterion(&mut self, index: usize) -> Option<String> {
        (index < self.criteria.len()).then(|| self.criteria.remove(index))
    }

    /// Validate and build the badge to hand to the save callback.
    ///
    /// `id` is the edited badge's id, or 0 for a new one. Empty date inputs
    /// default to `today`.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`FormError`] in field order.
    pub fn to_badge(&self, id: u32, today: Date) -> Result<Badge, FormError> {
        let name = required(&self.name, "Nome do Selo")?;
        let description = required(&self.description, "Descrição")?;
        let icon = required(&self.icon, "URL do Ícone")?;
        if self.validity_months == 0 {
            return Err(FormError::Validity);
        }
        let issuance_start = parse_or_today(&self.issuance_start, "Início da Emissão", today)?;
        let issuance_end = parse_or_today(&self.issuance_end, "Fim da Emissão", today)?;
        if issuance_end < issuance_start {
            return Err(FormError::DateRange);
        }
        Ok(Badge {
            id,
            name,
            description,
            icon,
            criteria: self.criteria.clone(),
            validity_months: self.validity_months,
            issuance_start,
            issuance_end,
        })
    }
}

fn parse_or_today(raw: &str, field: &'static str, today: Date) -> Result<Date, FormError> {
    if raw.trim().is_empty() {
        return Ok(today);
    }
    dates::parse_input(raw).map_err(|_| FormError::InvalidDate(field))
}
