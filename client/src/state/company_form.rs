//! Editable draft behind the company create/edit modal.

#[cfg(test)]
#[path = "company_form_test.rs"]
mod company_form_test;

use super::validation::{FormError, is_formatted_cnpj, is_valid_email, required};
use crate::net::types::{Company, CompanySize, CompanyStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub legal_name: String,
    pub trade_name: String,
    pub tax_id: String,
    pub sector: String,
    pub size: CompanySize,
    pub status: CompanyStatus,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl CompanyForm {
    #[must_use]
    pub fn from_company(company: &Company) -> Self {
        Self {
            legal_name: company.legal_name.clone(),
            trade_name: company.trade_name.clone(),
            tax_id: company.tax_id.clone(),
            sector: company.sector.clone(),
            size: company.size,
            status: company.status,
            address: company.address.clone(),
            email: company.email.clone(),
            phone: company.phone.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the first failing [`FormError`] in field order.
    pub fn to_company(&self, id: u32) -> Result<Company, FormError> {
        let legal_name = required(&self.legal_name, "Razão Social")?;
        let trade_name = required(&self.trade_name, "Nome Fantasia")?;
        let tax_id = required(&self.tax_id, "CNPJ")?;
        if !is_formatted_cnpj(&tax_id) {
            return Err(FormError::TaxId);
        }
        let email = required(&self.email, "E-mail")?;
        if !is_valid_email(&email) {
            return Err(FormError::Email);
        }
        Ok(Company {
            id,
            legal_name,
            trade_name,
            tax_id,
            sector: self.sector.trim().to_owned(),
            size: self.size,
            status: self.status,
            address: self.address.trim().to_owned(),
            email,
            phone: self.phone.trim().to_owned(),
        })
    }
}
