use super::*;
use crate::net::mock;

fn filled() -> CompanyForm {
    CompanyForm::from_company(&mock::companies()[0])
}

#[test]
fn reopening_saved_company_reproduces_fields() {
    for company in mock::companies() {
        let form = CompanyForm::from_company(&company);
        assert_eq!(form.to_company(company.id), Ok(company));
    }
}

#[test]
fn missing_trade_name_is_reported() {
    let form = CompanyForm { trade_name: String::new(), ..filled() };
    assert_eq!(form.to_company(1), Err(FormError::Required("Nome Fantasia")));
}

#[test]
fn unformatted_cnpj_is_rejected() {
    let form = CompanyForm { tax_id: "00000000000100".to_owned(), ..filled() };
    assert_eq!(form.to_company(1), Err(FormError::TaxId));
}

#[test]
fn invalid_email_is_rejected() {
    let form = CompanyForm { email: "contato".to_owned(), ..filled() };
    assert_eq!(form.to_company(1), Err(FormError::Email));
}

#[test]
fn optional_fields_may_be_blank() {
    let form = CompanyForm { sector: String::new(), address: String::new(), phone: " ".to_owned(), ..filled() };
    let company = form.to_company(0).unwrap();
    assert!(company.sector.is_empty());
    assert!(company.phone.is_empty());
}
