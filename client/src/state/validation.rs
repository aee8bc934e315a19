//! Shared field checks for portal forms.
//!
//! DESIGN
//! ======
//! Forms validate synchronously before calling their save callback; the
//! `Display` text of each error is what the form renders inline.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("O campo \"{0}\" é obrigatório.")]
    Required(&'static str),
    #[error("Data inválida em \"{0}\".")]
    InvalidDate(&'static str),
    #[error("A data de fim da emissão não pode ser anterior à data de início.")]
    DateRange,
    #[error("A validade deve ser de pelo menos 1 mês.")]
    Validity,
    #[error("O peso deve estar entre 1 e 5.")]
    Weight,
    #[error("Informe um e-mail válido.")]
    Email,
    #[error("CNPJ deve seguir o formato 00.000.000/0000-00.")]
    TaxId,
}

/// Trim `value` and reject it when blank.
///
/// # Errors
///
/// Returns [`FormError::Required`] naming `field` when nothing but whitespace remains.
pub fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_owned())
}

/// Minimal email shape check: one `@` with non-empty local and domain parts.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.trim().split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// Whether `tax_id` is a CNPJ written as `00.000.000/0000-00`.
#[must_use]
pub fn is_formatted_cnpj(tax_id: &str) -> bool {
    const SHAPE: &[u8] = b"##.###.###/####-##";
    let bytes = tax_id.trim().as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(&b, &s)| if s == b'#' { b.is_ascii_digit() } else { b == s })
}
