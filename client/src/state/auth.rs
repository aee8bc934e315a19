//! Auth-session state and the sign-in / sign-up form checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is provided as context by `App`; the login page writes it on
//! success. Routes are not guarded, so nothing else depends on it yet beyond
//! greeting the user by name.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::state::validation::is_valid_email;
use crate::util::password_policy::PasswordPolicy;

/// Authentication state tracking the signed-in user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

/// Tabs of the combined sign-in / sign-up card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    /// Pick the initial tab from the `?tab=` query value.
    #[must_use]
    pub fn from_query(tab: Option<&str>) -> Self {
        match tab {
            Some("register") => Self::Register,
            _ => Self::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Informe e-mail e senha.")]
    MissingCredentials,
    #[error("Informe o nome da indústria.")]
    MissingCompany,
    #[error("Informe o nome completo.")]
    MissingName,
    #[error("Informe um e-mail válido.")]
    InvalidEmail,
    #[error("A senha não atende a todos os critérios de segurança.")]
    WeakPassword,
    #[error("As senhas não coincidem.")]
    Mismatch,
}

/// Trim and check the login fields before calling the API.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredentials`] when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), AuthError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Check the sign-up fields: company name, email shape and password policy.
///
/// # Errors
///
/// Returns the first failing [`AuthError`] in field order.
pub fn validate_register_input(company: &str, email: &str, password: &str) -> Result<(String, String), AuthError> {
    let company = company.trim();
    if company.is_empty() {
        return Err(AuthError::MissingCompany);
    }
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if !PasswordPolicy::evaluate(password).is_met() {
        return Err(AuthError::WeakPassword);
    }
    Ok((company.to_owned(), email.to_owned()))
}

/// Check the administrator sign-up fields. Same rules as
/// [`validate_register_input`] with a person's name in place of the company,
/// plus a matching confirmation.
///
/// # Errors
///
/// Returns the first failing [`AuthError`] in field order.
pub fn validate_admin_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::MissingName);
    }
    let values = validate_register_input(name, email, password)?;
    if password != confirm {
        return Err(AuthError::Mismatch);
    }
    Ok(values)
}
