//! Submit checks for the reset-password form.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use crate::util::password_policy::PasswordPolicy;

/// Delay before sending the user back to `/login` after a successful reset.
pub const REDIRECT_DELAY_MS: u32 = 3000;

pub const MISSING_TOKEN_MESSAGE: &str =
    "Token de redefinição inválido ou ausente. Por favor, solicite um novo link.";
pub const SUCCESS_MESSAGE: &str = "Senha redefinida com sucesso! Você será redirecionado para o login.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("A senha não atende a todos os critérios de segurança.")]
    WeakPassword,
    #[error("As senhas não coincidem.")]
    Mismatch,
    #[error("Token inválido.")]
    MissingToken,
}

/// Normalize the `?token=` query value; blank counts as absent.
#[must_use]
pub fn token_from_query(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Check a reset submission. Returns the token to send on success.
///
/// # Errors
///
/// Checks run in a fixed order: policy, confirmation match, then token.
pub fn validate_reset(password: &str, confirm: &str, token: Option<&str>) -> Result<String, ResetPasswordError> {
    if !PasswordPolicy::evaluate(password).is_met() {
        return Err(ResetPasswordError::WeakPassword);
    }
    if password != confirm {
        return Err(ResetPasswordError::Mismatch);
    }
    token.map(str::to_owned).ok_or(ResetPasswordError::MissingToken)
}
