//! Simulated backend calls for the portal.
//!
//! Client-side (hydrate): fixed-delay timers stand in for network latency.
//! Server-side (SSR) and tests: calls resolve immediately.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so pages can render the message inline.
//! Nothing here retries; a failed call is shown once and left to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::mock;
use super::types::{Audit, Badge, Company, Criterion, DigitalBadge, SelfAssessment, User};

pub const SIMULATED_LATENCY_MS: u32 = 1000;

/// Shown for every failed login so the response never reveals which field was wrong.
pub const INVALID_CREDENTIALS: &str = "E-mail ou senha inválidos. Verifique seus dados e tente novamente.";

/// Shown after a reset-link request regardless of whether the email exists.
pub const RESET_LINK_SENT: &str =
    "Se o e-mail estiver cadastrado, você receberá um link para redefinir sua senha.";

async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    }
}

/// Authenticate with email + password.
///
/// # Errors
///
/// Returns [`INVALID_CREDENTIALS`] when no account matches.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    log::info!("login attempt for {email}");
    simulate_latency().await;
    mock::find_account(email, password)
        .map(|account| User { email: account.email.to_owned(), name: account.name.to_owned(), role: account.role })
        .ok_or_else(|| INVALID_CREDENTIALS.to_owned())
}

/// Register a new industry account.
///
/// # Errors
///
/// Returns an error string when the email is already taken.
pub async fn register(company_name: &str, email: &str) -> Result<(), String> {
    log::info!("register request for {company_name} <{email}>");
    simulate_latency().await;
    ensure_email_free(email)
}

/// Register a new FIEA administrator.
///
/// # Errors
///
/// Returns an error string when the email is already taken.
pub async fn register_admin(name: &str, email: &str) -> Result<(), String> {
    log::info!("admin register request for {name} <{email}>");
    simulate_latency().await;
    ensure_email_free(email)
}

fn ensure_email_free(email: &str) -> Result<(), String> {
    if mock::ACCOUNTS.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
        return Err("Este e-mail já está cadastrado.".to_owned());
    }
    Ok(())
}

/// Ask for a password-reset link to be emailed.
///
/// # Errors
///
/// Never fails; the signature matches the other simulated calls.
pub async fn request_password_reset(email: &str) -> Result<&'static str, String> {
    log::info!("password reset link requested for {email}");
    simulate_latency().await;
    Ok(RESET_LINK_SENT)
}

/// Set a new password using the emailed reset token.
///
/// # Errors
///
/// Returns an error string when the token is blank.
pub async fn reset_password(token: &str, password: &str) -> Result<(), String> {
    let _ = password;
    if token.trim().is_empty() {
        return Err("Token inválido.".to_owned());
    }
    log::info!("resetting password with token {token}");
    simulate_latency().await;
    Ok(())
}

pub async fn fetch_badges() -> Vec<Badge> {
    mock::badges()
}

pub async fn fetch_criteria() -> Vec<Criterion> {
    mock::criteria()
}

pub async fn fetch_companies() -> Vec<Company> {
    mock::companies()
}

pub async fn fetch_issued_badges() -> Vec<DigitalBadge> {
    mock::issued_badges()
}

pub async fn fetch_assessments() -> Vec<SelfAssessment> {
    mock::assessments()
}

pub async fn fetch_audits() -> Vec<Audit> {
    mock::audits()
}

/// Portal users without their credentials.
pub async fn fetch_profiles() -> Vec<User> {
    mock::ACCOUNTS
        .iter()
        .map(|a| User { email: a.email.to_owned(), name: a.name.to_owned(), role: a.role })
        .collect()
}

/// Log the payload a save would send for `resource`.
pub fn record_save<T: Serialize>(resource: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(body) => log::info!("save {resource}: {body}"),
        Err(e) => log::warn!("save {resource}: unserializable payload: {e}"),
    }
}

/// Log the delete that would be sent for `resource`.
pub fn record_delete(resource: &str, id: u32) {
    log::info!("delete {resource}/{id}");
}
