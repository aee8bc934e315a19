#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::types::Role;

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_accepts_known_account() {
    let user = login("admin@fiea.org.br", "Selo@2024").await.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, "Administrador FIEA");
}

#[tokio::test]
async fn login_failure_message_is_generic() {
    let wrong_password = login("admin@fiea.org.br", "nope").await.unwrap_err();
    let unknown_email = login("ghost@fiea.org.br", "Selo@2024").await.unwrap_err();
    assert_eq!(wrong_password, INVALID_CREDENTIALS);
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn register_rejects_existing_email() {
    assert!(register("Alfa", "GESTOR@alfametais.com.br").await.is_err());
    assert!(register("Gama", "contato@gama.com.br").await.is_ok());
}

#[tokio::test]
async fn register_admin_rejects_existing_email() {
    assert!(register_admin("Outro Admin", "Admin@FIEA.org.br").await.is_err());
    assert!(register_admin("Ana Lima", "ana@fiea.org.br").await.is_ok());
}

#[tokio::test]
async fn password_reset_request_is_neutral() {
    assert_eq!(request_password_reset("ghost@fiea.org.br").await, Ok(RESET_LINK_SENT));
}

#[tokio::test]
async fn reset_password_requires_token() {
    assert!(reset_password("  ", "Selo@2024").await.is_err());
    assert!(reset_password("abc123", "Selo@2024").await.is_ok());
}

// =============================================================
// Fetches
// =============================================================

#[tokio::test]
async fn fetches_return_fixtures() {
    assert_eq!(fetch_badges().await, mock::badges());
    assert_eq!(fetch_criteria().await, mock::criteria());
    assert_eq!(fetch_companies().await, mock::companies());
    assert_eq!(fetch_issued_badges().await.len(), 2);
    assert_eq!(fetch_assessments().await.len(), 2);
    assert_eq!(fetch_audits().await.len(), 3);
}

#[tokio::test]
async fn fetch_profiles_strips_credentials() {
    let profiles = fetch_profiles().await;
    assert_eq!(profiles.len(), mock::ACCOUNTS.len());
    assert_eq!(profiles[0].email, "admin@fiea.org.br");
    assert_eq!(profiles[0].role, Role::Admin);
    assert_eq!(profiles[1].role, Role::Manager);
}
