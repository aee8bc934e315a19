use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

// =============================================================
// AuthTab
// =============================================================

#[test]
fn tab_query_selects_register_only_for_exact_value() {
    assert_eq!(AuthTab::from_query(Some("register")), AuthTab::Register);
    assert_eq!(AuthTab::from_query(Some("login")), AuthTab::Login);
    assert_eq!(AuthTab::from_query(Some("REGISTER")), AuthTab::Login);
    assert_eq!(AuthTab::from_query(None), AuthTab::Login);
}

// =============================================================
// Login input
// =============================================================

#[test]
fn login_input_trims_email_but_not_password() {
    assert_eq!(
        validate_login_input("  admin@fiea.org.br ", " Selo@2024"),
        Ok(("admin@fiea.org.br".to_owned(), " Selo@2024".to_owned()))
    );
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "x"), Err(AuthError::MissingCredentials));
    assert_eq!(validate_login_input("a@b.com", ""), Err(AuthError::MissingCredentials));
}

// =============================================================
// Register input
// =============================================================

#[test]
fn register_input_checks_fields_in_order() {
    assert_eq!(validate_register_input("", "bad", "weak"), Err(AuthError::MissingCompany));
    assert_eq!(validate_register_input("Gama", "bad", "weak"), Err(AuthError::InvalidEmail));
    assert_eq!(validate_register_input("Gama", "a@gama.com", "weak"), Err(AuthError::WeakPassword));
}

#[test]
fn register_input_accepts_valid_values() {
    assert_eq!(
        validate_register_input(" Gama ", " a@gama.com ", "Gama@2024"),
        Ok(("Gama".to_owned(), "a@gama.com".to_owned()))
    );
}

// =============================================================
// Admin sign-up input
// =============================================================

#[test]
fn admin_input_requires_name_first() {
    assert_eq!(validate_admin_input("  ", "bad", "x", "y"), Err(AuthError::MissingName));
}

#[test]
fn admin_input_applies_register_rules() {
    assert_eq!(validate_admin_input("Ana", "ana", "Forte@123", "Forte@123"), Err(AuthError::InvalidEmail));
    assert_eq!(validate_admin_input("Ana", "ana@fiea.org.br", "fraca", "fraca"), Err(AuthError::WeakPassword));
}

#[test]
fn admin_input_policy_failure_wins_over_mismatch() {
    assert_eq!(validate_admin_input("Ana", "ana@fiea.org.br", "fraca", "outra"), Err(AuthError::WeakPassword));
}

#[test]
fn admin_input_requires_matching_confirmation() {
    assert_eq!(
        validate_admin_input("Ana", "ana@fiea.org.br", "Forte@123", "Forte@124"),
        Err(AuthError::Mismatch)
    );
}

#[test]
fn admin_input_trims_name_and_email() {
    assert_eq!(
        validate_admin_input(" Ana Lima ", " ana@fiea.org.br ", "Forte@123", "Forte@123"),
        Ok(("Ana Lima".to_owned(), "ana@fiea.org.br".to_owned()))
    );
}
