use super::*;

#[test]
fn token_from_query_drops_blank_values() {
    assert_eq!(token_from_query(Some("abc".to_owned())), Some("abc".to_owned()));
    assert_eq!(token_from_query(Some("  ".to_owned())), None);
    assert_eq!(token_from_query(None), None);
}

#[test]
fn valid_submission_returns_token() {
    assert_eq!(validate_reset("Selo@2024", "Selo@2024", Some("tok")), Ok("tok".to_owned()));
}

#[test]
fn weak_password_wins_over_other_failures() {
    assert_eq!(validate_reset("weak", "other", None), Err(ResetPasswordError::WeakPassword));
}

#[test]
fn mismatch_wins_over_missing_token() {
    assert_eq!(validate_reset("Selo@2024", "Selo@2025", None), Err(ResetPasswordError::Mismatch));
}

#[test]
fn missing_token_is_reported_last() {
    assert_eq!(validate_reset("Selo@2024", "Selo@2024", None), Err(ResetPasswordError::MissingToken));
}

#[test]
fn error_messages_render_inline_text() {
    assert_eq!(ResetPasswordError::Mismatch.to_string(), "As senhas não coincidem.");
    assert_eq!(
        ResetPasswordError::WeakPassword.to_string(),
        "A senha não atende a todos os critérios de segurança."
    );
}
