use super::*;

// =============================================================
// Length boundary
// =============================================================

#[test]
fn exactly_eight_chars_passes_length() {
    assert!(PasswordPolicy::evaluate("abcdefgh").min_length);
}

#[test]
fn seven_chars_fails_length() {
    assert!(!PasswordPolicy::evaluate("abcdefg").min_length);
}

#[test]
fn length_counts_characters_not_bytes() {
    // 7 chars, 8+ bytes
    assert!(!PasswordPolicy::evaluate("çãéíóúâ").min_length);
    assert!(PasswordPolicy::evaluate("çãéíóúâô").min_length);
}

// =============================================================
// Independent rules
// =============================================================

#[test]
fn each_rule_evaluates_independently() {
    assert_eq!(
        PasswordPolicy::evaluate("A"),
        PasswordPolicy { min_length: false, uppercase: true, lowercase: false, special_char: false }
    );
    assert_eq!(
        PasswordPolicy::evaluate("a"),
        PasswordPolicy { min_length: false, uppercase: false, lowercase: true, special_char: false }
    );
    assert_eq!(
        PasswordPolicy::evaluate("?"),
        PasswordPolicy { min_length: false, uppercase: false, lowercase: false, special_char: true }
    );
    assert_eq!(
        PasswordPolicy::evaluate("12345678"),
        PasswordPolicy { min_length: true, uppercase: false, lowercase: false, special_char: false }
    );
}

#[test]
fn empty_password_meets_nothing() {
    assert_eq!(PasswordPolicy::evaluate(""), PasswordPolicy::default());
}

#[test]
fn non_ascii_letters_do_not_count_as_cases() {
    let policy = PasswordPolicy::evaluate("ÇÃÉ çãé");
    assert!(!policy.uppercase);
    assert!(!policy.lowercase);
}

#[test]
fn every_listed_special_char_is_recognized() {
    for c in SPECIAL_CHARS.chars() {
        assert!(PasswordPolicy::evaluate(&c.to_string()).special_char, "expected {c:?} to count");
    }
}

#[test]
fn unlisted_symbols_are_not_special() {
    for candidate in ["-", "_", "+", "=", "~", "[", "]", " "] {
        assert!(!PasswordPolicy::evaluate(candidate).special_char, "{candidate:?} should not count");
    }
}

// =============================================================
// Aggregate
// =============================================================

#[test]
fn strong_password_meets_policy() {
    assert!(PasswordPolicy::evaluate("Selo@2024").is_met());
}

#[test]
fn missing_any_rule_fails_policy() {
    assert!(!PasswordPolicy::evaluate("selo@2024").is_met());
    assert!(!PasswordPolicy::evaluate("SELO@2024").is_met());
    assert!(!PasswordPolicy::evaluate("Selo2024x").is_met());
    assert!(!PasswordPolicy::evaluate("Se@2024").is_met());
}

#[test]
fn items_follow_display_order() {
    let items = PasswordPolicy::evaluate("abcdefgh").items();
    assert_eq!(items[0], ("Pelo menos 8 caracteres", true));
    assert!(!items[1].1);
    assert!(items[2].1);
    assert!(!items[3].1);
}
