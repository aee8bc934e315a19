//! Password policy checks shown live on the reset and register forms.
//!
//! The backend must re-validate; these checks only drive inline feedback and
//! block obviously weak submissions.

#[cfg(test)]
#[path = "password_policy_test.rs"]
mod password_policy_test;

pub const MIN_LENGTH: usize = 8;
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Outcome of each independent policy rule for one candidate password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub special_char: bool,
}

impl PasswordPolicy {
    #[must_use]
    pub fn evaluate(candidate: &str) -> Self {
        Self {
            min_length: candidate.chars().count() >= MIN_LENGTH,
            uppercase: candidate.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: candidate.chars().any(|c| c.is_ascii_lowercase()),
            special_char: candidate.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    #[must_use]
    pub fn is_met(self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.special_char
    }

    /// Rule label paired with its result, in display order.
    #[must_use]
    pub fn items(self) -> [(&'static str, bool); 4] {
        [
            ("Pelo menos 8 caracteres", self.min_length),
            ("Uma letra maiúscula", self.uppercase),
            ("Uma letra minúscula", self.lowercase),
            ("Um caractere especial (!@#$...)", self.special_char),
        ]
    }
}
