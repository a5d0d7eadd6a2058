use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::FormState;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
    #[error("Your message must be at least 10 characters long.")]
    MessageTooShort,
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks the form in a fixed order and reports the first problem found.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidEmail);
    }
    let message = form.message.trim();
    if message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FormState {
        FormState {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_blank_name_wins_over_everything() {
        for name in ["", " ", "\t\n  "] {
            assert_eq!(
                validate(&form(name, "", "")),
                Err(ValidationError::MissingName)
            );
            assert_eq!(
                validate(&form(name, "jane@example.com", "a long enough message")),
                Err(ValidationError::MissingName)
            );
        }
    }

    #[test]
    fn test_missing_email_before_shape() {
        assert_eq!(
            validate(&form("Jane", "   ", "a long enough message")),
            Err(ValidationError::MissingEmail)
        );
    }

    #[test]
    fn test_malformed_emails() {
        for email in [
            "foo@bar",
            "no-at-sign.com",
            "@missing-local.com",
            "two@@example.com",
            "jane doe@example.com",
        ] {
            assert_eq!(
                validate(&form("Jane", email, "a long enough message")),
                Err(ValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_checked_after_trim() {
        assert_eq!(
            validate(&form("Jane", "  jane@example.com ", "a long enough message")),
            Ok(())
        );
    }

    #[test]
    fn test_email_check_before_message() {
        assert_eq!(
            validate(&form("Jane", "nope", "")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(
            validate(&form("Jane", "jane@example.com", "  \n ")),
            Err(ValidationError::MissingMessage)
        );
        assert_eq!(
            validate(&form("Jane", "jane@example.com", "short")),
            Err(ValidationError::MessageTooShort)
        );
        assert_eq!(
            validate(&form("Jane", "jane@example.com", "   123456789   ")),
            Err(ValidationError::MessageTooShort)
        );
        assert_eq!(validate(&form("Jane", "jane@example.com", "1234567890")), Ok(()));
    }

    #[test]
    fn test_message_length_counts_chars() {
        // 10 characters, 20 bytes
        assert_eq!(validate(&form("Jane", "jane@example.com", "éééééééééé")), Ok(()));
        assert_eq!(
            validate(&form("Jane", "jane@example.com", "ééééééééé")),
            Err(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_subject_is_optional() {
        let mut f = form("Jane", "jane@example.com", "Interested in collaborating");
        assert!(f.subject.is_empty());
        assert_eq!(validate(&f), Ok(()));
        f.subject = "Hi".to_string();
        assert_eq!(validate(&f), Ok(()));
    }

    #[test]
    fn test_reasons_have_distinct_messages() {
        let reasons = [
            ValidationError::MissingName,
            ValidationError::MissingEmail,
            ValidationError::InvalidEmail,
            ValidationError::MissingMessage,
            ValidationError::MessageTooShort,
        ];
        let messages: std::collections::HashSet<String> =
            reasons.iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), reasons.len());
    }
}
