//! Email identity helpers.
//!
//! Identities are compared case-insensitively everywhere, so every email that
//! enters the system goes through [`parse_email`] (validate + normalize) or
//! [`normalize_email`] (normalize only, for values already known to be valid).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Single address, RFC 5322 simplified
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9-]+(?:\.[A-Z0-9-]+)*\.[A-Z]{2,}$"
    )
    .expect("email regex is valid");
}

/// Returned when an address fails basic syntax validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value is not a valid email address: {0}")]
pub struct InvalidEmail(pub String);

/// Normalize an email for comparison and as a map key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate email syntax and return the normalized form
pub fn parse_email(email: &str) -> Result<String, InvalidEmail> {
    let normalized = normalize_email(email);
    if EMAIL_REGEX.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_parse_accepts_common_addresses() {
        assert_eq!(parse_email("a@x.com").unwrap(), "a@x.com");
        assert_eq!(
            parse_email("First.Last+tag@sub.example.org").unwrap(),
            "first.last+tag@sub.example.org"
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "plainaddress", "@example.com", "user@", "user@host", "a b@x.com", "a@x.c"] {
            assert!(parse_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_error_keeps_original_input() {
        let err = parse_email("Not An Email").unwrap_err();
        assert_eq!(err, InvalidEmail("Not An Email".to_string()));
    }
}
