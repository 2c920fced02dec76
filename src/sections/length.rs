//! Length section - checks password minimum length.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::password::Password;

const MIN_LENGTH: usize = 8;

/// Checks if the password has at least 8 characters.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &Password) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = Password::from("Short1!");
        assert_eq!(
            length_section(&pwd),
            Some("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = Password::from("12345678");
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        let pwd = Password::from("ééééééé");
        assert!(length_section(&pwd).is_some());
    }
}
