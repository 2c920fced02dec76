//! Character variety sections - uppercase, digits, symbols.
//!
//! Only ASCII ranges count: a symbol is anything outside `A-Z`, `a-z`
//! and `0-9`.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::password::Password;

pub fn uppercase_section(password: &Password) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Missing: uppercase".to_string());
    }
    None
}

pub fn digit_section(password: &Password) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Missing: numbers".to_string());
    }
    None
}

pub fn symbol_section(password: &Password) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
    {
        return Some("Missing: special characters".to_string());
    }
    None
}
