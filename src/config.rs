//! Generation options.

use thiserror::Error;

use crate::charset::CharacterClass;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_LENGTH: usize = 5;

/// A constraint broken by a [`GenerationConfig`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("length out of range")]
    LengthOutOfRange,
    #[error("no characters available")]
    NoCharactersAvailable,
}

/// Options for a single password generation.
///
/// Lowercase letters are always part of the alphabet; the three flags add
/// the other character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn uppercase(mut self, enabled: bool) -> Self {
        self.include_uppercase = enabled;
        self
    }

    pub fn numbers(mut self, enabled: bool) -> Self {
        self.include_numbers = enabled;
        self
    }

    pub fn symbols(mut self, enabled: bool) -> Self {
        self.include_symbols = enabled;
        self
    }

    /// Enabled character classes, lowercase first.
    pub fn classes(&self) -> Vec<CharacterClass> {
        let mut classes = vec![CharacterClass::Lowercase];
        if self.include_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_numbers {
            classes.push(CharacterClass::Digit);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbol);
        }
        classes
    }

    /// Checks the length bound.
    pub fn validate(&self) -> Result<(), ConfigViolation> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ConfigViolation::LengthOutOfRange);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 5);
        assert_eq!(config.classes(), vec![CharacterClass::Lowercase]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_classes_order() {
        let config = GenerationConfig::new(10).symbols(true).uppercase(true);
        assert_eq!(
            config.classes(),
            vec![
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Symbol
            ]
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(GenerationConfig::new(4).validate(), Ok(()));
        assert_eq!(GenerationConfig::new(20).validate(), Ok(()));
        assert_eq!(
            GenerationConfig::new(3).validate(),
            Err(ConfigViolation::LengthOutOfRange)
        );
        assert_eq!(
            GenerationConfig::new(21).validate(),
            Err(ConfigViolation::LengthOutOfRange)
        );
        assert_eq!(
            GenerationConfig::new(0).validate(),
            Err(ConfigViolation::LengthOutOfRange)
        );
    }
}
