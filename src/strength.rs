//! Strength labels and evaluation results.

use std::fmt;

/// Coarse categorical strength of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a point score to a label.
    ///
    /// Only 1 through 4 have their own label; every other value,
    /// including 0, falls through to `VeryWeak`.
    pub fn from_score(score: u8) -> Self {
        match score {
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Moderate,
            3 => StrengthLabel::Strong,
            4 => StrengthLabel::VeryStrong,
            _ => StrengthLabel::VeryWeak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running every scoring section over a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    /// Number of sections passed, in `[0, 4]`.
    pub score: u8,
    pub label: StrengthLabel,
    /// One entry per failed section.
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_mapping() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_display() {
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }
}
