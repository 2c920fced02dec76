//! Password strength scorer - runs the sections and maps points to a label.

use crate::password::Password;
use crate::sections::{
    SectionResult, digit_section, length_section, symbol_section, uppercase_section,
};
use crate::strength::{StrengthEvaluation, StrengthLabel};

/// Evaluates password strength and returns the score, label and reasons.
///
/// Every section is worth one point. The result is a pure function of the
/// password.
pub fn evaluate(password: &Password) -> StrengthEvaluation {
    let mut reasons = Vec::new();
    let mut score: u8 = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&Password) -> SectionResult); 4] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
    ];

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("Scoring section failed: {}", _section_name);
                reasons.push(reason);
            }
            None => score += 1,
        }
    }

    let label = StrengthLabel::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored {}/4 ({})", score, label);

    StrengthEvaluation {
        score,
        label,
        reasons,
    }
}

/// Computes the strength label of a password.
pub fn score(password: &Password) -> StrengthLabel {
    evaluate(password).label
}
