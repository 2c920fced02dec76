//! Random password generation.

use rand::Rng;
use thiserror::Error;

use crate::charset;
use crate::config::{ConfigViolation, GenerationConfig};
use crate::password::Password;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigViolation),
}

/// Returns the candidate alphabet for `config`.
pub fn alphabet(config: &GenerationConfig) -> Vec<char> {
    charset::build(config.classes())
}

/// Generates a password using the thread-local RNG.
///
/// # Errors
///
/// Returns `InvalidConfig` if the length is outside `[4, 20]` or the
/// alphabet is empty.
pub fn generate(config: &GenerationConfig) -> Result<Password, GenerateError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generates a password drawing from `rng`.
///
/// Each character is picked independently and uniformly from the alphabet,
/// with replacement.
pub fn generate_with_rng<R>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Password, GenerateError>
where
    R: Rng + ?Sized,
{
    if let Err(violation) = config.validate() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Rejected generation: length {} ({})", config.length, violation);
        return Err(violation.into());
    }

    let chars = alphabet(config);
    if chars.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Rejected generation: empty alphabet");
        return Err(ConfigViolation::NoCharactersAvailable.into());
    }

    let value: String = (0..config.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password: {} chars from an alphabet of {}",
        config.length,
        chars.len()
    );

    Ok(Password::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    fn all_configs() -> Vec<GenerationConfig> {
        let mut configs = Vec::new();
        for length in 4..=20 {
            for mask in 0..8u8 {
                configs.push(
                    GenerationConfig::new(length)
                        .uppercase(mask & 1 != 0)
                        .numbers(mask & 2 != 0)
                        .symbols(mask & 4 != 0),
                );
            }
        }
        configs
    }

    #[test]
    fn test_generate_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for config in all_configs() {
            let allowed = alphabet(&config);
            let pwd = generate_with_rng(&config, &mut rng).expect("valid config");
            assert_eq!(pwd.len(), config.length);
            assert!(
                pwd.expose_secret().chars().all(|c| allowed.contains(&c)),
                "Unexpected character for {:?}",
                config
            );
        }
    }

    #[test]
    fn test_generate_lowercase_only() {
        let config = GenerationConfig::new(20);
        let pwd = generate(&config).unwrap();
        assert!(pwd.expose_secret().chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn test_generate_length_out_of_range() {
        for length in [0, 1, 3, 21, 100] {
            let config = GenerationConfig::new(length).uppercase(true);
            assert_eq!(
                generate(&config),
                Err(GenerateError::InvalidConfig(ConfigViolation::LengthOutOfRange))
            );
        }
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let config = GenerationConfig::new(16).numbers(true).symbols(true);
        let a = generate_with_rng(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with_rng(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_alphabet_full() {
        let config = GenerationConfig::new(8)
            .uppercase(true)
            .numbers(true)
            .symbols(true);
        let chars = alphabet(&config);
        assert_eq!(chars.len(), 86);
        let expected: String = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        assert_eq!(chars.iter().collect::<String>(), expected);
    }

    #[test]
    fn test_error_message() {
        let err = GenerateError::from(ConfigViolation::NoCharactersAvailable);
        assert_eq!(err.to_string(), "Invalid configuration: no characters available");
    }
}
