//! Generator session: composes generation, scoring, history and notifications.

use rand::Rng;
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::{ConfigViolation, GenerationConfig};
use crate::evaluator;
use crate::generator::{self, GenerateError};
use crate::history::{HistoryError, HistoryStore};
use crate::notify::{NotificationKind, Notifier};
use crate::password::Password;
use crate::storage::Storage;
use crate::strength::StrengthLabel;

pub const MSG_INVALID_LENGTH: &str = "Password length must be between 4 and 20 characters.";
pub const MSG_NO_OPTIONS: &str = "Please select at least one character type.";
pub const MSG_GENERATED: &str = "Your new password has been successfully generated.";
pub const MSG_NO_PASSWORD: &str = "Please generate a password first!";
pub const MSG_COPIED: &str = "Password copied to clipboard!";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("No password has been generated yet")]
    NoPasswordAvailable,
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// State of one generator session: the current options, the last generated
/// password and its strength, and the persisted history.
pub struct Session<S: Storage, N: Notifier> {
    config: GenerationConfig,
    current: Option<Password>,
    strength: Option<StrengthLabel>,
    history: HistoryStore<S>,
    notifier: N,
}

impl<S: Storage, N: Notifier> Session<S, N> {
    /// Starts a session with the default options, loading history from `storage`.
    pub fn new(storage: S, notifier: N) -> Self {
        Self::with_history(HistoryStore::load(storage), notifier)
    }

    pub fn with_history(history: HistoryStore<S>, notifier: N) -> Self {
        Self {
            config: GenerationConfig::default(),
            current: None,
            strength: None,
            history,
            notifier,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GenerationConfig {
        &mut self.config
    }

    /// The last generated password, if any.
    pub fn password(&self) -> Option<&Password> {
        self.current.as_ref()
    }

    pub fn strength(&self) -> Option<StrengthLabel> {
        self.strength
    }

    pub fn history(&self) -> &[Password] {
        self.history.entries()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (HistoryStore<S>, N) {
        (self.history, self.notifier)
    }

    /// Generates a password with the thread-local RNG.
    pub fn generate(&mut self) -> Result<&Password, SessionError> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generates a password, scores it and appends it to the history.
    ///
    /// Invalid options are reported through the notifier and leave the
    /// session untouched. If the history cannot be persisted the new
    /// password is still current and kept in memory.
    pub fn generate_with_rng<R>(&mut self, rng: &mut R) -> Result<&Password, SessionError>
    where
        R: Rng + ?Sized,
    {
        let password = match generator::generate_with_rng(&self.config, rng) {
            Ok(password) => password,
            Err(GenerateError::InvalidConfig(violation)) => {
                let message = match violation {
                    ConfigViolation::LengthOutOfRange => MSG_INVALID_LENGTH,
                    ConfigViolation::NoCharactersAvailable => MSG_NO_OPTIONS,
                };
                self.notifier.notify(NotificationKind::Error, message);
                return Err(GenerateError::InvalidConfig(violation).into());
            }
        };

        self.strength = Some(evaluator::score(&password));
        let entry = password.clone();
        let current = self.current.insert(password);

        if let Err(e) = self.history.append(entry) {
            self.notifier
                .notify(NotificationKind::Error, &format!("Failed to save history: {}", e));
            return Err(e.into());
        }

        self.notifier.notify(NotificationKind::Success, MSG_GENERATED);
        Ok(&*current)
    }

    /// Copies the current password to `clipboard`.
    ///
    /// # Errors
    ///
    /// `NoPasswordAvailable` if nothing has been generated yet.
    pub fn copy_to_clipboard<C>(&mut self, clipboard: &mut C) -> Result<(), SessionError>
    where
        C: Clipboard + ?Sized,
    {
        let Some(password) = self.current.as_ref() else {
            self.notifier.notify(NotificationKind::Error, MSG_NO_PASSWORD);
            return Err(SessionError::NoPasswordAvailable);
        };

        if let Err(e) = clipboard.set_text(password.expose_secret()) {
            self.notifier.notify(NotificationKind::Error, &e.to_string());
            return Err(e.into());
        }

        self.notifier.notify(NotificationKind::Success, MSG_COPIED);
        Ok(())
    }

    /// Deletes the history entry at `index`.
    ///
    /// A stale index is returned as `IndexOutOfRange` without touching storage.
    pub fn delete_history(&mut self, index: usize) -> Result<&[Password], SessionError> {
        Ok(self.history.remove(index)?)
    }
}
