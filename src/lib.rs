//! Password generation library
//!
//! This library generates random passwords from configurable character
//! classes, scores their strength, and keeps a persisted history of
//! generated passwords.
//!
//! # Features
//!
//! - `tracing` (default): Enables logging via tracing crate
//! - `clipboard`: Enables [`SystemClipboard`] via copypasta
//! - `cli`: Builds the `passgenx` command line tool
//!
//! # Environment Variables
//!
//! - `PASSGENX_DATA_DIR`: Directory used by [`FileStorage::from_env`]
//!   (default: the platform local data directory + `passgenx`)
//!
//! # Example
//!
//! ```rust
//! use passgenx::{GenerationConfig, MemoryStorage, NoopNotifier, Session, StrengthLabel};
//! use secrecy::ExposeSecret;
//!
//! let mut session = Session::new(MemoryStorage::new(), NoopNotifier)
//!     .with_config(GenerationConfig::new(12).uppercase(true).numbers(true));
//!
//! let password = session.generate().expect("valid options");
//! assert_eq!(password.expose_secret().chars().count(), 12);
//! assert_eq!(session.history().len(), 1);
//!
//! assert_eq!(passgenx::score(&"Ab1!efgh".into()), StrengthLabel::VeryStrong);
//! ```

// Internal modules
mod charset;
mod clipboard;
mod config;
mod evaluator;
mod generator;
mod history;
mod notify;
mod password;
mod sections;
mod session;
mod storage;
mod strength;

// Public API
pub use charset::{CharacterClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::{ConfigViolation, DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH};
pub use evaluator::{evaluate, score};
pub use generator::{GenerateError, alphabet, generate, generate_with_rng};
pub use history::{HISTORY_KEY, HistoryError, HistoryStore};
pub use notify::{NoopNotifier, NotificationKind, Notifier};
pub use password::Password;
pub use session::{Session, SessionError};
pub use storage::{DATA_DIR_ENV, FileStorage, MemoryStorage, Storage, StorageError, get_data_dir};
pub use strength::{StrengthEvaluation, StrengthLabel};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;

#[cfg(feature = "tracing")]
pub use notify::TracingNotifier;
