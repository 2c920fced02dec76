use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use passgenx::{
    DEFAULT_LENGTH, FileStorage, GenerationConfig, HistoryStore, NotificationKind, Notifier,
    Password, Session, SessionError, Storage, SystemClipboard, evaluate,
};
use secrecy::ExposeSecret;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the password history
    #[arg(long, global = true, env = "PASSGENX_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Suppress success messages
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a password and add it to the history
    Generate(GenerateArgs),
    /// Inspect or edit the password history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Print the strength of a password
    Score {
        password: String,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Password length (4-20)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,
    /// Include uppercase letters
    #[arg(short, long)]
    uppercase: bool,
    /// Include numbers
    #[arg(short, long)]
    numbers: bool,
    /// Include symbols
    #[arg(short, long)]
    symbols: bool,
    /// Copy the password to the clipboard
    #[arg(short, long)]
    copy: bool,
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List stored passwords, oldest first
    List,
    /// Delete the entry at INDEX (as shown by `list`)
    Delete { index: usize },
}

/// Prints notifications to stderr.
struct ConsoleNotifier {
    quiet: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success if !self.quiet => eprintln!("{GREEN}{message}{RESET}"),
            NotificationKind::Success => {}
            NotificationKind::Error => eprintln!("{YELLOW}{message}{RESET}"),
        }
    }
}

/// Generates a password and prints it with its strength.
///
/// When only the history write fails the password is still printed, since
/// it is the session's current password and would otherwise be lost.
fn print_generated<S, N, W>(
    session: &mut Session<S, N>,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    S: Storage,
    N: Notifier,
    W: Write,
{
    let result = session.generate().map(|_| ());

    if matches!(result, Ok(()) | Err(SessionError::History(_))) {
        if let Some(password) = session.password() {
            writeln!(out, "{}", password.expose_secret())?;
        }
        if let Some(strength) = session.strength() {
            writeln!(out, "Strength: {}", strength)?;
        }
    }

    result?;
    Ok(())
}

/// Session errors have already gone through the notifier.
fn already_reported(e: &(dyn Error + 'static)) -> bool {
    e.downcast_ref::<SessionError>().is_some()
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let storage = match cli.data_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::from_env(),
    };
    tracing::debug!("Using data directory {:?}", storage.dir());

    match cli.command {
        Command::Generate(args) => {
            let config = GenerationConfig::new(args.length)
                .uppercase(args.uppercase)
                .numbers(args.numbers)
                .symbols(args.symbols);
            let notifier = ConsoleNotifier { quiet: cli.quiet };
            let mut session = Session::new(storage, notifier).with_config(config);

            print_generated(&mut session, &mut std::io::stdout().lock())?;

            if args.copy {
                let mut clipboard = SystemClipboard::new()?;
                session.copy_to_clipboard(&mut clipboard)?;
            }
        }
        Command::History { action } => {
            let mut history = HistoryStore::load(storage);
            match action {
                HistoryAction::List => {
                    if history.is_empty() {
                        println!("(no history)");
                    }
                    for (index, password) in history.entries().iter().enumerate() {
                        println!("{:>3}  {}", index, password.expose_secret());
                    }
                }
                HistoryAction::Delete { index } => {
                    history.remove(index)?;
                    if !cli.quiet {
                        println!("Deleted entry {} ({} left)", index, history.len());
                    }
                }
            }
        }
        Command::Score { password } => {
            let evaluation = evaluate(&Password::new(password));
            println!("Strength: {} ({}/4)", evaluation.label, evaluation.score);
            for reason in &evaluation.reasons {
                println!("  - {}", reason);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "off".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        if !already_reported(e.as_ref()) {
            eprintln!("Error: {}", e);
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
