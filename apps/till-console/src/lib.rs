//! # till-console
//!
//! Console front end for the till register.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, to stderr                     │
//! │     • Default: info,till_core=debug,till_console=debug (RUST_LOG)       │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • --config, $TILL_CONFIG or platform config dir                     │
//! │     • TILL_* environment overrides, then validation                     │
//! │                                                                         │
//! │  3. Wire Adapters ────────────────────────────────────────────────────► │
//! │     • InMemoryCatalog, ConsoleDisplay (stderr), ConsolePrinter (stdout) │
//! │     • JournalSalesService, SystemClock                                  │
//! │                                                                         │
//! │  4. Run Session ──────────────────────────────────────────────────────► │
//! │     • stdin commands until quit / end of input                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod command;
pub mod config;
pub mod error;
pub mod session;

use std::io;
use std::path::PathBuf;

use till_core::Register;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adapters::{ConsoleDisplay, ConsolePrinter, InMemoryCatalog, JournalSalesService, SystemClock};
use config::TillConfig;
use error::{AppError, AppResult};
use session::{run_session, SessionSummary};

/// Runs the console register on stdin/stdout.
pub fn run(args: impl IntoIterator<Item = String>) -> AppResult<SessionSummary> {
    init_tracing();

    let config_path = parse_args(args)?;
    let config = TillConfig::load(config_path)?;
    info!(
        register = %config.register.name,
        products = config.products.len(),
        "Starting till console"
    );

    let mut register = build_register(config)?;

    let stdin = io::stdin();
    let summary = run_session(&mut register, stdin.lock(), &mut io::stderr())?;

    info!(
        transactions = summary.transactions,
        rejected = summary.rejected,
        "Session closed"
    );
    Ok(summary)
}

/// Wires the configured adapters into a register.
pub fn build_register(config: TillConfig) -> AppResult<Register> {
    let catalog = InMemoryCatalog::new(config.products)?;

    let journal = match &config.register.journal_path {
        Some(path) => JournalSalesService::open(path, &config.register.name)?,
        None => JournalSalesService::log_only(&config.register.name),
    };

    let register = Register::new(
        SystemClock,
        ConsolePrinter::stdout(),
        ConsoleDisplay::stderr(),
        journal,
        catalog,
    )
    .with_discount_schedule(config.pricing)?;

    Ok(register)
}

/// Reads `--config <path>` from the command line.
fn parse_args(args: impl IntoIterator<Item = String>) -> AppResult<Option<PathBuf>> {
    let mut args = args.into_iter();
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or_else(|| {
                    AppError::InvalidCommand("--config needs a path".to_string())
                })?;
                config_path = Some(PathBuf::from(path));
            }
            other => {
                return Err(AppError::InvalidCommand(format!(
                    "Unknown argument: '{other}'"
                )))
            }
        }
    }

    Ok(config_path)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries nothing but receipt lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,till_core=debug,till_console=debug"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args(&[])).unwrap(), None);
        assert_eq!(
            parse_args(args(&["--config", "till.toml"])).unwrap(),
            Some(PathBuf::from("till.toml"))
        );
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_build_register_uses_configured_schedule() {
        let mut config = TillConfig::default();
        config.pricing.expired_percent = 10;

        let register = build_register(config).unwrap();

        assert!(register.is_empty());
        assert_eq!(register.discount_schedule().expired_percent, 10);
    }

    #[test]
    fn test_build_register_rejects_bad_catalog() {
        let mut config = TillConfig::default();
        config.products[0].description.clear();

        assert!(matches!(
            build_register(config),
            Err(AppError::InvalidConfig(_))
        ));
    }
}
