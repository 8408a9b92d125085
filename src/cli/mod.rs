//! Command-line front end over JSON datasets.

pub mod args;
mod handlers;
pub mod output;
pub mod table;
pub mod views;

use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::Parser;
use showroom_config::{Config, ConfigManager};

use crate::currency::MoneyFormat;
use crate::errors::AppError;

pub use self::args::{Cli, Command};
use self::output::OutputPreferences;

const BIN_NAME: &str = "showroom_ledger_cli";

/// State shared by every command invocation.
pub struct CliContext<'a> {
    pub config: Config,
    pub money: MoneyFormat,
    pub out: &'a mut dyn Write,
}

impl CliContext<'_> {
    pub(crate) fn print(&mut self, text: impl AsRef<str>) -> Result<(), AppError> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }
}

/// Entry point used by the binary: reads process arguments and the on-disk config.
pub fn run_cli() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ConfigManager::from_env()?.load()?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    run_with(&args, config, &mut lock)
}

/// Parses `args` (without the program name) and runs the command against
/// `config`, writing command output to `out`.
///
/// Help and version requests are written to `out` and succeed.
pub fn run_with(args: &[String], config: Config, out: &mut dyn Write) -> Result<(), AppError> {
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled,
    });

    let argv = std::iter::once(BIN_NAME).chain(args.iter().map(String::as_str));
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                write!(out, "{}", err.render())?;
                return Ok(());
            }
            _ => return Err(AppError::Cli(err)),
        },
    };

    let mut context = CliContext {
        money: MoneyFormat::from_config(&config),
        config,
        out,
    };
    tracing::debug!(command = ?cli.command, "dispatching command");
    match cli.command {
        Command::Ledger(args) => handlers::cmd_ledger(&mut context, args),
        Command::Summary(args) => handlers::cmd_summary(&mut context, args),
        Command::Accounts(args) => handlers::cmd_accounts(&mut context, args),
        Command::Init { path } => handlers::cmd_init(&mut context, path),
    }
}
