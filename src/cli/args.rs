use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use showroom_domain::{AccountFilter, DateRange};

use crate::errors::AppError;

/// Running balances and receivable/payable summaries over a showroom dataset.
#[derive(Parser, Debug)]
#[command(name = "showroom_ledger_cli", version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show an account's movements with running balances
    Ledger(LedgerArgs),
    /// Show receivable and payable totals per account
    Summary(SummaryArgs),
    /// List accounts in the dataset
    Accounts(SourceArgs),
    /// Create an empty dataset file
    Init {
        /// Dataset file to create
        #[arg(value_name = "DATASET")]
        path: PathBuf,
    },
}

/// Where the dataset comes from and how results are printed.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Dataset file (defaults to `default_dataset` in config.json)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Inclusive date bounds, formatted YYYY-MM-DD.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RangeArgs {
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,
}

impl RangeArgs {
    pub fn range(&self) -> Result<DateRange, AppError> {
        DateRange::new(self.from, self.to).map_err(|err| AppError::Usage(err.to_string()))
    }
}

#[derive(Args, Debug)]
pub struct LedgerArgs {
    /// Account id or name (case-insensitive)
    #[arg(value_name = "ACCOUNT")]
    pub account: String,

    #[command(flatten)]
    pub range: RangeArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Reject negative amounts
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    pub filter: FilterArg,

    #[command(flatten)]
    pub range: RangeArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Reject negative amounts
    #[arg(long)]
    pub strict: bool,
}

/// Command-line spelling of [`AccountFilter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Registered,
    Unregistered,
}

impl From<FilterArg> for AccountFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => AccountFilter::All,
            FilterArg::Registered => AccountFilter::Registered,
            FilterArg::Unregistered => AccountFilter::Unregistered,
        }
    }
}
