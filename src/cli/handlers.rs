use std::path::PathBuf;

use showroom_core::{find_account, StatementService, SummaryService};
use showroom_domain::{AmountPolicy, Dataset};
use showroom_storage_json::{save_dataset_to_path, JsonLedgerSource};

use crate::errors::AppError;

use super::args::{LedgerArgs, SourceArgs, SummaryArgs};
use super::output::{format_message, MessageKind};
use super::{views, CliContext};

pub(crate) fn cmd_ledger(context: &mut CliContext<'_>, args: LedgerArgs) -> Result<(), AppError> {
    let range = args.range.range()?;
    let source = open_source(context, &args.source)?;
    let account = find_account(&source, &args.account)?;
    let policy = policy(context, args.strict);
    let statement = StatementService::account_statement(&source, account.id, range, policy)?;

    if args.source.json {
        return context.print(serde_json::to_string_pretty(&statement)?);
    }
    let rendered = views::statement_view(&statement, &context.money);
    context.print(rendered)
}

pub(crate) fn cmd_summary(context: &mut CliContext<'_>, args: SummaryArgs) -> Result<(), AppError> {
    let range = args.range.range()?;
    let source = open_source(context, &args.source)?;
    let policy = policy(context, args.strict);
    let report = SummaryService::summary_report(&source, args.filter.into(), range, policy)?;

    if args.source.json {
        return context.print(serde_json::to_string_pretty(&report)?);
    }
    let rendered = views::summary_view(&report, &context.money);
    context.print(rendered)
}

pub(crate) fn cmd_accounts(context: &mut CliContext<'_>, args: SourceArgs) -> Result<(), AppError> {
    let source = open_source(context, &args)?;
    let accounts = &source.dataset().accounts;

    if args.json {
        return context.print(serde_json::to_string_pretty(accounts)?);
    }
    let rendered = views::accounts_view(accounts);
    context.print(rendered)
}

pub(crate) fn cmd_init(context: &mut CliContext<'_>, path: PathBuf) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::Usage(format!(
            "refusing to overwrite existing file {}",
            path.display()
        )));
    }
    save_dataset_to_path(&Dataset::new(), &path)?;
    tracing::info!(path = %path.display(), "created empty dataset");
    context.print(format_message(
        MessageKind::Success,
        format!("Created {}", path.display()),
    ))
}

fn open_source(context: &CliContext<'_>, args: &SourceArgs) -> Result<JsonLedgerSource, AppError> {
    let path = args
        .data
        .clone()
        .or_else(|| context.config.default_dataset.clone())
        .ok_or_else(|| {
            AppError::Usage(
                "no dataset given: pass --data PATH or set default_dataset in config.json".into(),
            )
        })?;
    Ok(JsonLedgerSource::open(&path)?)
}

fn policy(context: &CliContext<'_>, strict: bool) -> AmountPolicy {
    if strict {
        AmountPolicy::Strict
    } else {
        context.config.amount_policy
    }
}
