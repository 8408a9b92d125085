//! Plain-text renderings of statements, summaries and account lists.

use showroom_domain::{
    Account, AccountStatement, BalanceSide, Money, MovementKind, SummaryReport,
};

use crate::currency::MoneyFormat;

use super::output::{format_message, paint_balance, MessageKind};
use super::table::{Table, TableColumn};

const PARTICULARS_WIDTH: usize = 36;

fn painted_balance(money: &MoneyFormat, value: Money) -> String {
    paint_balance(&money.balance(value), BalanceSide::of(value))
}

pub fn statement_view(statement: &AccountStatement, money: &MoneyFormat) -> String {
    let title = format!("Ledger: {} ({})", statement.account.name, statement.range);
    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Particulars").max_width(PARTICULARS_WIDTH),
        TableColumn::right("Debit"),
        TableColumn::right("Credit"),
        TableColumn::right("Balance"),
    ]);

    for entry in &statement.entries {
        let movement = &entry.movement;
        let amount = money.amount(movement.amount);
        let (debit, credit) = match movement.kind {
            MovementKind::Debit => (amount, String::new()),
            MovementKind::Credit => (String::new(), amount),
        };
        table.add_row(vec![
            movement.date.format("%Y-%m-%d").to_string(),
            movement.narration.clone().unwrap_or_default(),
            debit,
            credit,
            painted_balance(money, entry.balance),
        ]);
    }
    table.add_footer(vec![
        "Closing".into(),
        String::new(),
        money.amount(statement.total_debit),
        money.amount(statement.total_credit),
        painted_balance(money, statement.closing_balance),
    ]);

    let mut lines = vec![format_message(MessageKind::Section, title)];
    if statement.entries.is_empty() {
        lines.push("No movements in range.".into());
    }
    lines.push(table.render());
    lines.join("\n")
}

pub fn summary_view(report: &SummaryReport, money: &MoneyFormat) -> String {
    let title = format!("Summary: {} accounts ({})", report.filter, report.range);
    let mut table = Table::new(vec![
        TableColumn::left("Account").max_width(PARTICULARS_WIDTH),
        TableColumn::right("Receivable"),
        TableColumn::right("Payable"),
        TableColumn::right("Net"),
    ]);

    for row in &report.rows {
        table.add_row(vec![
            row.account_name.clone(),
            money.amount(row.receivable_amount),
            money.amount(row.payable_amount),
            painted_balance(money, row.net_balance),
        ]);
    }
    table.add_footer(vec![
        "Total".into(),
        money.amount(report.totals.total_receivable),
        money.amount(report.totals.total_payable),
        painted_balance(money, report.totals.grand_total),
    ]);

    let mut lines = vec![format_message(MessageKind::Section, title)];
    if report.is_empty() {
        lines.push("No account activity in range.".into());
    }
    lines.push(table.render());
    lines.join("\n")
}

pub fn accounts_view(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts in dataset.".into();
    }
    let mut table = Table::new(vec![
        TableColumn::left("Name").max_width(PARTICULARS_WIDTH),
        TableColumn::left("Tax ID"),
        TableColumn::left("ID"),
    ]);
    for account in accounts {
        table.add_row(vec![
            account.name.clone(),
            account.tax_id.clone().unwrap_or_else(|| "-".into()),
            account.id.to_string(),
        ]);
    }
    table.render()
}
