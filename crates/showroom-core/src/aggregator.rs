//! Receivable/payable aggregation across accounts.

use std::collections::HashMap;

use showroom_domain::{
    Account, AccountFilter, AccountSummary, Money, Movement, MovementKind, Receipt,
};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    receivable: Money,
    payable: Money,
}

/// Builds one summary row per active account in the filtered universe.
///
/// Debits count as receivable; credits and receipts count as payable. Records
/// posted against accounts outside the universe are ignored, and accounts
/// with no receivable and no payable are left out. Rows keep the order of
/// `accounts`; a repeated account id is reported once.
pub fn aggregate(
    accounts: &[Account],
    movements: &[Movement],
    receipts: &[Receipt],
    filter: AccountFilter,
) -> Vec<AccountSummary> {
    let universe: Vec<&Account> = accounts
        .iter()
        .filter(|account| filter.matches(account))
        .collect();

    let mut tallies: HashMap<Uuid, Tally> = universe
        .iter()
        .map(|account| (account.id, Tally::default()))
        .collect();

    for movement in movements {
        if let Some(tally) = tallies.get_mut(&movement.account_id) {
            match movement.kind {
                MovementKind::Debit => tally.receivable += movement.amount,
                MovementKind::Credit => tally.payable += movement.amount,
            }
        }
    }

    for receipt in receipts {
        if let Some(tally) = tallies.get_mut(&receipt.account_id) {
            tally.payable += receipt.amount;
        }
    }

    universe
        .into_iter()
        .filter_map(|account| {
            // Removing the tally reports each account id once.
            let tally = tallies.remove(&account.id)?;
            let row = AccountSummary::new(
                account.id,
                account.name.clone(),
                tally.receivable,
                tally.payable,
            );
            row.has_activity().then_some(row)
        })
        .collect()
}
