//! Per-account ledger statements with running balances.

use showroom_domain::{AccountStatement, AmountPolicy, DateRange, MovementKind};
use uuid::Uuid;

use crate::{
    closing_balance, order_movements, project, total_of_kind, validate_amounts, CoreError,
    LedgerSource, MovementQuery,
};

/// Builds [`AccountStatement`]s from a [`LedgerSource`].
pub struct StatementService;

impl StatementService {
    /// Fetches, validates, orders and projects one account's movements in `range`.
    pub fn account_statement(
        source: &dyn LedgerSource,
        account_id: Uuid,
        range: DateRange,
        policy: AmountPolicy,
    ) -> Result<AccountStatement, CoreError> {
        let account = source.account(account_id)?;
        let query = MovementQuery::for_account(account_id).within(range);
        let mut movements = source.movements(&query)?;
        // Sources are allowed to over-fetch.
        movements.retain(|movement| query.matches(movement));

        validate_amounts(policy, &movements, &[])?;
        order_movements(&mut movements);

        let entries = project(&movements);
        let statement = AccountStatement {
            closing_balance: closing_balance(&entries),
            total_debit: total_of_kind(&movements, MovementKind::Debit),
            total_credit: total_of_kind(&movements, MovementKind::Credit),
            account,
            range,
            entries,
        };
        tracing::debug!(
            account = %statement.account.name,
            entries = statement.entries.len(),
            closing = %statement.closing_balance,
            "projected account statement"
        );
        Ok(statement)
    }
}
