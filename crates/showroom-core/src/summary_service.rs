use showroom_domain::{AccountFilter, AmountPolicy, DateRange, SummaryReport};

use crate::{aggregate, validate_amounts, CoreError, LedgerSource, MovementQuery};

pub struct SummaryService;

impl SummaryService {
    /// Aggregates receivable/payable rows for the filtered accounts in `range`.
    ///
    /// The amount policy is checked against every fetched record, including
    /// records of accounts that the filter later drops.
    pub fn summary_report(
        source: &dyn LedgerSource,
        filter: AccountFilter,
        range: DateRange,
        policy: AmountPolicy,
    ) -> Result<SummaryReport, CoreError> {
        let accounts = source.accounts()?;
        let query = MovementQuery::all().within(range);
        let mut movements = source.movements(&query)?;
        let mut receipts = source.receipts(&query)?;
        movements.retain(|movement| query.range.contains(movement.date));
        receipts.retain(|receipt| query.range.contains(receipt.date));

        validate_amounts(policy, &movements, &receipts)?;

        let rows = aggregate(&accounts, &movements, &receipts, filter);
        let report = SummaryReport::new(filter, range, rows);
        tracing::debug!(
            %filter,
            rows = report.rows.len(),
            grand_total = %report.totals.grand_total,
            "aggregated account summary"
        );
        Ok(report)
    }
}
