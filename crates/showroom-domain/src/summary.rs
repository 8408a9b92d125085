//! Receivable/payable summary rows and their grand totals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    account::AccountFilter,
    balance::BalanceLabel,
    common::*,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    pub account_id: Uuid,
    pub account_name: String,
    pub receivable_amount: Money,
    pub payable_amount: Money,
    pub net_balance: Money,
}

impl AccountSummary {
    pub fn new(
        account_id: Uuid,
        account_name: impl Into<String>,
        receivable_amount: Money,
        payable_amount: Money,
    ) -> Self {
        Self {
            account_id,
            account_name: account_name.into(),
            receivable_amount,
            payable_amount,
            net_balance: receivable_amount - payable_amount,
        }
    }

    /// Rows with neither receivable nor payable activity are not reported.
    pub fn has_activity(&self) -> bool {
        !(self.receivable_amount.is_zero() && self.payable_amount.is_zero())
    }

    pub fn net_label(&self) -> BalanceLabel {
        BalanceLabel::new(self.net_balance)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummaryTotals {
    pub total_receivable: Money,
    pub total_payable: Money,
    pub grand_total: Money,
}

impl SummaryTotals {
    /// Folds the rows that are actually reported.
    pub fn from_rows(rows: &[AccountSummary]) -> Self {
        rows.iter().fold(Self::default(), |totals, row| Self {
            total_receivable: totals.total_receivable + row.receivable_amount,
            total_payable: totals.total_payable + row.payable_amount,
            grand_total: totals.grand_total + row.net_balance,
        })
    }

    pub fn grand_label(&self) -> BalanceLabel {
        BalanceLabel::new(self.grand_total)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryReport {
    pub filter: AccountFilter,
    pub range: DateRange,
    pub rows: Vec<AccountSummary>,
    pub totals: SummaryTotals,
}

impl SummaryReport {
    pub fn new(filter: AccountFilter, range: DateRange, rows: Vec<AccountSummary>) -> Self {
        let totals = SummaryTotals::from_rows(&rows);
        Self {
            filter,
            range,
            rows,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
