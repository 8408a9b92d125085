//! Running balances and the Dr/Cr presentation rule.

use std::fmt;

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::{account::Account, common::*, movement::Movement};

/// Default number of decimals shown for balances.
pub const DEFAULT_BALANCE_PRECISION: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A movement together with the account balance right after it.
pub struct MovementWithBalance {
    #[serde(flatten)]
    pub movement: Movement,
    pub balance: Money,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Which side of the ledger a balance falls on.
pub enum BalanceSide {
    /// The account owes the business.
    Dr,
    /// Settled, or the business owes the account.
    Cr,
}

impl BalanceSide {
    /// Positive balances are Dr; zero and negative balances are Cr.
    pub fn of(balance: Money) -> Self {
        if balance > Money::ZERO {
            BalanceSide::Dr
        } else {
            BalanceSide::Cr
        }
    }
}

impl fmt::Display for BalanceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BalanceSide::Dr => "Dr",
            BalanceSide::Cr => "Cr",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display form of a balance: absolute magnitude plus side.
pub struct BalanceLabel {
    pub magnitude: Money,
    pub side: BalanceSide,
    pub precision: u32,
}

impl BalanceLabel {
    pub fn new(balance: Money) -> Self {
        Self::with_precision(balance, DEFAULT_BALANCE_PRECISION)
    }

    pub fn with_precision(balance: Money, precision: u32) -> Self {
        Self {
            magnitude: balance.abs(),
            side: BalanceSide::of(balance),
            precision,
        }
    }

    /// Magnitude rounded half away from zero to the label precision.
    pub fn rounded_magnitude(&self) -> Money {
        self.magnitude
            .round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for BalanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} {}",
            self.rounded_magnitude(),
            self.side,
            prec = self.precision as usize
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Running-balance view of one account over a date range.
pub struct AccountStatement {
    pub account: Account,
    pub range: DateRange,
    pub entries: Vec<MovementWithBalance>,
    pub closing_balance: Money,
    pub total_debit: Money,
    pub total_credit: Money,
}

impl AccountStatement {
    pub fn closing_label(&self) -> BalanceLabel {
        BalanceLabel::new(self.closing_balance)
    }
}
