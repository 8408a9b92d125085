//! Shared traits, money alias, date ranges, and policy enums.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency amounts are exact decimals.
pub type Money = Decimal;

/// Exposes a stable identifier for records read from the data source.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving the amount that drives totals.
pub trait Amounted {
    fn amount(&self) -> Money;
}

/// Links a record to the account it is posted against.
pub trait Posted {
    fn account_id(&self) -> Uuid;
    fn date(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// Decides how negative amounts are treated before balances are computed.
pub enum AmountPolicy {
    /// Negative amounts flow through the arithmetic unchanged.
    #[default]
    Permissive,
    /// Any negative amount is rejected as a validation error.
    Strict,
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AmountPolicy::Permissive => "permissive",
            AmountPolicy::Strict => "strict",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Inclusive date range; either side may be open.
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        if let (Some(start), Some(end)) = (from, to) {
            if start > end {
                return Err(DateRangeError::InvalidRange { from: start, to: end });
            }
        }
        Ok(Self { from, to })
    }

    /// A range with no bounds on either side.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |start| date >= start) && self.to.map_or(true, |end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, None) => f.write_str("all dates"),
            (Some(start), None) => write!(f, "from {start}"),
            (None, Some(end)) => write!(f, "until {end}"),
            (Some(start), Some(end)) => write!(f, "{start} to {end}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateRange`] values.
pub enum DateRangeError {
    InvalidRange { from: NaiveDate, to: NaiveDate },
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::InvalidRange { from, to } => {
                write!(f, "date range start {from} is after end {to}")
            }
        }
    }
}

impl std::error::Error for DateRangeError {}
