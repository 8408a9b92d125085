//! Journal movements (Debit/Credit) and payment receipts.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Direction of a journal movement.
pub enum MovementKind {
    /// Increases what the account owes the business.
    Debit,
    /// Decreases what the account owes the business.
    Credit,
}

impl MovementKind {
    /// Applies the debit/credit sign convention to `amount`.
    pub fn signed(self, amount: Money) -> Money {
        match self {
            MovementKind::Debit => amount,
            MovementKind::Credit => -amount,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MovementKind::Debit => "Debit",
            MovementKind::Credit => "Credit",
        };
        f.write_str(label)
    }
}

/// Named sub-amounts (vehicle price, tax, insurance, ...). Keys vary per
/// deployment and never contribute to totals.
pub type Breakdown = BTreeMap<String, Money>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: Uuid,
    pub account_id: Uuid,
    pub date: NaiveDate,
    pub kind: MovementKind,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub breakdown: Breakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Movement {
    pub fn new(account_id: Uuid, date: NaiveDate, kind: MovementKind, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            date,
            kind,
            amount,
            breakdown: Breakdown::new(),
            narration: None,
            created_at: None,
        }
    }

    pub fn debit(account_id: Uuid, date: NaiveDate, amount: Money) -> Self {
        Self::new(account_id, date, MovementKind::Debit, amount)
    }

    pub fn credit(account_id: Uuid, date: NaiveDate, amount: Money) -> Self {
        Self::new(account_id, date, MovementKind::Credit, amount)
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    pub fn with_breakdown_item(mut self, key: impl Into<String>, value: Money) -> Self {
        self.breakdown.insert(key.into(), value);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Signed contribution of this movement to the running balance.
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    /// Sum of the breakdown entries, `None` when no breakdown was recorded.
    pub fn breakdown_total(&self) -> Option<Money> {
        if self.breakdown.is_empty() {
            None
        } else {
            Some(self.breakdown.values().copied().sum())
        }
    }
}

impl Identifiable for Movement {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Movement {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl Posted for Movement {
    fn account_id(&self) -> Uuid {
        self.account_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A payment received from an account; always reduces what it owes.
pub struct Receipt {
    pub id: Uuid,
    pub account_id: Uuid,
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Receipt {
    pub fn new(account_id: Uuid, date: NaiveDate, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            date,
            amount,
            reference: None,
            created_at: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

impl Identifiable for Receipt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Receipt {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl Posted for Receipt {
    fn account_id(&self) -> Uuid {
        self.account_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn credit_is_negated_in_signed_amount() {
        let account = Uuid::new_v4();
        assert_eq!(Movement::debit(account, date(), dec!(250)).signed_amount(), dec!(250));
        assert_eq!(Movement::credit(account, date(), dec!(250)).signed_amount(), dec!(-250));
    }

    #[test]
    fn breakdown_total_is_independent_of_amount() {
        let movement = Movement::debit(Uuid::new_v4(), date(), dec!(1000))
            .with_breakdown_item("vehicle_price", dec!(800))
            .with_breakdown_item("insurance", dec!(150));
        assert_eq!(movement.breakdown_total(), Some(dec!(950)));
        assert_eq!(movement.amount, dec!(1000));
    }

    #[test]
    fn movement_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "id": "6f1c9a7e-0b7e-4f4e-9d55-0d5f3f7c1a11",
            "account_id": "0e9d3c52-5a4b-4c6f-8a55-1c2d3e4f5a6b",
            "date": "2024-04-01",
            "kind": "Credit",
            "amount": "400.00"
        }"#;
        let movement: Movement = serde_json::from_str(json).expect("deserialize movement");
        assert_eq!(movement.kind, MovementKind::Credit);
        assert_eq!(movement.amount, dec!(400.00));
        assert!(movement.breakdown.is_empty());
        assert!(movement.created_at.is_none());
    }
}
