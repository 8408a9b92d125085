//! Customer/party accounts and the filters that select them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    /// Tax registration number (GSTIN or similar). Blank values count as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tax_id: None,
            contact: None,
        }
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    pub fn is_registered(&self) -> bool {
        self.tax_id
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// Restricts the account universe on account metadata before aggregation.
pub enum AccountFilter {
    #[default]
    All,
    /// Only accounts carrying a tax registration number.
    Registered,
    /// Only accounts without a tax registration number.
    Unregistered,
}

impl AccountFilter {
    pub fn matches(self, account: &Account) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Registered => account.is_registered(),
            AccountFilter::Unregistered => !account.is_registered(),
        }
    }
}

impl fmt::Display for AccountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountFilter::All => "all",
            AccountFilter::Registered => "registered",
            AccountFilter::Unregistered => "unregistered",
        };
        f.write_str(label)
    }
}
