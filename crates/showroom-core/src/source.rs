use std::collections::HashSet;

use showroom_domain::{Account, Dataset, DateRange, Money, Movement, Posted, Receipt};
use uuid::Uuid;

use crate::CoreError;

/// Selects records by owning account and inclusive date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementQuery {
    pub account_id: Option<Uuid>,
    pub range: DateRange,
}

impl MovementQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_account(account_id: Uuid) -> Self {
        Self {
            account_id: Some(account_id),
            range: DateRange::unbounded(),
        }
    }

    pub fn within(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn matches<P: Posted>(&self, record: &P) -> bool {
        self.account_id
            .map_or(true, |account| record.account_id() == account)
            && self.range.contains(record.date())
    }
}

/// Upstream collaborator that supplies accounts, movements and receipts.
///
/// Results must keep the source's own order; callers apply ledger ordering.
pub trait LedgerSource: Send + Sync {
    fn accounts(&self) -> Result<Vec<Account>, CoreError>;
    fn movements(&self, query: &MovementQuery) -> Result<Vec<Movement>, CoreError>;
    fn receipts(&self, query: &MovementQuery) -> Result<Vec<Receipt>, CoreError>;

    fn account(&self, id: Uuid) -> Result<Account, CoreError> {
        self.accounts()?
            .into_iter()
            .find(|account| account.id == id)
            .ok_or_else(|| CoreError::AccountNotFound(id.to_string()))
    }
}

impl LedgerSource for Dataset {
    fn accounts(&self) -> Result<Vec<Account>, CoreError> {
        Ok(self.accounts.clone())
    }

    fn movements(&self, query: &MovementQuery) -> Result<Vec<Movement>, CoreError> {
        Ok(self
            .movements
            .iter()
            .filter(|movement| query.matches(*movement))
            .cloned()
            .collect())
    }

    fn receipts(&self, query: &MovementQuery) -> Result<Vec<Receipt>, CoreError> {
        Ok(self
            .receipts
            .iter()
            .filter(|receipt| query.matches(*receipt))
            .cloned()
            .collect())
    }
}

/// Resolves an account by id, or by case-insensitive exact name.
pub fn find_account(source: &dyn LedgerSource, key: &str) -> Result<Account, CoreError> {
    let key = key.trim();
    if let Ok(id) = Uuid::parse_str(key) {
        return source.account(id);
    }
    let mut matches: Vec<Account> = source
        .accounts()?
        .into_iter()
        .filter(|account| account.name.trim().eq_ignore_ascii_case(key))
        .collect();
    match matches.len() {
        0 => Err(CoreError::AccountNotFound(key.to_string())),
        1 => Ok(matches.remove(0)),
        count => Err(CoreError::AmbiguousAccount(format!(
            "{key} matches {count} accounts"
        ))),
    }
}

/// Detects dangling references and other anomalies within a dataset snapshot.
pub fn dataset_warnings(dataset: &Dataset) -> Vec<String> {
    let account_ids: HashSet<_> = dataset.accounts.iter().map(|a| a.id).collect();
    let mut warnings = Vec::new();

    for movement in &dataset.movements {
        if !account_ids.contains(&movement.account_id) {
            warnings.push(format!(
                "movement {} references unknown account {}",
                movement.id, movement.account_id
            ));
        }
        if movement.amount < Money::ZERO {
            warnings.push(format!(
                "movement {} has negative amount {}",
                movement.id, movement.amount
            ));
        }
        if let Some(total) = movement.breakdown_total() {
            if total != movement.amount {
                warnings.push(format!(
                    "movement {} breakdown sums to {} but amount is {}",
                    movement.id, total, movement.amount
                ));
            }
        }
    }
    for receipt in &dataset.receipts {
        if !account_ids.contains(&receipt.account_id) {
            warnings.push(format!(
                "receipt {} references unknown account {}",
                receipt.id, receipt.account_id
            ));
        }
        if receipt.amount < Money::ZERO {
            warnings.push(format!(
                "receipt {} has negative amount {}",
                receipt.id, receipt.amount
            ));
        }
    }
    warnings
}
