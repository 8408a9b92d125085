//! In-memory snapshot of accounts, movements and receipts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    account::Account,
    common::Identifiable,
    movement::{Movement, Receipt},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub movements: Vec<Movement>,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id();
        self.accounts.push(account);
        id
    }

    pub fn add_movement(&mut self, movement: Movement) -> Uuid {
        let id = movement.id();
        self.movements.push(movement);
        id
    }

    pub fn add_receipt(&mut self, receipt: Receipt) -> Uuid {
        let id = receipt.id();
        self.receipts.push(receipt);
        id
    }
}
