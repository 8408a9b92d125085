//! Running-balance projection over one account's movements.
//!
//! The projector trusts its input: movements must already belong to a single
//! account and be in ledger order (see [`crate::order_movements`]). Nothing is
//! skipped, merged or re-sorted, and amounts are used exactly as given.

use showroom_domain::{Money, Movement, MovementKind, MovementWithBalance};

/// Attaches the running balance after each movement.
///
/// The balance starts at zero; a Debit adds its amount and a Credit subtracts it.
pub fn project(movements: &[Movement]) -> Vec<MovementWithBalance> {
    let mut balance = Money::ZERO;
    movements
        .iter()
        .map(|movement| {
            balance += movement.signed_amount();
            MovementWithBalance {
                movement: movement.clone(),
                balance,
            }
        })
        .collect()
}

/// Balance after the last projected movement, zero for an empty ledger.
pub fn closing_balance(entries: &[MovementWithBalance]) -> Money {
    entries
        .last()
        .map(|entry| entry.balance)
        .unwrap_or(Money::ZERO)
}

/// Sum of the amounts of one movement kind.
pub fn total_of_kind(movements: &[Movement], kind: MovementKind) -> Money {
    movements
        .iter()
        .filter(|movement| movement.kind == kind)
        .map(|movement| movement.amount)
        .sum()
}
