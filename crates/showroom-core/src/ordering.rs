//! Ledger ordering for movements.
//!
//! Records sort by date, then by creation timestamp. Within a day, records
//! without a timestamp come first and keep their source order; the sort is
//! stable so records with equal keys never swap.

use showroom_domain::Movement;

pub fn order_movements(movements: &mut [Movement]) {
    movements.sort_by_key(|movement| (movement.date, movement.created_at));
}
