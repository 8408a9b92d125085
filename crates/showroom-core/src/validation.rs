use showroom_domain::{AmountPolicy, Amounted, Identifiable, Money, Movement, Receipt};

use crate::CoreError;

/// Applies `policy` to every amount before balances are computed.
///
/// `Permissive` accepts anything. `Strict` fails on the first negative amount,
/// naming the offending record.
pub fn validate_amounts(
    policy: AmountPolicy,
    movements: &[Movement],
    receipts: &[Receipt],
) -> Result<(), CoreError> {
    if policy == AmountPolicy::Permissive {
        return Ok(());
    }
    check_non_negative("movement", movements)?;
    check_non_negative("receipt", receipts)
}

fn check_non_negative<T>(label: &str, records: &[T]) -> Result<(), CoreError>
where
    T: Identifiable + Amounted,
{
    match records.iter().find(|record| record.amount() < Money::ZERO) {
        Some(record) => Err(CoreError::Validation(format!(
            "{label} {} has negative amount {}",
            record.id(),
            record.amount()
        ))),
        None => Ok(()),
    }
}
