//! Moving funds from a savings account into a current account.
//!
//! Transfers are pure: the inputs are left as they are and updated copies are
//! returned only when the whole transfer can happen. The savings withdrawal
//! rule applies to transfers like to any other withdrawal, so a savings
//! account can never be emptied by a transfer.

use tracing::debug;

use crate::domain::{
    account::{
        current::CurrentAccount, error::AccountError, ledger::Account, savings::SavingsAccount,
    },
    props::Amount,
};

/// Moves the entire balance of `source` into `target`.
///
/// Since the source would be left at zero, this fails with
/// [`AccountError::MinimumBalance`] for every savings account.
pub fn transfer(
    source: &SavingsAccount,
    target: &CurrentAccount,
) -> Result<(SavingsAccount, CurrentAccount), AccountError> {
    transfer_amount(source, target, &Amount(source.balance()))
}

/// Moves `amount` from `source` into `target`.
pub fn transfer_amount(
    source: &SavingsAccount,
    target: &CurrentAccount,
    amount: &Amount,
) -> Result<(SavingsAccount, CurrentAccount), AccountError> {
    debug!(
        "Transferring {} from {} to {}",
        amount,
        source.id(),
        target.id()
    );

    let mut source = source.clone();
    let mut target = target.clone();

    source.withdraw(amount)?;
    target.deposit(amount)?;

    Ok((source, target))
}
