use std::fmt;

use derive_more::Display;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    account::error::AccountError,
    props::{AccountId, Amount, Holder, cents},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AccountType {
    #[display("Account")]
    Basic,
    #[display("Savings Account")]
    Savings,
    #[display("Current Account")]
    Current,
}

/// State shared by every account variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    id: AccountId,
    holder: Holder,
    balance: Decimal,
}

impl Ledger {
    pub fn new(id: AccountId, holder: Holder, initial_balance: Amount) -> Self {
        Ledger {
            id,
            holder,
            balance: *initial_balance,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder(&self) -> &Holder {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    fn credit(&mut self, amount: &Amount) -> Result<Decimal, AccountError> {
        self.balance = self
            .balance
            .checked_add(**amount)
            .ok_or(AccountError::AmountOverflow)?;
        Ok(self.balance)
    }

    fn debit(&mut self, amount: &Amount) -> Result<Decimal, AccountError> {
        self.balance = balance_after(self, amount)?;
        Ok(self.balance)
    }

    pub(super) fn write_header(
        &self,
        f: &mut fmt::Formatter<'_>,
        account_type: AccountType,
    ) -> fmt::Result {
        writeln!(f, "Account Details for {} (ID: {}):", account_type, self.id)?;
        writeln!(f, "   Holder: {}", self.holder)?;
        writeln!(f, "   Balance: ${}", cents(self.balance))
    }
}

/// Balance left once `amount` is taken out.
pub fn balance_after(ledger: &Ledger, amount: &Amount) -> Result<Decimal, AccountError> {
    ledger
        .balance()
        .checked_sub(**amount)
        .ok_or(AccountError::AmountOverflow)
}

/// Capabilities common to all account variants.
///
/// Variants provide their withdrawal rule through [`Account::check_withdrawal`]
/// and their report through `Display`; deposits and the balance update on a
/// successful withdrawal are shared.
pub trait Account: fmt::Display {
    fn account_type(&self) -> AccountType;

    fn ledger(&self) -> &Ledger;

    fn ledger_mut(&mut self) -> &mut Ledger;

    /// Tells whether `amount` may leave the account, without changing it.
    fn check_withdrawal(&self, amount: &Amount) -> Result<(), AccountError>;

    fn id(&self) -> &AccountId {
        self.ledger().id()
    }

    fn holder(&self) -> &Holder {
        self.ledger().holder()
    }

    fn balance(&self) -> Decimal {
        self.ledger().balance()
    }

    /// Adds `amount` to the balance and returns the new balance. The amount is
    /// taken as given, no sign check is made. Fails only when the sum is out
    /// of decimal range, leaving the balance unchanged.
    fn deposit(&mut self, amount: &Amount) -> Result<Decimal, AccountError> {
        debug!("Depositing {} into {}", amount, self.id());

        self.ledger_mut()
            .credit(amount)
            .inspect_err(|e| debug!("Deposit into {} rejected: {}", self.id(), e))
    }

    /// Removes `amount` if the variant's rule allows it. On error the balance
    /// is unchanged.
    fn withdraw(&mut self, amount: &Amount) -> Result<Decimal, AccountError> {
        debug!("Withdrawing {} from {}", amount, self.id());

        self.check_withdrawal(amount)
            .inspect_err(|e| debug!("Withdrawal from {} rejected: {}", self.id(), e))?;

        self.ledger_mut().debit(amount)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
