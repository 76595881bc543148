use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    account::{
        error::AccountError,
        ledger::{Account, AccountType, Ledger, balance_after},
    },
    props::{AccountId, Amount, Holder, Rate, cents, round_cents},
};

/// Balance a savings account must keep after any withdrawal.
pub const MIN_SAVINGS_BALANCE: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    ledger: Ledger,
    interest_rate: Rate,
}

impl SavingsAccount {
    pub fn new(
        id: AccountId,
        holder: Holder,
        initial_balance: Amount,
        interest_rate: Rate,
    ) -> Self {
        SavingsAccount {
            ledger: Ledger::new(id, holder, initial_balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    /// Credits one period of interest, rounded to cents, and returns it.
    pub fn accrue_interest(&mut self) -> Result<Decimal, AccountError> {
        let interest = self
            .balance()
            .checked_mul(*self.interest_rate)
            .map(round_cents)
            .ok_or(AccountError::AmountOverflow)?;
        debug!("Accruing {} interest on {}", interest, self.id());

        self.deposit(&Amount(interest))?;
        Ok(interest)
    }
}

impl Account for SavingsAccount {
    fn account_type(&self) -> AccountType {
        AccountType::Savings
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn check_withdrawal(&self, amount: &Amount) -> Result<(), AccountError> {
        require_minimum_balance(&self.ledger, amount)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ledger.write_header(f, self.account_type())?;
        writeln!(
            f,
            "   Interest Rate: {}%",
            cents(self.interest_rate().saturating_mul(Decimal::ONE_HUNDRED))
        )
    }
}

fn require_minimum_balance(ledger: &Ledger, amount: &Amount) -> Result<(), AccountError> {
    if balance_after(ledger, amount)? < MIN_SAVINGS_BALANCE {
        return Err(AccountError::MinimumBalance);
    }

    Ok(())
}
