use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{
    account::{
        error::AccountError,
        ledger::{Account, AccountType, Ledger, balance_after},
        savings::SavingsAccount,
    },
    props::{AccountId, Amount, Holder, cents},
    transfer,
};

/// Account that may go negative down to its overdraft limit.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAccount {
    ledger: Ledger,
    overdraft_limit: Amount,
}

impl CurrentAccount {
    pub fn new(
        id: AccountId,
        holder: Holder,
        initial_balance: Amount,
        overdraft_limit: Amount,
    ) -> Self {
        CurrentAccount {
            ledger: Ledger::new(id, holder, initial_balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        *self.overdraft_limit
    }

    /// Pulls the whole balance of `savings` into a copy of this account.
    /// Neither input is modified; see [`transfer::transfer`].
    pub fn absorb(
        &self,
        savings: &SavingsAccount,
    ) -> Result<(SavingsAccount, CurrentAccount), AccountError> {
        transfer::transfer(savings, self)
    }
}

impl Account for CurrentAccount {
    fn account_type(&self) -> AccountType {
        AccountType::Current
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn check_withdrawal(&self, amount: &Amount) -> Result<(), AccountError> {
        require_within_overdraft(self, amount)
    }
}

impl fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ledger.write_header(f, self.account_type())?;
        writeln!(f, "   Overdraft Limit: ${}", cents(*self.overdraft_limit))
    }
}

fn require_within_overdraft(account: &CurrentAccount, amount: &Amount) -> Result<(), AccountError> {
    if balance_after(&account.ledger, amount)? < -account.overdraft_limit() {
        return Err(AccountError::OverdraftExceeded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, dec};

    use crate::domain::{
        account::{current::CurrentAccount, error::AccountError, ledger::Account},
        props::Amount,
    };

    fn account(balance: Decimal, limit: Decimal) -> CurrentAccount {
        CurrentAccount::new("C456".into(), "Jane Doe".into(), Amount(balance), Amount(limit))
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut acc = account(dec!(2000), dec!(500));

        assert_eq!(acc.withdraw(&Amount(dec!(1000))), Ok(dec!(1000)));
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        let mut acc = account(dec!(1000), dec!(500));

        assert_eq!(acc.withdraw(&Amount(dec!(1500))), Ok(dec!(-500)));
    }

    #[test]
    fn test_withdraw_exceeds_overdraft() {
        let mut acc = account(dec!(1000), dec!(500));

        assert_eq!(
            acc.withdraw(&Amount(dec!(1500.01))),
            Err(AccountError::OverdraftExceeded)
        );
        assert_eq!(acc.balance(), dec!(1000));
    }

    #[test]
    fn test_withdraw_without_overdraft() {
        let mut acc = account(dec!(10), dec!(0));

        assert_eq!(
            acc.withdraw(&Amount(dec!(10.01))),
            Err(AccountError::OverdraftExceeded)
        );
        assert_eq!(acc.withdraw(&Amount(dec!(10))), Ok(dec!(0)));
    }

    #[test]
    fn test_withdraw_overflow() {
        let mut acc = account(dec!(-400), dec!(500));

        assert_eq!(
            acc.withdraw(&Amount(Decimal::MAX)),
            Err(AccountError::AmountOverflow)
        );
        assert_eq!(acc.balance(), dec!(-400));
    }

    #[test]
    fn test_display_overdrawn() {
        let mut acc = account(dec!(100), dec!(500));
        acc.withdraw(&Amount(dec!(400))).unwrap();

        assert_eq!(
            acc.describe(),
            "Account Details for Current Account (ID: C456):\n   \
             Holder: Jane Doe\n   \
             Balance: $-300.00\n   \
             Overdraft Limit: $500.00\n"
        );
    }
}
