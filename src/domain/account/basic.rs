use std::fmt;

use crate::domain::{
    account::{
        error::AccountError,
        ledger::{Account, AccountType, Ledger},
    },
    props::{AccountId, Amount, Holder},
};

/// Plain account: withdrawals may not exceed the balance.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicAccount {
    ledger: Ledger,
}

impl BasicAccount {
    pub fn new(id: AccountId, holder: Holder, initial_balance: Amount) -> Self {
        BasicAccount {
            ledger: Ledger::new(id, holder, initial_balance),
        }
    }
}

impl Account for BasicAccount {
    fn account_type(&self) -> AccountType {
        AccountType::Basic
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    fn check_withdrawal(&self, amount: &Amount) -> Result<(), AccountError> {
        require_sufficient_funds(&self.ledger, amount)
    }
}

impl fmt::Display for BasicAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ledger.write_header(f, self.account_type())
    }
}

fn require_sufficient_funds(ledger: &Ledger, amount: &Amount) -> Result<(), AccountError> {
    if **amount > ledger.balance() {
        return Err(AccountError::InsufficientFunds);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use crate::domain::{
        account::{
            basic::BasicAccount,
            error::AccountError,
            ledger::{Account, AccountType},
        },
        props::Amount,
    };

    fn account(balance: rust_decimal::Decimal) -> BasicAccount {
        BasicAccount::new("A1".into(), "Ann Lee".into(), Amount(balance))
    }

    #[test]
    fn test_type_label() {
        let acc = account(dec!(0));

        assert_eq!(acc.account_type(), AccountType::Basic);
        assert_eq!(acc.account_type().to_string(), "Account");
    }

    #[test]
    fn test_deposit_adds_to_balance() {
        let mut acc = account(dec!(10.50));

        assert_eq!(acc.deposit(&Amount(dec!(4.25))), Ok(dec!(14.75)));
        assert_eq!(acc.balance(), dec!(14.75));
    }

    #[test]
    fn test_deposit_is_unchecked() {
        let mut acc = account(dec!(10));

        acc.deposit(&Amount(dec!(-3))).unwrap();

        assert_eq!(acc.balance(), dec!(7));
    }

    #[test]
    fn test_withdraw_full_amount() {
        let mut acc = account(dec!(1.23));

        assert_eq!(acc.withdraw(&Amount(dec!(1.23))), Ok(dec!(0)));
    }

    #[test]
    fn test_withdraw_partial_amount() {
        let mut acc = account(dec!(1.23));

        assert_eq!(acc.withdraw(&Amount(dec!(0.23))), Ok(dec!(1.00)));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut acc = account(dec!(1.23));

        assert_eq!(
            acc.withdraw(&Amount(dec!(1.2301))),
            Err(AccountError::InsufficientFunds)
        );
        assert_eq!(acc.balance(), dec!(1.23));
    }

    #[test]
    fn test_deposit_overflow() {
        let mut acc = account(rust_decimal::Decimal::MAX);

        assert_eq!(
            acc.deposit(&Amount(dec!(1))),
            Err(AccountError::AmountOverflow)
        );
        assert_eq!(acc.balance(), rust_decimal::Decimal::MAX);
    }

    #[test]
    fn test_withdraw_negative_amount_overflow() {
        let mut acc = account(dec!(1));

        assert_eq!(
            acc.withdraw(&Amount(rust_decimal::Decimal::MIN)),
            Err(AccountError::AmountOverflow)
        );
        assert_eq!(acc.balance(), dec!(1));
    }

    #[test]
    fn test_display() {
        let acc = account(dec!(42.5));

        assert_eq!(
            acc.describe(),
            "Account Details for Account (ID: A1):\n   Holder: Ann Lee\n   Balance: $42.50\n"
        );
    }
}
