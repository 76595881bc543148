use std::collections::BTreeMap;

use derive_more::{Display, From};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    csv::{Op, ScenarioRecord},
    domain::{
        account::{
            basic::BasicAccount,
            current::CurrentAccount,
            error::AccountError,
            ledger::{Account, AccountType},
            savings::SavingsAccount,
        },
        props::{AccountId, Amount, Holder, Rate},
        transfer::{transfer, transfer_amount},
    },
};

/// Any of the account variants, as held by the [`Bank`].
#[derive(Debug, Clone, PartialEq, From)]
pub enum AnyAccount {
    Basic(BasicAccount),
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl AnyAccount {
    pub fn as_account(&self) -> &dyn Account {
        match self {
            AnyAccount::Basic(a) => a,
            AnyAccount::Savings(a) => a,
            AnyAccount::Current(a) => a,
        }
    }

    pub fn as_account_mut(&mut self) -> &mut dyn Account {
        match self {
            AnyAccount::Basic(a) => a,
            AnyAccount::Savings(a) => a,
            AnyAccount::Current(a) => a,
        }
    }
}

#[derive(Debug, PartialEq, Display)]
pub enum BankError {
    #[display("Account {_0} not found.")]
    AccountNotFound(AccountId),
    #[display("Account {_0} already exists.")]
    DuplicateAccount(AccountId),
    #[display("Transfer from {from} to {to} is not supported.")]
    TransferNotSupported { from: AccountType, to: AccountType },
    #[display("{_0} does not accrue interest.")]
    NoInterest(AccountType),
    #[display("Missing {_0} for account {_1}.")]
    MissingField(&'static str, AccountId),
    #[display("Interest rate {rate} for account {id} is outside 0 to 1.")]
    InvalidRate { id: AccountId, rate: Decimal },
    #[display("Overdraft limit {limit} for account {id} is negative.")]
    InvalidLimit { id: AccountId, limit: Decimal },
    #[display("{_0}")]
    Account(AccountError),
}

impl std::error::Error for BankError {}

impl From<AccountError> for BankError {
    fn from(e: AccountError) -> Self {
        BankError::Account(e)
    }
}

// In-memory registry of open accounts, dispatching operations by account id.
// Transfers are the only operation touching two accounts; both are replaced
// together only once the transfer has fully succeeded.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: BTreeMap<AccountId, AnyAccount>,
}

impl Bank {
    pub fn new() -> Self {
        Bank::default()
    }

    pub fn open(&mut self, account: impl Into<AnyAccount>) -> Result<(), BankError> {
        let account = account.into();
        let id = account.as_account().id().to_owned();
        debug!("Opening {} {}", account.as_account().account_type(), id);

        if self.accounts.contains_key(&id) {
            return Err(BankError::DuplicateAccount(id));
        }

        self.accounts.insert(id, account);

        Ok(())
    }

    pub fn get(&self, id: &AccountId) -> Result<&AnyAccount, BankError> {
        self.accounts
            .get(id)
            .ok_or_else(|| BankError::AccountNotFound(id.to_owned()))
    }

    fn get_mut(&mut self, id: &AccountId) -> Result<&mut AnyAccount, BankError> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| BankError::AccountNotFound(id.to_owned()))
    }

    pub fn deposit(&mut self, id: &AccountId, amount: &Amount) -> Result<Decimal, BankError> {
        Ok(self.get_mut(id)?.as_account_mut().deposit(amount)?)
    }

    pub fn withdraw(&mut self, id: &AccountId, amount: &Amount) -> Result<Decimal, BankError> {
        Ok(self.get_mut(id)?.as_account_mut().withdraw(amount)?)
    }

    pub fn accrue_interest(&mut self, id: &AccountId) -> Result<Decimal, BankError> {
        match self.get_mut(id)? {
            AnyAccount::Savings(s) => Ok(s.accrue_interest()?),
            other => Err(BankError::NoInterest(other.as_account().account_type())),
        }
    }

    /// Moves funds from a savings account into a current account. Without an
    /// amount the whole savings balance is moved.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Option<&Amount>,
    ) -> Result<(), BankError> {
        let (source, target) = match (self.get(from)?, self.get(to)?) {
            (AnyAccount::Savings(s), AnyAccount::Current(c)) => match amount {
                Some(amount) => transfer_amount(s, c, amount)?,
                None => transfer(s, c)?,
            },
            (s, c) => {
                return Err(BankError::TransferNotSupported {
                    from: s.as_account().account_type(),
                    to: c.as_account().account_type(),
                });
            }
        };

        self.accounts.insert(from.to_owned(), source.into());
        self.accounts.insert(to.to_owned(), target.into());

        Ok(())
    }

    pub fn describe(&self, id: &AccountId) -> Result<String, BankError> {
        Ok(self.get(id)?.as_account().describe())
    }

    /// Runs one scenario row. Returns the report produced by `show` rows.
    pub fn handle(&mut self, r: ScenarioRecord) -> Result<Option<String>, BankError> {
        let id = AccountId(r.account_id);
        debug!("Handling {:?} for {}", r.op, id);

        match r.op {
            Op::OpenBasic => {
                let holder = require(r.holder, "holder", &id)?;
                let balance = require(r.amount, "amount", &id)?;
                self.open(BasicAccount::new(id, Holder(holder), Amount(balance)))?;
            }
            Op::OpenSavings => {
                let holder = require(r.holder, "holder", &id)?;
                let balance = require(r.amount, "amount", &id)?;
                let rate = require_rate(require(r.rate, "rate", &id)?, &id)?;
                self.open(SavingsAccount::new(
                    id,
                    Holder(holder),
                    Amount(balance),
                    Rate(rate),
                ))?;
            }
            Op::OpenCurrent => {
                let holder = require(r.holder, "holder", &id)?;
                let balance = require(r.amount, "amount", &id)?;
                let limit = require_limit(require(r.limit, "limit", &id)?, &id)?;
                self.open(CurrentAccount::new(
                    id,
                    Holder(holder),
                    Amount(balance),
                    Amount(limit),
                ))?;
            }
            Op::Deposit => {
                let amount = require(r.amount, "amount", &id)?;
                self.deposit(&id, &Amount(amount))?;
            }
            Op::Withdraw => {
                let amount = require(r.amount, "amount", &id)?;
                self.withdraw(&id, &Amount(amount))?;
            }
            Op::Interest => {
                self.accrue_interest(&id)?;
            }
            Op::Transfer => {
                let to = AccountId(require(r.to_account_id, "to", &id)?);
                self.transfer(&id, &to, r.amount.map(Amount).as_ref())?;
            }
            Op::Show => return Ok(Some(self.describe(&id)?)),
        }

        Ok(None)
    }
}

fn require<T>(value: Option<T>, field: &'static str, id: &AccountId) -> Result<T, BankError> {
    value.ok_or_else(|| BankError::MissingField(field, id.to_owned()))
}

fn require_rate(rate: Decimal, id: &AccountId) -> Result<Decimal, BankError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(BankError::InvalidRate {
            id: id.to_owned(),
            rate,
        });
    }

    Ok(rate)
}

fn require_limit(limit: Decimal, id: &AccountId) -> Result<Decimal, BankError> {
    if limit < Decimal::ZERO {
        return Err(BankError::InvalidLimit {
            id: id.to_owned(),
            limit,
        });
    }

    Ok(limit)
}
