use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AccountError {
    #[display("Insufficient funds for withdrawal.")]
    InsufficientFunds,
    #[display("Withdrawal failed. Minimum balance requirement not met.")]
    MinimumBalance,
    #[display("Withdrawal failed. Exceeds overdraft limit.")]
    OverdraftExceeded,
    #[display("Operation failed. Amount out of range.")]
    AmountOverflow,
}

impl std::error::Error for AccountError {}
