pub mod basic;
pub mod current;
pub mod error;
pub mod ledger;
pub mod savings;
