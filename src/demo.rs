use std::io::Write;

use color_eyre::eyre::Result;
use rust_decimal::dec;

use crate::domain::{
    account::{current::CurrentAccount, ledger::Account, savings::SavingsAccount},
    props::{Amount, Rate},
    transfer::transfer_amount,
};

/// Walks a savings and a current account through deposits, withdrawals and
/// transfers, printing their reports to `out` along the way.
pub fn run(out: &mut impl Write) -> Result<()> {
    let mut savings = SavingsAccount::new(
        "S123".into(),
        "John Doe".into(),
        Amount(dec!(1000)),
        Rate(dec!(0.02)),
    );
    let mut current = CurrentAccount::new(
        "C456".into(),
        "Jane Doe".into(),
        Amount(dec!(2000)),
        Amount(dec!(500)),
    );

    writeln!(out, "{}", savings)?;
    writeln!(out, "{}", current)?;

    if let Err(e) = savings.deposit(&Amount(dec!(500))) {
        writeln!(out, "{}", e)?;
    }
    if let Err(e) = current.withdraw(&Amount(dec!(1000))) {
        writeln!(out, "{}", e)?;
    }

    writeln!(out, "Account Details after deposit and withdrawal:")?;
    writeln!(out, "{}", savings)?;
    writeln!(out, "{}", current)?;

    match current.absorb(&savings) {
        Ok((s, c)) => (savings, current) = (s, c),
        Err(e) => writeln!(out, "{}", e)?,
    }

    match transfer_amount(&savings, &current, &Amount(dec!(300))) {
        Ok((s, c)) => (savings, current) = (s, c),
        Err(e) => writeln!(out, "{}", e)?,
    }

    writeln!(out, "Account Details after transfer:")?;
    writeln!(out, "{}", savings)?;
    writeln!(out, "{}", current)?;

    Ok(())
}
