use derive_more::{Display, From};
use rust_decimal::{Decimal, RoundingStrategy};
use shrinkwraprs::Shrinkwrap;

#[derive(Shrinkwrap, Clone, Debug, PartialEq, Eq, Display, Hash, PartialOrd, Ord, From)]
pub struct AccountId(pub String);

#[derive(Shrinkwrap, Clone, Debug, PartialEq, Eq, Display, Hash, From)]
pub struct Holder(pub String);

#[derive(Shrinkwrap, Clone, Copy, Debug, PartialEq, Eq, Display, Hash, From)]
pub struct Amount(pub Decimal);

/// Interest rate as a fraction, `0.02` meaning 2%.
#[derive(Shrinkwrap, Clone, Copy, Debug, PartialEq, Eq, Display, Hash, From)]
pub struct Rate(pub Decimal);

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_owned())
    }
}

impl From<&str> for Holder {
    fn from(s: &str) -> Self {
        Holder(s.to_owned())
    }
}

/// Rounds to cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed two decimal rendering used by every account report. Amounts that
/// round to zero render as `0.00`, never `-0.00`.
pub fn cents(value: Decimal) -> String {
    let rounded = round_cents(value);
    if rounded.is_zero() {
        return format!("{:.2}", Decimal::ZERO);
    }

    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::{cents, round_cents};

    #[test]
    fn pads_to_two_places() {
        assert_eq!(cents(dec!(1000)), "1000.00");
        assert_eq!(cents(dec!(0.5)), "0.50");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_cents(dec!(2.005)), dec!(2.01));
        assert_eq!(round_cents(dec!(-2.005)), dec!(-2.01));
        assert_eq!(cents(dec!(1.234)), "1.23");
    }

    #[test]
    fn renders_unsigned_zero() {
        assert_eq!(cents(dec!(-0.004)), "0.00");
        assert_eq!(cents(dec!(-0.00)), "0.00");
        assert_eq!(cents(dec!(-0.005)), "-0.01");
    }

    #[test]
    fn keeps_sign_of_overdrawn_balance() {
        assert_eq!(cents(dec!(-300)), "-300.00");
    }
}
