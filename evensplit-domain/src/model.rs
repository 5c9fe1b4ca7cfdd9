use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// A currency amount.
///
/// Backed by `Decimal` so that contributed amounts and the derived balances
/// stay exact through addition and subtraction; only display rounds to the
/// two-decimal currency scale (half away from zero).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn from_major(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Clamp to the non-negative range; contributions below zero become zero.
    pub fn clamped_non_negative(self) -> Self {
        if self.is_negative() { Self::ZERO } else { self }
    }

    /// Divide evenly among `count` people. `count` must be non-zero; the
    /// split engine guards that precondition before calling.
    pub fn divided_among(self, count: usize) -> Self {
        debug_assert!(count > 0);
        Self(self.0 / Decimal::from(count))
    }

    /// The amount rounded to the two-decimal currency scale, half away from
    /// zero, with trailing zeros kept (`15` renders as `15.00`).
    pub fn to_currency_scale(self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_currency_scale())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Decimal>().map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}

/// One row of the expense sheet: a name and the amount that person
/// contributed. The `amount >= 0` invariant is enforced at the input edge;
/// the balance is never stored here, it is derived per computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub amount: Money,
}

impl Participant {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount: amount.clamped_non_negative(),
        }
    }

    pub fn blank() -> Self {
        Self {
            name: String::new(),
            amount: Money::ZERO,
        }
    }
}

/// A participant's computed position relative to the equal share.
///
/// Negative balance: owes `abs(balance)`. Non-negative balance (including
/// exactly zero): is owed `balance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceLine<'a> {
    pub name: &'a str,
    pub amount: Money,
    pub balance: Money,
}

/// The full derived view over a participant list: one balance line per
/// participant in input order, plus the total and the equal per-person share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitBreakdown<'a> {
    pub lines: Vec<BalanceLine<'a>>,
    pub total: Money,
    pub share: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer("15", "15.00")]
    #[case::fraction("3.335", "3.34")]
    #[case::negative_fraction("-3.335", "-3.34")]
    #[case::trailing_zero_kept("7.5", "7.50")]
    #[case::zero("0", "0.00")]
    fn display_rounds_to_two_decimals(#[case] raw: &str, #[case] expected: &str) {
        let money: Money = raw.parse().expect("valid amount");
        assert_eq!(money.to_string(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::words("abc")]
    #[case::mixed("12abc")]
    fn rejects_non_numeric_input(#[case] raw: &str) {
        assert!(raw.parse::<Money>().is_err());
    }

    #[test]
    fn clamps_negative_to_zero() {
        let negative: Money = "-5".parse().expect("valid amount");
        assert_eq!(negative.clamped_non_negative(), Money::ZERO);
        assert_eq!(Money::from_major(5).clamped_non_negative(), Money::from_major(5));
    }

    #[test]
    fn participant_constructor_clamps_amount() {
        let participant = Participant::new("A", Money::from_major(-3));
        assert_eq!(participant.amount, Money::ZERO);
    }

    #[test]
    fn division_is_exact_for_divisible_totals() {
        let share = Money::from_major(60).divided_among(4);
        assert_eq!(share, Money::from_major(15));
    }
}
