use evensplit_domain::{Money, Participant, SplitCalculator};
use proptest::prelude::*;
use rust_decimal::Decimal;

const NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn roster_from_cents(amounts_cents: &[u64]) -> Vec<Participant> {
    amounts_cents
        .iter()
        .enumerate()
        .map(|(idx, &cents)| {
            let amount = Money::from_decimal(Decimal::new(cents as i64, 2));
            Participant::new(NAMES[idx % NAMES.len()], amount)
        })
        .collect()
}

proptest! {
    // Conservation law: the balances of an even split always cancel out.
    // Division leaves the share at Decimal precision, so the sum is zero up
    // to a tolerance far below the displayed currency scale.
    #[test]
    fn balances_sum_to_zero(
        amounts_cents in prop::collection::vec(0u64..=1_000_000, 1..=8),
    ) {
        let participants = roster_from_cents(&amounts_cents);
        let breakdown = SplitCalculator::split(&participants).expect("non-empty roster");

        let sum: Money = breakdown.lines.iter().map(|line| line.balance).sum();
        let tolerance = Decimal::new(1, 10);
        prop_assert!(sum.amount().abs() < tolerance, "sum was {}", sum.amount());
    }

    #[test]
    fn balance_equals_amount_minus_share(
        amounts_cents in prop::collection::vec(0u64..=1_000_000, 1..=8),
    ) {
        let participants = roster_from_cents(&amounts_cents);
        let breakdown = SplitCalculator::split(&participants).expect("non-empty roster");

        for (line, participant) in breakdown.lines.iter().zip(&participants) {
            prop_assert_eq!(line.balance, participant.amount - breakdown.share);
        }
    }

    #[test]
    fn recompute_is_idempotent(
        amounts_cents in prop::collection::vec(0u64..=1_000_000, 1..=8),
    ) {
        let participants = roster_from_cents(&amounts_cents);
        let first = SplitCalculator::split(&participants).expect("non-empty roster");
        let second = SplitCalculator::split(&participants).expect("non-empty roster");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_participant_balance_is_zero(amount_cents in 0u64..=1_000_000) {
        let participants = roster_from_cents(&[amount_cents]);
        let breakdown = SplitCalculator::split(&participants).expect("non-empty roster");
        prop_assert!(breakdown.lines[0].balance.is_zero());
    }
}
