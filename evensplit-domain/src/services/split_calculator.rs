use thiserror::Error;

use crate::model::{BalanceLine, Money, Participant, SplitBreakdown};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("cannot split an expense across an empty participant list")]
    EmptyRoster,
}

/// Even-split service.
pub struct SplitCalculator;

impl SplitCalculator {
    /// Compute every participant's balance relative to the equal share.
    ///
    /// `share = total / n`, `balance_i = amount_i - share`, with the output
    /// in input order and names carried through by reference. Pure: callers
    /// re-derive the breakdown on every read rather than caching it.
    ///
    /// An empty list is a rejected precondition, not a division by zero.
    pub fn split(participants: &[Participant]) -> Result<SplitBreakdown<'_>, SplitError> {
        if participants.is_empty() {
            return Err(SplitError::EmptyRoster);
        }

        let total: Money = participants.iter().map(|p| p.amount).sum();
        let share = total.divided_among(participants.len());

        let lines = participants
            .iter()
            .map(|participant| BalanceLine {
                name: &participant.name,
                amount: participant.amount,
                balance: participant.amount - share,
            })
            .collect();

        Ok(SplitBreakdown {
            lines,
            total,
            share,
        })
    }
}
