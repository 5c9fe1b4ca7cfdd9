use evensplit_domain::{Money, Participant, SplitBreakdown, SplitCalculator, SplitError};

use crate::error::SheetError;

/// The sheet opens with four blank rows, matching the blank form a user is
/// first presented with.
const INITIAL_ROW_COUNT: usize = 4;

/// Result of a `remove_row` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The sheet never shrinks below one row; removing the sole remaining
    /// row is a no-op.
    LastRowKept,
    NoSuchRow,
}

/// An ordered, never-empty list of participants and the mutators that edit it.
///
/// Balances are a derived projection: `breakdown` recomputes the whole sheet
/// from scratch on every read, so there is no cached state to go stale after
/// a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseSheet {
    rows: Vec<Participant>,
}

impl Default for ExpenseSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseSheet {
    pub fn new() -> Self {
        Self {
            rows: vec![Participant::blank(); INITIAL_ROW_COUNT],
        }
    }

    /// Build a sheet from existing rows. An empty list is rejected, the same
    /// precondition the split engine enforces.
    pub fn from_rows(rows: Vec<Participant>) -> Result<Self, SplitError> {
        if rows.is_empty() {
            return Err(SplitError::EmptyRoster);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Participant] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self) {
        self.rows.push(Participant::blank());
        tracing::debug!(rows = self.rows.len(), "added blank row");
    }

    pub fn remove_row(&mut self, index: usize) -> RemoveOutcome {
        if index >= self.rows.len() {
            return RemoveOutcome::NoSuchRow;
        }
        if self.rows.len() == 1 {
            tracing::debug!("refused to remove the last remaining row");
            return RemoveOutcome::LastRowKept;
        }
        self.rows.remove(index);
        RemoveOutcome::Removed
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), SheetError> {
        let rows = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(SheetError::RowOutOfRange { index, rows })?;
        row.name = name.into();
        Ok(())
    }

    /// Store an amount, clamped to the non-negative range.
    pub fn set_amount(&mut self, index: usize, amount: Money) -> Result<(), SheetError> {
        let rows = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(SheetError::RowOutOfRange { index, rows })?;
        row.amount = amount.clamped_non_negative();
        Ok(())
    }

    /// Store an amount from raw text entry, applying the input coercion
    /// policy: unparseable or negative input resolves to zero.
    pub fn set_amount_input(&mut self, index: usize, raw: &str) -> Result<(), SheetError> {
        self.set_amount(index, parse_amount_input(raw))
    }

    /// The derived view: every balance recomputed from the current rows.
    pub fn breakdown(&self) -> SplitBreakdown<'_> {
        match SplitCalculator::split(&self.rows) {
            Ok(breakdown) => breakdown,
            // remove_row keeps the last row, so the roster is never empty.
            Err(SplitError::EmptyRoster) => unreachable!("sheet always has at least one row"),
        }
    }
}

/// Coerce raw amount text to a stored amount.
///
/// Empty and unparseable entries resolve to zero; negative entries are
/// clamped to zero. No error surfaces to the caller.
pub fn parse_amount_input(raw: &str) -> Money {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Money::ZERO;
    }
    match trimmed.parse::<Money>() {
        Ok(amount) if amount.is_negative() => {
            tracing::debug!(input = raw, "negative amount clamped to zero");
            Money::ZERO
        }
        Ok(amount) => amount,
        Err(_) => {
            tracing::debug!(input = raw, "unparseable amount coerced to zero");
            Money::ZERO
        }
    }
}
