#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod expense_sheet;

pub use error::SheetError;
pub use expense_sheet::{ExpenseSheet, RemoveOutcome, parse_amount_input};
