#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{BalanceLine, Money, Participant, SplitBreakdown};
pub use services::{SplitCalculator, SplitError};
