use std::fmt::Write as _;

use evensplit_domain::{BalanceLine, SplitBreakdown};

pub const REPORT_TITLE: &str = "Group Expense Report";

/// Renders the text report: a title, one line per participant, then two
/// summary lines. Zero balance renders as "has to receive $0.00"; only a
/// strictly negative balance is a payment.
pub struct ReportPresenter;

impl ReportPresenter {
    pub fn render(breakdown: &SplitBreakdown<'_>) -> String {
        let mut report = String::with_capacity(64 * (breakdown.lines.len() + 3));

        let _ = writeln!(&mut report, "{REPORT_TITLE}");
        for line in &breakdown.lines {
            let _ = writeln!(&mut report, "{}", Self::participant_line(line));
        }
        let _ = writeln!(&mut report, "Total: ${}", breakdown.total);
        let _ = writeln!(&mut report, "Each should pay: ${}", breakdown.share);

        report
    }

    pub fn participant_line(line: &BalanceLine<'_>) -> String {
        format!(
            "{}: ${} - {}",
            line.name,
            line.amount,
            Self::outcome_label(line)
        )
    }

    /// The "has to pay" / "has to receive" fragment for one participant.
    pub fn outcome_label(line: &BalanceLine<'_>) -> String {
        if line.balance.is_negative() {
            format!("has to pay ${}", line.balance.abs())
        } else {
            format!("has to receive ${}", line.balance)
        }
    }
}
