use std::{fs, io, path::Path};

use evensplit_domain::SplitBreakdown;
use thiserror::Error;

use crate::{report_presenter::ReportPresenter, svg_report::SvgReportBuilder};

/// Default artifact names, after the original `group-expense-report.pdf`.
pub const TEXT_REPORT_FILE_NAME: &str = "group-expense-report.txt";
pub const SVG_REPORT_FILE_NAME: &str = "group-expense-report.svg";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report artifact: {0}")]
    Io(#[from] io::Error),
}

/// One-shot synchronous export of the text report.
pub fn write_text_report(
    path: impl AsRef<Path>,
    breakdown: &SplitBreakdown<'_>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, ReportPresenter::render(breakdown))?;
    tracing::info!(path = %path.display(), rows = breakdown.lines.len(), "wrote text report");
    Ok(())
}

/// One-shot synchronous export of the printable SVG report.
pub fn write_svg_report(
    path: impl AsRef<Path>,
    breakdown: &SplitBreakdown<'_>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, SvgReportBuilder::new(breakdown).build())?;
    tracing::info!(path = %path.display(), rows = breakdown.lines.len(), "wrote svg report");
    Ok(())
}
