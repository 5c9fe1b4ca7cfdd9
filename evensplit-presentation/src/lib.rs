#![warn(clippy::uninlined_format_args)]

pub mod export;
pub mod report_presenter;
pub mod svg_report;

pub use export::{ExportError, SVG_REPORT_FILE_NAME, TEXT_REPORT_FILE_NAME, write_svg_report, write_text_report};
pub use report_presenter::{REPORT_TITLE, ReportPresenter};
pub use svg_report::SvgReportBuilder;
