use std::{borrow::Cow, fmt::Write as _};

use evensplit_domain::SplitBreakdown;

use crate::report_presenter::{REPORT_TITLE, ReportPresenter};

const FONT_SIZE: u32 = 14;
const TITLE_FONT_SIZE: u32 = 20;
const CELL_PADDING: u32 = 10;
const LINE_HEIGHT: u32 = FONT_SIZE + CELL_PADDING * 2;
const TITLE_HEIGHT: u32 = TITLE_FONT_SIZE + CELL_PADDING * 2;
const TITLE_BG: &str = "#ffffff";
const HEADER_BG: &str = "#4a5568";
const HEADER_TEXT: &str = "#ffffff";
const ROW_BG_EVEN: &str = "#f7fafc";
const ROW_BG_ODD: &str = "#edf2f7";
const ROW_TEXT: &str = "#1a202c";
const PAY_TEXT: &str = "#c53030";
const RECEIVE_TEXT: &str = "#2f855a";
const SUMMARY_BG: &str = "#e2e8f0";
const BORDER_COLOR: &str = "#cbd5e0";
const FONT_FAMILY: &str = "Noto Sans";
const CHAR_WIDTH: f32 = 8.5;

const HEADERS: [&str; 3] = ["Name", "Contributed", "Outcome"];

/// Renders a breakdown as a printable SVG sheet: a title banner, one table
/// row per participant, and a two-line summary footer. This is the printable
/// counterpart of `ReportPresenter::render`.
pub struct SvgReportBuilder<'a> {
    breakdown: &'a SplitBreakdown<'a>,
}

impl<'a> SvgReportBuilder<'a> {
    pub fn new(breakdown: &'a SplitBreakdown<'a>) -> Self {
        Self { breakdown }
    }

    pub fn build(self) -> String {
        let rows: Vec<[String; 3]> = self
            .breakdown
            .lines
            .iter()
            .map(|line| {
                [
                    line.name.to_owned(),
                    format!("${}", line.amount),
                    ReportPresenter::outcome_label(line),
                ]
            })
            .collect();
        let summary = [
            format!("Total: ${}", self.breakdown.total),
            format!("Each should pay: ${}", self.breakdown.share),
        ];

        let mut col_widths: Vec<u32> = HEADERS.iter().map(|h| estimate_text_width(h)).collect();
        for row in &rows {
            for (width, cell) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(estimate_text_width(cell));
            }
        }

        let table_width: u32 =
            col_widths.iter().sum::<u32>() + (HEADERS.len() as u32 + 1) * CELL_PADDING;
        let title_width = estimate_text_width(REPORT_TITLE) + CELL_PADDING * 2;
        let summary_width = summary
            .iter()
            .map(|line| estimate_text_width(line) + CELL_PADDING * 2)
            .max()
            .unwrap_or(0);
        let total_width = table_width.max(title_width).max(summary_width);
        let total_height =
            TITLE_HEIGHT + LINE_HEIGHT * (1 + rows.len() as u32 + summary.len() as u32) + 2;

        let mut svg = String::with_capacity(4096);
        let _ = writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_width}" height="{total_height}" viewBox="0 0 {total_width} {total_height}">"#
        );
        let _ = writeln!(
            &mut svg,
            r#"<style>text {{ font-family: {FONT_FAMILY}; font-size: {FONT_SIZE}px; }}</style>"#
        );
        let _ = writeln!(
            &mut svg,
            r#"<rect width="{total_width}" height="{total_height}" fill="{BORDER_COLOR}" rx="4" />"#
        );
        let _ = writeln!(
            &mut svg,
            r#"<rect x="1" y="1" width="{}" height="{TITLE_HEIGHT}" fill="{TITLE_BG}" rx="3" />"#,
            total_width - 2
        );
        let _ = writeln!(
            &mut svg,
            r#"<text x="{}" y="{}" fill="{ROW_TEXT}" font-size="{TITLE_FONT_SIZE}px" font-weight="bold" text-anchor="middle">{}</text>"#,
            total_width / 2,
            TITLE_HEIGHT / 2 + TITLE_FONT_SIZE / 2 - 2,
            escape_xml(REPORT_TITLE)
        );

        let header_y = TITLE_HEIGHT + 1;
        let _ = writeln!(
            &mut svg,
            r#"<rect x="1" y="{header_y}" width="{}" height="{LINE_HEIGHT}" fill="{HEADER_BG}" />"#,
            total_width - 2
        );
        let mut x = CELL_PADDING;
        for (header, width) in HEADERS.iter().zip(&col_widths) {
            let _ = writeln!(
                &mut svg,
                r#"<text x="{x}" y="{}" fill="{HEADER_TEXT}">{}</text>"#,
                header_y + LINE_HEIGHT / 2 + FONT_SIZE / 2 - 2,
                escape_xml(header)
            );
            x += width + CELL_PADDING;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let y = header_y + LINE_HEIGHT * (1 + row_idx as u32);
            let bg = if row_idx % 2 == 0 {
                ROW_BG_EVEN
            } else {
                ROW_BG_ODD
            };
            let _ = writeln!(
                &mut svg,
                r#"<rect x="1" y="{y}" width="{}" height="{LINE_HEIGHT}" fill="{bg}" />"#,
                total_width - 2
            );

            let outcome_color = if self.breakdown.lines[row_idx].balance.is_negative() {
                PAY_TEXT
            } else {
                RECEIVE_TEXT
            };
            let mut x = CELL_PADDING;
            for (col_idx, (cell, width)) in row.iter().zip(&col_widths).enumerate() {
                let fill = if col_idx == 2 { outcome_color } else { ROW_TEXT };
                let _ = writeln!(
                    &mut svg,
                    r#"<text x="{x}" y="{}" fill="{fill}">{}</text>"#,
                    y + LINE_HEIGHT / 2 + FONT_SIZE / 2 - 2,
                    escape_xml(cell)
                );
                x += width + CELL_PADDING;
            }
        }

        let summary_start = header_y + LINE_HEIGHT * (1 + rows.len() as u32);
        for (idx, line) in summary.iter().enumerate() {
            let y = summary_start + LINE_HEIGHT * idx as u32;
            let _ = writeln!(
                &mut svg,
                r#"<rect x="1" y="{y}" width="{}" height="{LINE_HEIGHT}" fill="{SUMMARY_BG}" />"#,
                total_width - 2
            );
            let _ = writeln!(
                &mut svg,
                r#"<text x="{CELL_PADDING}" y="{}" fill="{ROW_TEXT}" font-weight="bold">{}</text>"#,
                y + LINE_HEIGHT / 2 + FONT_SIZE / 2 - 2,
                escape_xml(line)
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

fn estimate_text_width(text: &str) -> u32 {
    let width = text
        .chars()
        .map(|c| if c.is_ascii() { CHAR_WIDTH } else { CHAR_WIDTH * 2.0 })
        .sum::<f32>();
    (width.ceil() as u32).max(20) + CELL_PADDING * 2
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evensplit_domain::{Money, Participant, SplitCalculator};
    use rstest::rstest;

    fn svg_for(entries: &[(&str, i64)]) -> String {
        let participants: Vec<Participant> = entries
            .iter()
            .map(|&(name, amount)| Participant::new(name, Money::from_major(amount)))
            .collect();
        let breakdown = SplitCalculator::split(&participants).expect("non-empty roster");
        SvgReportBuilder::new(&breakdown).build()
    }

    #[test]
    fn renders_every_row_and_the_summary() {
        let svg = svg_for(&[("Alice", 30), ("Bob", 10)]);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Group Expense Report"));
        assert!(svg.contains("Alice"));
        assert!(svg.contains("Bob"));
        assert!(svg.contains("has to receive $10.00"));
        assert!(svg.contains("has to pay $10.00"));
        assert!(svg.contains("Total: $40.00"));
        assert!(svg.contains("Each should pay: $20.00"));
    }

    #[rstest]
    #[case::angle_brackets("<Ann>", "&lt;Ann&gt;")]
    #[case::ampersand("A & B", "A &amp; B")]
    fn escapes_unsafe_names(#[case] name: &str, #[case] expected: &str) {
        let svg = svg_for(&[(name, 10)]);
        assert!(svg.contains(expected));
        assert!(!svg.contains(name));
    }
}
