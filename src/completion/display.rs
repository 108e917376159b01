use crate::config::CompletionLayout;
use unicode_width::UnicodeWidthStr;

/// Lays candidates out in fixed-width cells, a set number per row.
///
/// Rows end in `\r\n` because the terminal is in raw mode while this prints.
pub fn format_candidates(candidates: &[String], layout: CompletionLayout) -> String {
    let columns = layout.columns.max(1);
    let mut out = String::from("\r\n");

    for (i, candidate) in candidates.iter().enumerate() {
        out.push_str(candidate);
        let width = candidate.as_str().width();
        if width < layout.column_width {
            out.push_str(&" ".repeat(layout.column_width - width));
        }
        if (i + 1) % columns == 0 {
            out.push_str("\r\n");
        }
    }
    if candidates.len() % columns != 0 {
        out.push_str("\r\n");
    }
    out
}
