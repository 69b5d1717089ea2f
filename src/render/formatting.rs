//! Cell formatting and box drawing helpers
//!
//! Widths are measured in terminal columns, not bytes, so a `"€"` glyph pads
//! like any other one-column character and a wide CJK glyph counts twice.

use super::constants::{ADDRESS_WIDTH, COUNT_WIDTH, ELLIPSIS, INDENT, RECORD_VALUE_KEEP, RECORD_VALUE_LIMIT};
use crate::memory::Address;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn format_address(address: Address) -> String {
    format!("0x{:016x}", address)
}

pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left-align `text` in at least `width` columns; longer text is kept whole
pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// Right-align `text` in at least `width` columns
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", " ".repeat(padding), text)
}

pub(crate) fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
}

/// Shorten `text` to at most `width` columns, marking the cut with [`ELLIPSIS`]
pub(crate) fn fit(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(ELLIPSIS.len());
    let mut result = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push_str(ELLIPSIS);
    result
}

/// [`fit`] then [`pad_right`]: a cell of exactly `width` columns
pub(crate) fn fit_right(text: &str, width: usize) -> String {
    pad_right(&fit(text, width), width)
}

/// Record values wider than the limit keep their first few columns
pub(crate) fn truncate_value(value: &str) -> String {
    if display_width(value) <= RECORD_VALUE_LIMIT {
        return value.to_string();
    }

    let mut kept = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > RECORD_VALUE_KEEP {
            break;
        }
        kept.push(ch);
        used += w;
    }
    format!("{}{}", kept, ELLIPSIS)
}

/// `+----+------+` for cells of the given content widths
pub(crate) fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// `| a | b |` from cells already padded to their widths
pub(crate) fn row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Total columns of a box drawn with [`border`]
pub(crate) fn box_width(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 3).sum::<usize>() + 1
}

pub(crate) fn indent(line: &str) -> String {
    format!("{}{}", " ".repeat(INDENT), line)
}

/// The `|`, `v`, `|` arrow from a header box down to its body, one per column
pub(crate) fn connector(columns: &[usize]) -> Vec<String> {
    ['|', 'v', '|']
        .iter()
        .map(|&mark| {
            let mut line = String::new();
            for &column in columns {
                line.push_str(&" ".repeat(column.saturating_sub(line.len())));
                line.push(mark);
            }
            line
        })
        .collect()
}

/// Header box of a sequence: label, length and capacity
pub(crate) fn sequence_header(
    label: &str,
    base_address: Address,
    length: usize,
    capacity: usize,
) -> Vec<String> {
    let widths = [ADDRESS_WIDTH, COUNT_WIDTH, COUNT_WIDTH];
    let rule = border(&widths);
    vec![
        rule.clone(),
        row(&[
            fit_right(label, ADDRESS_WIDTH),
            center("Len", COUNT_WIDTH),
            center("Cap", COUNT_WIDTH),
        ]),
        rule.clone(),
        row(&[
            format_address(base_address),
            pad_left(&length.to_string(), COUNT_WIDTH),
            pad_left(&capacity.to_string(), COUNT_WIDTH),
        ]),
        rule,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::constants::FIELD_VALUE_WIDTH;

    #[test]
    fn addresses_are_zero_padded() {
        assert_eq!(format_address(0xbeef), "0x000000000000beef");
        assert_eq!(format_address(0xbeef).len(), ADDRESS_WIDTH);
    }

    #[test]
    fn padding_counts_columns() {
        assert_eq!(pad_right("\"€\"", 5), "\"€\"  ");
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(center("Len", 5), " Len ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn fit_marks_the_cut() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("abcdefghij", 8), "abcde...");
        assert_eq!(display_width(&fit_right("abcdefghij", 8)), 8);
    }

    #[test]
    fn record_values_truncate_past_eight_chars() {
        assert_eq!(truncate_value("12345678"), "12345678");
        assert_eq!(truncate_value("123456789"), "12345...");
        assert_eq!(truncate_value("\"Hello, world\""), "\"Hell...");
    }

    #[test]
    fn record_values_truncate_by_columns() {
        // 7 characters, 14 columns
        assert_eq!(truncate_value("日本語テキスト"), "日本...");
        assert_eq!(truncate_value("日本語"), "日本語");
        // never cut again by the cell
        let cell = fit_right(&truncate_value("日本語テキスト"), FIELD_VALUE_WIDTH);
        assert_eq!(display_width(&cell), FIELD_VALUE_WIDTH);
        assert!(cell.starts_with("日本..."));
    }

    #[test]
    fn borders_and_rows_line_up() {
        let widths = [3, 5];
        let rule = border(&widths);
        let line = row(&[pad_right("a", 3), pad_left("b", 5)]);

        assert_eq!(rule, "+-----+-------+");
        assert_eq!(line, "| a   |     b |");
        assert_eq!(rule.len(), box_width(&widths));
        assert_eq!(line.len(), box_width(&widths));
    }

    #[test]
    fn connector_places_marks() {
        let lines = connector(&[2, 6]);
        assert_eq!(lines, ["  |   |", "  v   v", "  |   |"]);
    }
}
