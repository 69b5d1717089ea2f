use super::constants::{ADDRESS_WIDTH, COUNT_WIDTH, GLYPH_WIDTH, INDENT};
use super::formatting::{
    border, center, connector, fit_right, format_address, indent, pad_left, pad_right, row,
};
use crate::descriptor::{Segment, TextDescriptor};

const TEXT_LABEL: &str = "Text";

/// Render a text buffer one byte per row
///
/// The first byte of each character carries the glyph; its continuation bytes
/// get rows of their own with an empty glyph cell, so every byte address is
/// listed. Text buffers are length-only: there is no capacity column.
pub fn render_text(desc: &TextDescriptor) -> Vec<String> {
    let header_widths = [ADDRESS_WIDTH, COUNT_WIDTH];
    let header_rule = border(&header_widths);
    let mut lines = vec![
        indent(&header_rule),
        indent(&row(&[
            pad_right(TEXT_LABEL, ADDRESS_WIDTH),
            center("Len", COUNT_WIDTH),
        ])),
        indent(&header_rule),
        indent(&row(&[
            format_address(desc.base_address),
            pad_left(&desc.byte_length.to_string(), COUNT_WIDTH),
        ])),
        indent(&header_rule),
    ];

    lines.extend(connector(&[INDENT * 2]));

    let rule = indent(&border(&[ADDRESS_WIDTH, GLYPH_WIDTH]));
    lines.push(rule.clone());
    for segment in &desc.segments {
        lines.extend(segment_rows(segment));
        lines.push(rule.clone());
    }

    lines
}

fn segment_rows(segment: &Segment) -> impl Iterator<Item = String> + '_ {
    segment.byte_addresses().enumerate().map(move |(i, address)| {
        let glyph = if i == 0 { segment.glyph.as_str() } else { "" };
        indent(&row(&[format_address(address), fit_right(glyph, GLYPH_WIDTH)]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::describe_text;

    #[test]
    fn continuation_bytes_get_blank_rows() {
        let lines = render_text(&describe_text("€").unwrap());
        let body = &lines[9..];

        assert_eq!(body.len(), 4);
        assert!(body[0].contains("\"€\""));
        assert!(body[1].ends_with(&format!("| {} |", " ".repeat(GLYPH_WIDTH))));
        assert!(body[2].ends_with(&format!("| {} |", " ".repeat(GLYPH_WIDTH))));
        assert!(body[3].trim_start().starts_with('+'));
    }

    #[test]
    fn header_shows_byte_length() {
        let lines = render_text(&describe_text("héllo").unwrap());
        assert!(lines[3].ends_with("|     6 |"));
    }

    #[test]
    fn empty_text_draws_an_empty_body() {
        let lines = render_text(&describe_text("").unwrap());
        assert_eq!(lines.len(), 5 + 3 + 1);
        assert!(lines[3].ends_with("|     0 |"));
    }
}
