//! Side-by-side rendering of two sequences
//!
//! Row `i` of the body shows element `i` of both sequences. When one sequence
//! runs out, its box is closed on that very row and its column stays blank
//! afterwards, so the row where the two diverge is visible at a glance:
//!
//! ```text
//!     | 0x...000 | (i32   ) 1  |    | 0x...100 | (i32   ) 1  |
//!     | 0x...004 | (i32   ) 2  |    | 0x...104 | (i32   ) 2  |
//!     +----------+-------------+    | 0x...108 | (i32   ) 3  |
//!                                   | 0x...10c | (i32   ) 4  |
//!                                   +----------+-------------+
//! ```

use super::constants::{ADDRESS_WIDTH, INDENT, PAIR_GAP, PAIR_TYPE_WIDTH, PAIR_VALUE_WIDTH};
use super::formatting::{
    border, box_width, connector, display_width, fit_right, format_address, pad_right, row,
    sequence_header,
};
use crate::descriptor::SequenceDescriptor;
use std::cmp::Ordering;

/// Which closing footer ends a pair diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFooter {
    /// Same length: both boxes close on the last line
    Equal,
    /// The left sequence is longer: only its box is still open
    LeftLonger,
    /// The right sequence is longer: only its box is still open
    RightLonger,
}

pub fn pair_footer(left_length: usize, right_length: usize) -> PairFooter {
    match left_length.cmp(&right_length) {
        Ordering::Equal => PairFooter::Equal,
        Ordering::Greater => PairFooter::LeftLonger,
        Ordering::Less => PairFooter::RightLonger,
    }
}

const BODY_WIDTHS: [usize; 2] = [ADDRESS_WIDTH, PAIR_VALUE_WIDTH];

/// Column where the right half starts
fn right_column() -> usize {
    INDENT + box_width(&BODY_WIDTHS) + PAIR_GAP
}

fn both(left: &str, right: &str) -> String {
    let prefix = " ".repeat(INDENT);
    let gap = right_column().saturating_sub(INDENT + display_width(left));
    format!("{}{}{}{}", prefix, left, " ".repeat(gap), right)
}

fn left_only(left: &str) -> String {
    format!("{}{}", " ".repeat(INDENT), left)
}

fn right_only(right: &str) -> String {
    format!("{}{}", " ".repeat(right_column()), right)
}

fn element_row(desc: &SequenceDescriptor, index: usize) -> String {
    let slot = &desc.slots[index];
    let value = slot.value.as_deref().unwrap_or_default();
    let display = format!(
        "({}) {}",
        pad_right(&desc.element_type, PAIR_TYPE_WIDTH),
        value
    );
    row(&[
        format_address(slot.address),
        fit_right(&display, PAIR_VALUE_WIDTH),
    ])
}

/// Render two sequences next to each other, element by element
///
/// Both halves share the same row grid. While `i` is below both lengths, both
/// columns hold an element; at `i == left.length` (left shorter) the left box is
/// closed on the same line as the right element, and symmetrically for the right
/// side. Exactly one [`PairFooter`] variant closes whatever is still open.
pub fn render_sequence_pair(left: &SequenceDescriptor, right: &SequenceDescriptor) -> Vec<String> {
    let mut lines = Vec::new();

    let left_label = format!("#1 [{}]", left.element_type);
    let right_label = format!("#2 [{}]", right.element_type);
    let left_header = sequence_header(&left_label, left.base_address, left.length, left.capacity);
    let right_header =
        sequence_header(&right_label, right.base_address, right.length, right.capacity);
    for (l, r) in left_header.iter().zip(&right_header) {
        lines.push(both(l, r));
    }

    lines.extend(connector(&[INDENT * 2, right_column() + INDENT]));

    let rule = border(&BODY_WIDTHS);
    lines.push(both(&rule, &rule));

    for i in 0..left.length.max(right.length) {
        let line = if i < left.length && i < right.length {
            both(&element_row(left, i), &element_row(right, i))
        } else if i == left.length {
            both(&rule, &element_row(right, i))
        } else if i == right.length {
            both(&element_row(left, i), &rule)
        } else if i > right.length {
            left_only(&element_row(left, i))
        } else {
            right_only(&element_row(right, i))
        };
        lines.push(line);
    }

    lines.push(match pair_footer(left.length, right.length) {
        PairFooter::Equal => both(&rule, &rule),
        PairFooter::LeftLonger => left_only(&rule),
        PairFooter::RightLonger => right_only(&rule),
    });

    lines
}
