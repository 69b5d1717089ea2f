use super::constants::{ADDRESS_WIDTH, INDENT, SLOT_OFFSET_WIDTH, SLOT_VALUE_WIDTH, UNUSED_MARKER};
use super::formatting::{
    border, center, connector, fit_right, format_address, indent, pad_left, row, sequence_header,
};
use crate::descriptor::{SequenceDescriptor, Slot};

/// Render one sequence: header box, arrow, then one row per allocated slot
///
/// ```text
///     +--------------------+-------+-------+
///     | [i32]              |  Len  |  Cap  |
///     +--------------------+-------+-------+
///     | 0x000055d0c3a1b2c0 |     2 |     3 |
///     +--------------------+-------+-------+
///         |
///         v
///         |
///     +--------------------------+--------------------+--------+
///     | (i32) 1                  | 0x000055d0c3a1b2c0 |     +0 |
///     +--------------------------+--------------------+--------+
///     | (i32) 2                  | 0x000055d0c3a1b2c4 |     +4 |
///     +--------------------------+--------------------+--------+
///     |          UNUSED          | 0x000055d0c3a1b2c8 |     +8 |
///     +--------------------------+--------------------+--------+
/// ```
pub fn render_sequence(desc: &SequenceDescriptor) -> Vec<String> {
    let label = format!("[{}]", desc.element_type);
    let mut lines: Vec<String> =
        sequence_header(&label, desc.base_address, desc.length, desc.capacity)
            .iter()
            .map(|line| indent(line))
            .collect();

    lines.extend(connector(&[INDENT * 2]));

    let rule = indent(&border(&[SLOT_VALUE_WIDTH, ADDRESS_WIDTH, SLOT_OFFSET_WIDTH]));
    lines.push(rule.clone());
    for slot in &desc.slots {
        lines.push(indent(&slot_row(slot, &desc.element_type)));
        lines.push(rule.clone());
    }

    lines
}

fn slot_row(slot: &Slot, element_type: &str) -> String {
    let value_cell = match &slot.value {
        Some(value) => fit_right(&format!("({}) {}", element_type, value), SLOT_VALUE_WIDTH),
        None => center(UNUSED_MARKER, SLOT_VALUE_WIDTH),
    };

    row(&[
        value_cell,
        format_address(slot.address),
        pad_left(&format!("+{}", slot.offset), SLOT_OFFSET_WIDTH),
    ])
}
