use super::constants::{
    ADDRESS_WIDTH, FIELD_NAME_WIDTH, FIELD_PADDING_WIDTH, FIELD_SIZE_WIDTH, FIELD_TYPE_WIDTH,
    FIELD_VALUE_WIDTH,
};
use super::formatting::{border, fit_right, format_address, pad_left, pad_right, row, truncate_value};
use crate::descriptor::{FieldLayout, RecordDescriptor};

const COLUMNS: [(&str, usize); 6] = [
    ("Field Name", FIELD_NAME_WIDTH),
    ("Memory Address", ADDRESS_WIDTH),
    ("Value", FIELD_VALUE_WIDTH),
    ("Type", FIELD_TYPE_WIDTH),
    ("Size", FIELD_SIZE_WIDTH),
    ("Padding", FIELD_PADDING_WIDTH),
];

/// Render a record as a field table
///
/// One row per field: name, address, value (cut to 5 characters and `...` when
/// longer than 8), declared type, size and the padding inserted before the field.
pub fn render_record(desc: &RecordDescriptor) -> Vec<String> {
    let widths = COLUMNS.map(|(_, width)| width);
    let rule = border(&widths);

    let mut lines = vec![format!("[{} struct]", desc.type_name), rule.clone()];
    lines.push(row(&COLUMNS.map(|(title, width)| pad_right(title, width))));
    lines.push(rule.clone());

    for field in &desc.fields {
        lines.push(field_row(field));
    }
    lines.push(rule);

    if desc.trailing_padding > 0 {
        lines.push(format!(
            "{} byte(s) of trailing padding; {} bytes in total",
            desc.trailing_padding, desc.size
        ));
    }
    if desc.reordered {
        lines.push("Fields are listed in memory order; the compiler reordered them.".to_string());
    }

    lines
}

fn field_row(field: &FieldLayout) -> String {
    row(&[
        fit_right(field.name, FIELD_NAME_WIDTH),
        format_address(field.address),
        fit_right(&truncate_value(&field.value), FIELD_VALUE_WIDTH),
        fit_right(field.type_name, FIELD_TYPE_WIDTH),
        pad_left(&field.size.to_string(), FIELD_SIZE_WIDTH),
        pad_left(&field.padding.to_string(), FIELD_PADDING_WIDTH),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::describe_record;

    crate::record! {
        #[repr(C)]
        #[derive(Debug)]
        struct Labelled {
            id: u16,
            label: &'static str,
        }
    }

    #[test]
    fn table_layout() {
        let value = Labelled {
            id: 7,
            label: "a rather long label",
        };
        let lines = render_record(&describe_record(&value).unwrap());

        assert_eq!(lines[0], "[Labelled struct]");
        assert!(lines[2].starts_with("| Field Name "));
        assert!(lines[4].starts_with("| id "));
        assert!(lines[5].contains("| a rat...  |"));
        assert!(lines[5].contains("| &'static str "));
        assert!(lines[5].ends_with("|       16 |          6 |"));
        assert_eq!(lines[6], lines[1]);
        assert_eq!(lines.len(), 7);
    }
}
