//! Memory descriptor extraction
//!
//! Each extractor borrows a live value, reads its layout and returns an owned,
//! immutable descriptor that the renderer turns into a diagram:
//!
//! - [`describe_sequence`] → [`SequenceDescriptor`]
//! - [`describe_text`] → [`TextDescriptor`]
//! - [`describe_record`] / [`describe_record_in_memory_order`] → [`RecordDescriptor`]
//!
//! Descriptors own no resources and hold no borrow of the inspected value; the
//! displayed element and field values are captured as strings at extraction time.

pub mod record;
pub mod sequence;
pub mod text;

pub use record::{describe_record, describe_record_in_memory_order, FieldLayout, RecordDescriptor};
pub use sequence::{describe_sequence, SequenceDescriptor, Slot};
pub use text::{describe_text, Segment, TextDescriptor};

use std::fmt;

/// `Debug` form of a value, with the quotes around a string value removed
pub(crate) fn value_text<T: fmt::Debug + ?Sized>(value: &T) -> String {
    let text = format!("{:?}", value);
    match text.strip_prefix('"').and_then(|inner| inner.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::value_text;

    #[test]
    fn strings_lose_their_quotes() {
        assert_eq!(value_text("heartbeat"), "heartbeat");
        assert_eq!(value_text(&String::from("a \"b\"")), "a \\\"b\\\"");
        assert_eq!(value_text(&42), "42");
        assert_eq!(value_text(&'c'), "'c'");
        assert_eq!(value_text(&vec!["x"]), "[\"x\"]");
        assert_eq!(value_text(&Some("x")), "Some(\"x\")");
    }
}
