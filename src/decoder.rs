//! Byte-sequence decoder for text buffers
//!
//! Splits an encoded buffer into characters using the UTF-8 lead-byte rule:
//!
//! ```text
//! 0x00..=0x7F  → 1 byte
//! 0x80..=0xBF  → continuation byte, never a valid start
//! 0xC0..=0xDF  → 2 bytes
//! 0xE0..=0xEF  → 3 bytes
//! 0xF0..=0xFF  → 4 bytes
//! ```

use crate::errors::InspectError;

/// One decoded character: its printable form and how many bytes it spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub display: String,
    pub width: usize,
}

/// Number of bytes announced by a lead byte, `None` for a continuation byte
pub fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0x80..=0xBF => None,
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        _ => Some(4),
    }
}

/// Decode the character starting at `offset`
///
/// Single-byte characters are shown in single quotes, multi-byte characters in
/// double quotes. Starting on a continuation byte, or on a lead byte whose
/// sequence runs past the end of the buffer, means the caller computed the
/// offset from the wrong position and is reported as
/// [`InspectError::InternalConsistency`].
pub fn decode_glyph(bytes: &[u8], offset: usize) -> Result<Glyph, InspectError> {
    let lead = *bytes
        .get(offset)
        .ok_or_else(|| InspectError::InternalConsistency {
            offset,
            byte: None,
            message: format!("offset is past the end of a {}-byte buffer", bytes.len()),
        })?;

    let width = sequence_width(lead).ok_or_else(|| InspectError::InternalConsistency {
        offset,
        byte: Some(lead),
        message: "continuation byte found at the start of a character".to_string(),
    })?;

    let raw = bytes
        .get(offset..offset + width)
        .ok_or_else(|| InspectError::InternalConsistency {
            offset,
            byte: Some(lead),
            message: format!(
                "{}-byte sequence is cut off by the end of the buffer",
                width
            ),
        })?;

    let display = if width == 1 {
        format_single_byte(lead)
    } else {
        format!("\"{}\"", String::from_utf8_lossy(raw))
    };

    Ok(Glyph { display, width })
}

fn format_single_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("'\\x{:02x}'", byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_quoted_byte() {
        let glyph = decode_glyph(b"Hi", 1).unwrap();
        assert_eq!(glyph.display, "'i'");
        assert_eq!(glyph.width, 1);
    }

    #[test]
    fn control_bytes_are_escaped() {
        let glyph = decode_glyph(b"\n", 0).unwrap();
        assert_eq!(glyph.display, "'\\x0a'");
    }

    #[test]
    fn multi_byte_widths() {
        let text = "é€🦀";
        let bytes = text.as_bytes();

        let two = decode_glyph(bytes, 0).unwrap();
        assert_eq!((two.display.as_str(), two.width), ("\"é\"", 2));

        let three = decode_glyph(bytes, 2).unwrap();
        assert_eq!((three.display.as_str(), three.width), ("\"€\"", 3));

        let four = decode_glyph(bytes, 5).unwrap();
        assert_eq!((four.display.as_str(), four.width), ("\"🦀\"", 4));
    }

    #[test]
    fn continuation_byte_is_internal_error() {
        let bytes = "é".as_bytes();
        let err = decode_glyph(bytes, 1).unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(
            err,
            InspectError::InternalConsistency {
                offset: 1,
                byte: Some(0xA9),
                ..
            }
        ));
    }

    #[test]
    fn truncated_sequence_is_internal_error() {
        let bytes = &"€".as_bytes()[..2];
        assert!(decode_glyph(bytes, 0).unwrap_err().is_internal());
    }

    #[test]
    fn offset_past_end_is_internal_error() {
        assert!(decode_glyph(b"a", 1).unwrap_err().is_internal());
    }

    #[test]
    fn lead_byte_table() {
        assert_eq!(sequence_width(0x41), Some(1));
        assert_eq!(sequence_width(0x80), None);
        assert_eq!(sequence_width(0xBF), None);
        assert_eq!(sequence_width(0xC3), Some(2));
        assert_eq!(sequence_width(0xE2), Some(3));
        assert_eq!(sequence_width(0xF0), Some(4));
    }
}
