use crate::decoder::decode_glyph;
use crate::errors::InspectError;
use crate::memory::Address;

/// The bytes of one decoded character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset of the first byte
    pub offset: usize,
    pub address: Address,
    /// Number of bytes, `1..=4`
    pub width: usize,
    pub glyph: String,
}

impl Segment {
    /// Addresses of every byte in the segment, first byte included
    pub fn byte_addresses(&self) -> impl Iterator<Item = Address> + '_ {
        (0..self.width).map(move |i| self.address + i as Address)
    }

    pub fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Layout of a text buffer: base address, byte length and character segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDescriptor {
    pub base_address: Address,
    pub byte_length: usize,
    pub segments: Vec<Segment>,
}

/// Split a text buffer into character segments
///
/// Scans from offset 0, decoding one character at a time and advancing by its
/// width, so every decode starts on a boundary this function computed itself.
/// An empty buffer gives a descriptor with no segments.
pub fn describe_text<B>(text: &B) -> Result<TextDescriptor, InspectError>
where
    B: AsRef<[u8]> + ?Sized,
{
    let bytes = text.as_ref();
    let base_address = bytes.as_ptr() as usize as Address;
    let mut segments = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let glyph = decode_glyph(bytes, offset)?;
        segments.push(Segment {
            offset,
            address: base_address + offset as Address,
            width: glyph.width,
            glyph: glyph.display,
        });
        offset += glyph.width;
    }

    tracing::debug!(
        base = format_args!("0x{:016x}", base_address),
        byte_length = bytes.len(),
        segments = segments.len(),
        "described text buffer"
    );

    Ok(TextDescriptor {
        base_address,
        byte_length: bytes.len(),
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_cover_the_buffer() {
        let text = "añ€🦀!";
        let desc = describe_text(text).unwrap();

        let widths: Vec<_> = desc.segments.iter().map(|s| s.width).collect();
        assert_eq!(widths, [1, 2, 3, 4, 1]);
        assert_eq!(widths.iter().sum::<usize>(), desc.byte_length);

        for pair in desc.segments.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset);
        }
    }

    #[test]
    fn byte_addresses_are_consecutive() {
        let text = String::from("€");
        let desc = describe_text(&text).unwrap();
        let addresses: Vec<_> = desc.segments[0].byte_addresses().collect();

        assert_eq!(addresses.len(), 3);
        assert_eq!(addresses[0], text.as_ptr() as usize as Address);
        assert_eq!(addresses[2], addresses[0] + 2);
    }

    #[test]
    fn raw_bytes_are_accepted() {
        let bytes: Vec<u8> = b"ok".to_vec();
        let desc = describe_text(&bytes).unwrap();
        assert_eq!(desc.segments[1].glyph, "'k'");
    }

    #[test]
    fn malformed_bytes_fail_without_segments() {
        let bytes: &[u8] = &[b'a', 0x80];
        assert!(describe_text(bytes).unwrap_err().is_internal());
    }

    #[test]
    fn empty_text_has_no_segments() {
        let desc = describe_text("").unwrap();
        assert_eq!(desc.byte_length, 0);
        assert!(desc.segments.is_empty());
    }
}
