// Column widths and markers shared by every diagram

/// Left margin of sequence and text diagrams
pub const INDENT: usize = 4;

/// `0x` followed by 16 hex digits
pub const ADDRESS_WIDTH: usize = 18;

/// Length and capacity cells of a header box
pub const COUNT_WIDTH: usize = 5;

/// Value cell of a single-sequence slot row
pub const SLOT_VALUE_WIDTH: usize = 24;

/// `+offset` cell of a single-sequence slot row
pub const SLOT_OFFSET_WIDTH: usize = 6;

/// Value cell of a sequence-pair row
pub const PAIR_VALUE_WIDTH: usize = 23;

/// Minimum width of the element type inside `(type) value`
pub const PAIR_TYPE_WIDTH: usize = 6;

/// Blank columns between the two halves of a sequence pair
pub const PAIR_GAP: usize = 4;

/// Glyph cell of a text row
pub const GLYPH_WIDTH: usize = 12;

/// Record table columns: name, address, value, type, size, padding
pub const FIELD_NAME_WIDTH: usize = 24;
pub const FIELD_VALUE_WIDTH: usize = 9;
pub const FIELD_TYPE_WIDTH: usize = 16;
pub const FIELD_SIZE_WIDTH: usize = 8;
pub const FIELD_PADDING_WIDTH: usize = 10;

/// Record values longer than this many characters are truncated...
pub const RECORD_VALUE_LIMIT: usize = 8;
/// ...to this many characters plus [`ELLIPSIS`]
pub const RECORD_VALUE_KEEP: usize = 5;

pub const ELLIPSIS: &str = "...";
pub const UNUSED_MARKER: &str = "UNUSED";
