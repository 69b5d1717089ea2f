//! ASCII diagram rendering
//!
//! Stateless functions turning descriptors into lines of text. Output depends
//! only on the descriptor, so rendering the same descriptor twice gives the same
//! bytes.
//!
//! # Diagram Modules
//!
//! - [`sequence`]: one sequence, every allocated slot with its address and offset
//! - [`pair`]: two sequences side by side, element by element
//! - [`text`]: a text buffer, one row per byte, glyphs on character starts
//! - [`record`]: a record's field table with sizes and padding
//!
//! Column widths and markers live in [`constants`]; `formatting` holds the
//! shared cell and box helpers.

pub mod constants;
mod formatting;

pub mod pair;
pub mod record;
pub mod sequence;
pub mod text;

pub use pair::{pair_footer, render_sequence_pair, PairFooter};
pub use record::render_record;
pub use sequence::render_sequence;
pub use text::render_text;
