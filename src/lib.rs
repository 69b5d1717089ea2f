//! # Introduction
//!
//! memlens draws ASCII diagrams of how live values sit in memory: the slots of
//! a growable sequence including spare capacity, the bytes of UTF-8 text
//! grouped into characters, and the fields of a record with the padding the
//! compiler inserted between them.
//!
//! ## Pipeline
//!
//! ```text
//! value → view / Inspect → descriptor → renderer → String → Transcript → viewer
//! ```
//!
//! 1. [`memory`]: addresses of borrowed values, [`memory::view::SequenceView`]
//!    over sequence storage, and the [`memory::shape::Inspect`] trait that
//!    exposes a record's fields (implemented by the [`record!`] macro).
//! 2. [`decoder`]: splits UTF-8 bytes into glyphs.
//! 3. [`descriptor`]: turns a value into a plain description of its layout.
//! 4. [`render`]: draws a description as lines of ASCII boxes.
//! 5. [`inspect`]: the one-call entry points combining the two.
//! 6. [`transcript`]: collects diagrams in order; [`gallery`] fills one with
//!    sample values.
//! 7. [`ui`]: ratatui viewer for a transcript; not part of the stable API.
//!
//! ```
//! let values = vec![1u8, 2, 3];
//! let diagram = memlens::inspect_sequence(&values).unwrap();
//! assert!(diagram.contains("[u8]"));
//! ```

pub mod decoder;
pub mod descriptor;
pub mod errors;
pub mod gallery;
pub mod inspect;
pub mod memory;
pub mod render;
pub mod transcript;
pub mod ui;

pub use errors::InspectError;
pub use inspect::{
    inspect_record, inspect_record_in_memory_order, inspect_sequence, inspect_sequence_pair,
    inspect_text,
};
