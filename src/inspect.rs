//! One-call inspection: extract a descriptor, render it, return the diagram
//!
//! Each function fails before producing any text when the value cannot be
//! described; on success the diagram ends with a newline.

use crate::descriptor::{
    describe_record, describe_record_in_memory_order, describe_sequence, describe_text,
};
use crate::errors::InspectError;
use crate::memory::shape::Inspect;
use crate::memory::view::AsSequence;
use crate::render::{render_record, render_sequence, render_sequence_pair, render_text};
use std::fmt;

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Diagram of a vector, slice, array or [`SequenceView`]
///
/// [`SequenceView`]: crate::memory::view::SequenceView
pub fn inspect_sequence<S>(sequence: &S) -> Result<String, InspectError>
where
    S: AsSequence + ?Sized,
    S::Item: fmt::Debug,
{
    let descriptor = describe_sequence(sequence)?;
    Ok(finish(render_sequence(&descriptor)))
}

/// Side-by-side diagram of two sequences with the same element type
pub fn inspect_sequence_pair<A, B>(left: &A, right: &B) -> Result<String, InspectError>
where
    A: AsSequence + ?Sized,
    B: AsSequence<Item = A::Item> + ?Sized,
    A::Item: fmt::Debug,
{
    let left = describe_sequence(left)?;
    let right = describe_sequence(right)?;
    Ok(finish(render_sequence_pair(&left, &right)))
}

/// Byte-by-byte diagram of a text buffer (`str`, `String`, `[u8]`, `Vec<u8>`)
pub fn inspect_text<B>(text: &B) -> Result<String, InspectError>
where
    B: AsRef<[u8]> + ?Sized,
{
    let descriptor = describe_text(text)?;
    Ok(finish(render_text(&descriptor)))
}

/// Field table of a record, or of the record a pointer points to
pub fn inspect_record(value: &dyn Inspect) -> Result<String, InspectError> {
    let descriptor = describe_record(value)?;
    Ok(finish(render_record(&descriptor)))
}

/// Field table of a record with its fields in memory order
pub fn inspect_record_in_memory_order(value: &dyn Inspect) -> Result<String, InspectError> {
    let descriptor = describe_record_in_memory_order(value)?;
    Ok(finish(render_record(&descriptor)))
}
