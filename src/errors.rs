//! Error types for memory inspection
//!
//! This module defines [`InspectError`], the single error type returned by every
//! extractor and `inspect_*` entry point.
//!
//! All errors are raised while the descriptor is being built, before any line of a
//! diagram is produced, so a failed call never emits a partial diagram.

use std::fmt;

/// Errors that can occur while inspecting a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// The value is neither a record nor a pointer to one
    NotARecord { type_name: String },

    /// The value has no backing storage whose address could be shown
    UnstableAddress { what: String, reason: &'static str },

    /// The text decoder was asked to start a character inside another one
    InternalConsistency {
        offset: usize,
        byte: Option<u8>,
        message: String,
    },

    /// Field addresses go backwards in declaration order
    FieldOrder {
        record: &'static str,
        field: &'static str,
        previous: &'static str,
    },

    /// A sequence window reaches past the initialized elements
    WindowOutOfRange {
        start: usize,
        end: usize,
        length: usize,
    },

    /// A record schema names the same field twice
    DuplicateField {
        record: &'static str,
        field: &'static str,
    },
}

impl InspectError {
    /// Whether this error signals a bug in the extractor rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, InspectError::InternalConsistency { .. })
    }
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::NotARecord { type_name } => {
                write!(f, "'{}' is not a record or a pointer to one", type_name)
            }
            InspectError::UnstableAddress { what, reason } => {
                write!(f, "Cannot show addresses of {}: {}", what, reason)
            }
            InspectError::InternalConsistency {
                offset,
                byte,
                message,
            } => {
                if let Some(byte) = byte {
                    write!(
                        f,
                        "Internal consistency error at byte offset {} (0x{:02x}): {}",
                        offset, byte, message
                    )
                } else {
                    write!(
                        f,
                        "Internal consistency error at byte offset {}: {}",
                        offset, message
                    )
                }
            }
            InspectError::FieldOrder {
                record,
                field,
                previous,
            } => {
                write!(
                    f,
                    "Field '{}' of '{}' starts before the end of field '{}'; \
                     the declaration order is not the memory order",
                    field, record, previous
                )
            }
            InspectError::WindowOutOfRange { start, end, length } => {
                write!(
                    f,
                    "Window {}..{} is out of range for a sequence of length {}",
                    start, end, length
                )
            }
            InspectError::DuplicateField { record, field } => {
                write!(f, "Record '{}' lists field '{}' twice", record, field)
            }
        }
    }
}

impl std::error::Error for InspectError {}
