use super::value_text;
use crate::errors::InspectError;
use crate::memory::view::AsSequence;
use crate::memory::{short_type_name, Address};
use std::fmt;
use std::mem;

/// One storage slot of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub address: Address,
    /// Byte offset from the base address
    pub offset: usize,
    /// `None` for slots past the logical length
    pub value: Option<String>,
}

impl Slot {
    pub fn is_unused(&self) -> bool {
        self.value.is_none()
    }
}

/// Layout of a sequence: header fields plus one slot per unit of capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDescriptor {
    pub base_address: Address,
    pub length: usize,
    pub capacity: usize,
    pub element_size: usize,
    pub element_type: String,
    pub slots: Vec<Slot>,
}

impl SequenceDescriptor {
    /// Slots holding live elements
    pub fn live_slots(&self) -> &[Slot] {
        &self.slots[..self.length]
    }
}

/// Read the header and every slot of a sequence
///
/// Slots `0..capacity` are listed; the ones at or past the length carry no value.
/// A sequence with nothing allocated yet has a header and no slots. Zero-sized
/// element types report [`InspectError::UnstableAddress`]: every element shares
/// one dangling address.
pub fn describe_sequence<S>(sequence: &S) -> Result<SequenceDescriptor, InspectError>
where
    S: AsSequence + ?Sized,
    S::Item: fmt::Debug,
{
    let view = sequence.sequence_view();
    let element_size = mem::size_of::<S::Item>();
    let element_type = short_type_name::<S::Item>();

    if element_size == 0 {
        return Err(InspectError::UnstableAddress {
            what: format!("a sequence of {}", element_type),
            reason: "zero-sized elements occupy no storage",
        });
    }

    let items = view.items();
    let slots = (0..view.capacity())
        .map(|index| Slot {
            index,
            address: view.slot_address(index),
            offset: index * element_size,
            value: items.get(index).map(|item| value_text(item)),
        })
        .collect();

    tracing::debug!(
        base = format_args!("0x{:016x}", view.base_address()),
        length = view.len(),
        capacity = view.capacity(),
        element_size,
        "described sequence of {}",
        element_type
    );

    Ok(SequenceDescriptor {
        base_address: view.base_address(),
        length: view.len(),
        capacity: view.capacity(),
        element_size,
        element_type,
        slots,
    })
}
