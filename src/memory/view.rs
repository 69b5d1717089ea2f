//! Borrowed views over contiguous sequences
//!
//! A [`SequenceView`] is the "pointer + length + capacity" header of a sequence,
//! together with a borrow of its initialized elements. Views are produced by the
//! [`AsSequence`] trait for vectors, slices and arrays, and by
//! [`SequenceView::window`] for re-slices that share a vector's storage.

use super::{address_of, Address};
use crate::errors::InspectError;
use std::ops::Range;

/// Header of a contiguous sequence plus its initialized elements
#[derive(Debug)]
pub struct SequenceView<'a, T> {
    items: &'a [T],
    base: Address,
    capacity: usize,
}

// Manual impls: a view is copyable whatever `T` is.
impl<T> Clone for SequenceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceView<'_, T> {}

impl<'a, T> SequenceView<'a, T> {
    /// View a vector, including its spare capacity
    pub fn of_vec(vec: &'a Vec<T>) -> Self {
        SequenceView {
            items: vec.as_slice(),
            base: vec.as_ptr() as usize as Address,
            capacity: vec.capacity(),
        }
    }

    /// View a slice; a slice owns no spare capacity
    pub fn of_slice(slice: &'a [T]) -> Self {
        SequenceView {
            items: slice,
            base: slice.as_ptr() as usize as Address,
            capacity: slice.len(),
        }
    }

    /// Re-slice a vector without copying
    ///
    /// The window starts at `range.start`, holds the elements of `range`, and keeps
    /// every slot of the vector's allocation after `range.start` as its capacity,
    /// so the window and the vector visibly share one allocation.
    pub fn window(vec: &'a Vec<T>, range: Range<usize>) -> Result<Self, InspectError> {
        let items = vec
            .get(range.clone())
            .ok_or(InspectError::WindowOutOfRange {
                start: range.start,
                end: range.end,
                length: vec.len(),
            })?;

        Ok(SequenceView {
            items,
            base: vec.as_ptr().wrapping_add(range.start) as usize as Address,
            capacity: vec.capacity() - range.start,
        })
    }

    pub fn base_address(&self) -> Address {
        self.base
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The initialized elements, `0..len()`
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Address of slot `index`, whether or not it is initialized
    pub fn slot_address(&self, index: usize) -> Address {
        self.base + (index * std::mem::size_of::<T>()) as Address
    }
}

/// Anything that can be inspected as a contiguous sequence
pub trait AsSequence {
    type Item;

    fn sequence_view(&self) -> SequenceView<'_, Self::Item>;
}

impl<T> AsSequence for Vec<T> {
    type Item = T;

    fn sequence_view(&self) -> SequenceView<'_, T> {
        SequenceView::of_vec(self)
    }
}

impl<T> AsSequence for [T] {
    type Item = T;

    fn sequence_view(&self) -> SequenceView<'_, T> {
        SequenceView::of_slice(self)
    }
}

impl<T, const N: usize> AsSequence for [T; N] {
    type Item = T;

    fn sequence_view(&self) -> SequenceView<'_, T> {
        SequenceView::of_slice(self.as_slice())
    }
}

impl<T> AsSequence for SequenceView<'_, T> {
    type Item = T;

    fn sequence_view(&self) -> SequenceView<'_, T> {
        *self
    }
}

impl<T> AsSequence for Box<[T]> {
    type Item = T;

    fn sequence_view(&self) -> SequenceView<'_, T> {
        SequenceView::of_slice(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_view_reports_capacity() {
        let mut values: Vec<u32> = Vec::with_capacity(8);
        values.extend([1, 2, 3]);
        let view = values.sequence_view();

        assert_eq!(view.len(), 3);
        assert_eq!(view.capacity(), 8);
        assert_eq!(view.base_address(), address_of(&values[0]));
        assert_eq!(view.slot_address(2), address_of(&values[2]));
    }

    #[test]
    fn slice_capacity_equals_length() {
        let values = [1u8, 2, 3, 4];
        let view = values[1..].sequence_view();
        assert_eq!(view.capacity(), 3);
        assert_eq!(view.base_address(), address_of(&values[1]));
    }

    #[test]
    fn window_shares_storage() {
        let values: Vec<u64> = vec![10, 20, 30, 40, 50];
        let window = SequenceView::window(&values, 1..3).unwrap();

        assert_eq!(window.base_address(), address_of(&values[1]));
        assert_eq!(window.items(), &[20, 30]);
        assert_eq!(window.capacity(), values.capacity() - 1);
    }

    #[test]
    fn window_past_length_is_rejected() {
        let values = vec![1, 2, 3];
        assert_eq!(
            SequenceView::window(&values, 2..5).unwrap_err(),
            InspectError::WindowOutOfRange {
                start: 2,
                end: 5,
                length: 3
            }
        );
    }
}
