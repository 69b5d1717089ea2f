//! Static reflection for record inspection
//!
//! A type opts into record inspection by implementing [`Inspect`] and returning
//! [`Shape::Record`] with its fields in declaration order. The [`record!`] macro
//! writes that implementation from the struct definition itself:
//!
//! ```
//! memlens::record! {
//!     #[repr(C)]
//!     #[derive(Debug)]
//!     pub struct Sample {
//!         pub a: i32,
//!         pub b: i8,
//!         pub c: i32,
//!     }
//! }
//! ```
//!
//! Primitives, strings, collections and pointer types implement [`Inspect`] in
//! this module so they can appear as record fields. Pointer types report
//! [`Shape::Pointer`] wrapping the shape of their target, which is how record
//! inspection dereferences a `&Sample` or `Box<Sample>`.
//!
//! [`record!`]: crate::record

use super::{short_type_name, Address};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// What kind of value an [`Inspect`] implementor is
#[derive(Debug)]
pub enum Shape<'a> {
    /// A single value with no inspectable structure
    Scalar,
    /// A collection; inspect it with the sequence extractor instead
    Sequence,
    /// A pointer; holds the shape of its target
    Pointer(Box<Shape<'a>>),
    /// A flat aggregate with named fields
    Record(RecordShape<'a>),
}

/// A record's name, location and ordered field list
#[derive(Debug)]
pub struct RecordShape<'a> {
    pub name: &'static str,
    pub address: Address,
    pub size: usize,
    pub fields: Vec<FieldRef<'a>>,
}

/// One declared field, borrowed from a live record
#[derive(Debug)]
pub struct FieldRef<'a> {
    pub name: &'static str,
    pub declared_type: &'static str,
    pub value: &'a dyn Inspect,
}

/// Values whose layout can be inspected
pub trait Inspect: fmt::Debug {
    fn shape(&self) -> Shape<'_>;

    fn type_name(&self) -> String {
        short_type_name::<Self>()
    }
}

macro_rules! scalar_shapes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar
                }
            }
        )*
    };
}

scalar_shapes!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    str, String,
);

impl<T: fmt::Debug> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T: fmt::Debug> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence
    }
}

impl<T: fmt::Debug> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence
    }
}

impl<T: fmt::Debug, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence
    }
}

impl<T: fmt::Debug> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Box::new((**self).shape()))
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Box::new((**self).shape()))
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Box::new((**self).shape()))
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Box::new((**self).shape()))
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(Box::new((**self).shape()))
    }
}

/// Declare a struct and implement [`Inspect`] for it
///
/// Fields are listed in declaration order with their declared type as written.
/// Every field type must itself implement [`Inspect`], and the struct must
/// implement `Debug` (derive it in the attribute list). Add `#[repr(C)]` when the
/// diagram should follow declaration order exactly; default-representation
/// structs may be reordered by the compiler and are best shown with
/// [`describe_record_in_memory_order`].
///
/// [`describe_record_in_memory_order`]: crate::descriptor::describe_record_in_memory_order
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::memory::shape::Inspect for $name {
            fn shape(&self) -> $crate::memory::shape::Shape<'_> {
                $crate::memory::shape::Shape::Record($crate::memory::shape::RecordShape {
                    name: stringify!($name),
                    address: $crate::memory::address_of(self),
                    size: ::std::mem::size_of_val(self),
                    fields: ::std::vec![
                        $(
                            $crate::memory::shape::FieldRef {
                                name: stringify!($field),
                                declared_type: stringify!($ty),
                                value: &self.$field,
                            },
                        )*
                    ],
                })
            }
        }
    };
}
