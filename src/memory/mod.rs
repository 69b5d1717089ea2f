//! Memory model for inspection
//!
//! This module provides the core memory abstractions:
//! - [`view`]: borrowed sequence views carrying base address, length and capacity
//! - [`shape`]: the [`shape::Inspect`] trait records opt into, plus the [`record!`]
//!   macro that derives it
//!
//! # Stable Addresses
//!
//! Every view is built from a shared borrow. While the borrow is alive the value
//! cannot be moved, reallocated or freed, so the addresses read through it stay
//! valid for the whole inspection call.
//!
//! # Type Names
//!
//! [`std::any::type_name`] returns fully qualified paths
//! (`alloc::vec::Vec<alloc::string::String>`). Diagrams show the short form
//! (`Vec<String>`) produced by [`shorten_type_path`].
//!
//! [`record!`]: crate::record

pub mod shape;
pub mod view;

/// Memory address type (64-bit)
pub type Address = u64;

/// Address of the first byte of a borrowed value
pub fn address_of<T: ?Sized>(value: &T) -> Address {
    (value as *const T).cast::<u8>() as usize as Address
}

/// Short, path-free name of a type
pub fn short_type_name<T: ?Sized>() -> String {
    shorten_type_path(std::any::type_name::<T>())
}

/// Strip module paths from every path segment of a type name
pub fn shorten_type_path(full: &str) -> String {
    let mut result = String::with_capacity(full.len());
    let mut segment = String::new();

    for ch in full.chars() {
        match ch {
            ':' => segment.clear(),
            c if c.is_alphanumeric() || c == '_' => segment.push(c),
            other => {
                result.push_str(&segment);
                segment.clear();
                result.push(other);
            }
        }
    }

    result.push_str(&segment);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names_are_unchanged() {
        assert_eq!(short_type_name::<i32>(), "i32");
        assert_eq!(short_type_name::<f64>(), "f64");
    }

    #[test]
    fn module_paths_are_stripped() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(
            shorten_type_path("std::collections::hash::map::HashMap<alloc::string::String, i32>"),
            "HashMap<String, i32>"
        );
    }

    #[test]
    fn references_and_arrays_keep_their_punctuation() {
        assert_eq!(short_type_name::<&str>(), "&str");
        assert_eq!(short_type_name::<[u8; 4]>(), "[u8; 4]");
    }

    #[test]
    fn address_of_matches_pointer() {
        let values = [1u16, 2, 3];
        assert_eq!(address_of(&values[1]), address_of(&values[0]) + 2);
        assert_eq!(address_of(&values[..]), address_of(&values[0]));
    }
}
