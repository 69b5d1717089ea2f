use super::value_text;
use crate::errors::InspectError;
use crate::memory::shape::{Inspect, RecordShape, Shape};
use crate::memory::{address_of, Address};
use rustc_hash::FxHashSet;
use std::mem;

/// Placement of one record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub address: Address,
    /// Byte offset from the start of the record
    pub offset: usize,
    pub type_name: &'static str,
    pub size: usize,
    /// Gap between the end of the previous field and this one; 0 for the first
    pub padding: usize,
    pub value: String,
}

impl FieldLayout {
    pub fn end(&self) -> Address {
        self.address + self.size as Address
    }
}

/// Layout of a record: its fields with sizes and padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub type_name: &'static str,
    pub base_address: Address,
    pub size: usize,
    pub fields: Vec<FieldLayout>,
    /// Bytes after the last field up to the end of the record
    pub trailing_padding: usize,
    /// Fields are listed in memory order, which differs from declaration order
    pub reordered: bool,
}

impl RecordDescriptor {
    /// Every padding byte inside the record, trailing padding included
    pub fn total_padding(&self) -> usize {
        self.fields.iter().map(|f| f.padding).sum::<usize>() + self.trailing_padding
    }
}

/// Describe a record with its fields in declaration order
///
/// Pointers are followed one level, so `&Sample` and `Box<Sample>` describe the
/// pointed-to `Sample`. Fields must appear in memory in declaration order
/// (always true for `#[repr(C)]`); otherwise the call fails with
/// [`InspectError::FieldOrder`] rather than report a negative padding.
pub fn describe_record(value: &dyn Inspect) -> Result<RecordDescriptor, InspectError> {
    let record = record_shape(value)?;
    let fields = measure_fields(&record)?;
    lay_out(&record, fields, false)
}

/// Describe a record with its fields sorted by address
///
/// Default-representation structs may be reordered by the compiler; this variant
/// shows them as they sit in memory and flags the reordering.
pub fn describe_record_in_memory_order(
    value: &dyn Inspect,
) -> Result<RecordDescriptor, InspectError> {
    let record = record_shape(value)?;
    let mut fields = measure_fields(&record)?;

    let declared: Vec<&'static str> = fields.iter().map(|f| f.name).collect();
    // Stable sort keeps zero-sized fields sharing an address in declaration order
    fields.sort_by_key(|f| f.address);
    let reordered = fields.iter().map(|f| f.name).ne(declared.iter().copied());

    if reordered {
        tracing::warn!(
            record = record.name,
            "field order in memory differs from declaration order"
        );
    }

    lay_out(&record, fields, reordered)
}

fn record_shape(value: &dyn Inspect) -> Result<RecordShape<'_>, InspectError> {
    match value.shape() {
        Shape::Record(record) => Ok(record),
        Shape::Pointer(target) => match *target {
            Shape::Record(record) => Ok(record),
            _ => Err(InspectError::NotARecord {
                type_name: value.type_name(),
            }),
        },
        Shape::Scalar | Shape::Sequence => Err(InspectError::NotARecord {
            type_name: value.type_name(),
        }),
    }
}

fn measure_fields(record: &RecordShape<'_>) -> Result<Vec<FieldLayout>, InspectError> {
    if record.size == 0 {
        return Err(InspectError::UnstableAddress {
            what: format!("record '{}'", record.name),
            reason: "a zero-sized record occupies no storage",
        });
    }

    let mut seen = FxHashSet::default();
    let mut fields = Vec::with_capacity(record.fields.len());

    for field in &record.fields {
        if !seen.insert(field.name) {
            return Err(InspectError::DuplicateField {
                record: record.name,
                field: field.name,
            });
        }

        let address = address_of(field.value);
        fields.push(FieldLayout {
            name: field.name,
            address,
            offset: address.saturating_sub(record.address) as usize,
            type_name: field.declared_type,
            size: mem::size_of_val(field.value),
            padding: 0,
            value: value_text(field.value),
        });
    }

    Ok(fields)
}

fn lay_out(
    record: &RecordShape<'_>,
    mut fields: Vec<FieldLayout>,
    reordered: bool,
) -> Result<RecordDescriptor, InspectError> {
    for i in 1..fields.len() {
        let previous = &fields[i - 1];
        let gap = fields[i].address.checked_sub(previous.end()).ok_or(
            InspectError::FieldOrder {
                record: record.name,
                field: fields[i].name,
                previous: previous.name,
            },
        )?;
        fields[i].padding = gap as usize;
    }

    let record_end = record.address + record.size as Address;
    let trailing_padding = match fields.last() {
        Some(last) => record_end.saturating_sub(last.end()) as usize,
        None => record.size,
    };

    tracing::debug!(
        record = record.name,
        base = format_args!("0x{:016x}", record.address),
        size = record.size,
        fields = fields.len(),
        reordered,
        "described record"
    );

    Ok(RecordDescriptor {
        type_name: record.name,
        base_address: record.address,
        size: record.size,
        fields,
        trailing_padding,
        reordered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::record! {
        #[repr(C)]
        #[derive(Debug)]
        struct Header {
            tag: u8,
            length: u32,
            flags: u16,
        }
    }

    #[test]
    fn repr_c_padding() {
        let header = Header {
            tag: 1,
            length: 2,
            flags: 3,
        };
        let desc = describe_record(&header).unwrap();

        let layout: Vec<_> = desc
            .fields
            .iter()
            .map(|f| (f.name, f.offset, f.size, f.padding))
            .collect();
        assert_eq!(
            layout,
            [("tag", 0, 1, 0), ("length", 4, 4, 3), ("flags", 8, 2, 0)]
        );
        assert_eq!(desc.size, 12);
        assert_eq!(desc.trailing_padding, 2);
        assert_eq!(desc.total_padding(), 5);
        assert!(!desc.reordered);
    }

    #[test]
    fn pointer_is_followed_one_level() {
        let header = Box::new(Header {
            tag: 9,
            length: 0,
            flags: 0,
        });
        let desc = describe_record(&header).unwrap();
        assert_eq!(desc.type_name, "Header");
        assert_eq!(desc.base_address, address_of(&*header));
        assert_eq!(desc.fields[0].value, "9");

        let by_ref = &*header;
        let by_ref_ref = &by_ref;
        assert!(matches!(
            describe_record(&by_ref_ref),
            Err(InspectError::NotARecord { .. })
        ));
    }

    #[test]
    fn scalars_and_sequences_are_not_records() {
        assert_eq!(
            describe_record(&5u32).unwrap_err(),
            InspectError::NotARecord {
                type_name: "u32".to_string()
            }
        );
        assert!(matches!(
            describe_record(&vec![1, 2]),
            Err(InspectError::NotARecord { .. })
        ));
    }

    // Hand-written schema listing fields against their memory order
    #[derive(Debug)]
    #[repr(C)]
    struct Swapped {
        first: u32,
        second: u32,
    }

    impl Inspect for Swapped {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(RecordShape {
                name: "Swapped",
                address: address_of(self),
                size: mem::size_of_val(self),
                fields: vec![
                    crate::memory::shape::FieldRef {
                        name: "second",
                        declared_type: "u32",
                        value: &self.second,
                    },
                    crate::memory::shape::FieldRef {
                        name: "first",
                        declared_type: "u32",
                        value: &self.first,
                    },
                ],
            })
        }
    }

    #[test]
    fn backwards_fields_fail_instead_of_negative_padding() {
        let swapped = Swapped {
            first: 1,
            second: 2,
        };
        assert_eq!(
            describe_record(&swapped).unwrap_err(),
            InspectError::FieldOrder {
                record: "Swapped",
                field: "first",
                previous: "second",
            }
        );

        let desc = describe_record_in_memory_order(&swapped).unwrap();
        assert!(desc.reordered);
        assert_eq!(desc.fields[0].name, "first");
        assert_eq!(desc.fields[1].padding, 0);
    }

    #[derive(Debug)]
    struct Doubled(u8);

    impl Inspect for Doubled {
        fn shape(&self) -> Shape<'_> {
            let field = crate::memory::shape::FieldRef {
                name: "0",
                declared_type: "u8",
                value: &self.0,
            };
            let again = crate::memory::shape::FieldRef {
                name: "0",
                declared_type: "u8",
                value: &self.0,
            };
            Shape::Record(RecordShape {
                name: "Doubled",
                address: address_of(self),
                size: 1,
                fields: vec![field, again],
            })
        }
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        assert_eq!(
            describe_record(&Doubled(1)).unwrap_err(),
            InspectError::DuplicateField {
                record: "Doubled",
                field: "0",
            }
        );
    }

    #[derive(Debug)]
    struct Unit;

    impl Inspect for Unit {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(RecordShape {
                name: "Unit",
                address: address_of(self),
                size: 0,
                fields: Vec::new(),
            })
        }
    }

    #[test]
    fn zero_sized_record_has_no_stable_address() {
        assert!(matches!(
            describe_record(&Unit),
            Err(InspectError::UnstableAddress { .. })
        ));
    }

    #[test]
    fn describing_twice_is_identical() {
        let header = Header {
            tag: 4,
            length: 5,
            flags: 6,
        };
        assert_eq!(
            describe_record(&header).unwrap(),
            describe_record(&header).unwrap()
        );
    }
}
