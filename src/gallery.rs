//! Built-in walkthrough of sample values
//!
//! Builds values, mutates them, and captures a diagram before and after each
//! step into a [`Transcript`]: aliasing of shared storage, reallocation on
//! growth, spare capacity, re-slicing, multi-byte text and struct padding.

use crate::inspect::{
    inspect_record, inspect_record_in_memory_order, inspect_sequence, inspect_sequence_pair,
    inspect_text,
};
use crate::memory::view::SequenceView;
use crate::transcript::Transcript;

crate::record! {
    /// Three fields whose middle one forces alignment padding
    #[repr(C)]
    #[derive(Debug, Clone)]
    pub struct Sample {
        pub a: i32,
        pub b: i8,
        pub c: i32,
    }
}

crate::record! {
    #[repr(C)]
    #[derive(Debug)]
    pub struct Packet {
        pub kind: u8,
        pub payload: Vec<u8>,
        pub checksum: u32,
        pub label: &'static str,
    }
}

crate::record! {
    /// Default representation: the compiler is free to reorder these fields
    #[derive(Debug)]
    pub struct Account {
        pub active: bool,
        pub balance: f64,
        pub id: u16,
        pub owner: String,
    }
}

/// Part of the walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sequences,
    Text,
    Records,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Sequences, Section::Text, Section::Records];
}

/// Run the given sections in order
pub fn build(sections: &[Section]) -> Transcript {
    let mut transcript = Transcript::new();
    for section in sections {
        match section {
            Section::Sequences => sequences(&mut transcript),
            Section::Text => text(&mut transcript),
            Section::Records => records(&mut transcript),
        }
    }
    tracing::debug!(
        entries = transcript.len(),
        failures = transcript.failures(),
        "gallery built"
    );
    transcript
}

fn sequences(t: &mut Transcript) {
    let mut a = vec![1, 2, 3];
    t.record("a = vec![1, 2, 3]", inspect_sequence(&a));
    t.record("b = &a (same storage)", inspect_sequence_pair(&a, &a));

    a[1] = 42;
    t.record("b[1] = 42 (seen through both)", inspect_sequence_pair(&a, &a));

    let mut b = a.clone();
    b.push(77);
    t.record(
        "b = a.clone(); b.push(77) (reallocated)",
        inspect_sequence_pair(&a, &b),
    );

    let mut reserved: Vec<u16> = Vec::with_capacity(6);
    reserved.extend([10, 20, 30]);
    t.record("Vec::with_capacity(6) + 3 pushes", inspect_sequence(&reserved));

    let words = vec![String::from("Hello"), String::from("World")];
    let others = vec![String::from("Hi"), String::from("Earth")];
    t.record("two Vec<String>", inspect_sequence_pair(&words, &others));

    let joined = [words.as_slice(), others.as_slice()].concat();
    t.record("joined = [words, others].concat()", inspect_sequence_pair(&words, &joined));

    let floats = vec![2.5, 1.25, 0.75];
    t.record("floats aliased", inspect_sequence_pair(&floats, &floats));

    let buffer = vec![0u8; 16];
    t.record(
        "window = &buffer[4..8] (shared storage)",
        SequenceView::window(&buffer, 4..8)
            .and_then(|window| inspect_sequence_pair(&buffer, &window)),
    );

    let bytes = String::from("Hello, Rust!").into_bytes();
    let doubled = [bytes.as_slice(), bytes.as_slice()].concat();
    t.record("bytes vs doubled bytes", inspect_sequence_pair(&bytes, &doubled));

    let empty: Vec<i32> = Vec::new();
    t.record("Vec::new() (nothing allocated)", inspect_sequence(&empty));
    t.record(
        "Vec::new() vs vec![1, 2]",
        inspect_sequence_pair(&empty, &vec![1, 2]),
    );

    let units = vec![(); 3];
    t.record("vec![(); 3] (zero-sized elements)", inspect_sequence(&units));
}

fn text(t: &mut Transcript) {
    let mut greeting = String::from("Hello, Rust!");
    t.record("greeting", inspect_text(&greeting));

    greeting.push_str(" Yeah!");
    t.record("greeting.push_str(\" Yeah!\")", inspect_text(&greeting));

    t.record("\"H\"", inspect_text("H"));
    t.record("\"€\" (3 bytes)", inspect_text("€"));
    t.record("mixed widths", inspect_text("añ€🦀"));
}

fn records(t: &mut Transcript) {
    let sample = Sample { a: 1, b: 2, c: 3 };
    t.record("Sample (#[repr(C)])", inspect_record(&sample));

    let boxed = Box::new(sample.clone());
    t.record("Box<Sample> (pointer followed)", inspect_record(&boxed));

    let packet = Packet {
        kind: 2,
        payload: vec![0xde, 0xad, 0xbe, 0xef],
        checksum: 0xdead_beef,
        label: "heartbeat",
    };
    t.record("Packet (#[repr(C)])", inspect_record(&packet));

    let account = Account {
        active: true,
        balance: 1250.5,
        id: 7,
        owner: String::from("Ada"),
    };
    t.record(
        "Account in memory order",
        inspect_record_in_memory_order(&account),
    );
    t.record("Account in declaration order", inspect_record(&account));

    t.record("42i32", inspect_record(&42i32));
}
