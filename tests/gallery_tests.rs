// Tests for the built-in walkthrough

use memlens::gallery::{build, Section};

#[test]
fn test_full_gallery() {
    let transcript = build(&Section::ALL);

    assert!(transcript.len() > 20);
    // zero-sized elements, 42i32, and Account in declaration order whenever it was reordered
    assert!(transcript.failures() >= 2);

    let text = transcript.to_text();
    for title in [
        "== a = vec![1, 2, 3] ==",
        "== greeting ==",
        "== Sample (#[repr(C)]) ==",
        "== 42i32 ==",
    ] {
        assert!(text.contains(title), "missing {}", title);
    }
    assert!(text.contains("[Sample struct]"));
    assert!(text.contains("error: 'i32' is not a record or a pointer to one"));
}

#[test]
fn test_expected_failures_only() {
    let transcript = build(&Section::ALL);

    for entry in &transcript.entries {
        if entry.failed {
            assert!(
                entry.title.starts_with("vec![(); 3]")
                    || entry.title == "42i32"
                    || entry.title == "Account in declaration order",
                "unexpected failure: {} => {}",
                entry.title,
                entry.body
            );
        }
    }
}

#[test]
fn test_sections_run_alone() {
    let text_only = build(&[Section::Text]);
    assert_eq!(text_only.len(), 5);
    assert_eq!(text_only.failures(), 0);
    assert!(text_only.to_text().contains("\"🦀\""));
    assert!(!text_only.to_text().contains("struct]"));

    let records = build(&[Section::Records]);
    assert!(records.entries.iter().all(|e| e.failed || e.body.starts_with('[')));

    assert!(build(&[]).is_empty());
}

#[test]
fn test_window_entry_shares_the_buffer() {
    let transcript = build(&[Section::Sequences]);
    let entry = transcript
        .entries
        .iter()
        .find(|e| e.title.starts_with("window"))
        .expect("window entry missing");

    assert!(!entry.failed);
    assert!(entry.body.contains("#2 [u8]"));
}

#[test]
fn test_empty_vec_is_drawn() {
    let transcript = build(&[Section::Sequences]);
    let entry = transcript
        .entries
        .iter()
        .find(|e| e.title == "Vec::new() (nothing allocated)")
        .expect("empty Vec entry missing");

    assert!(!entry.failed);
    assert!(entry.body.contains("[i32]"));
}
