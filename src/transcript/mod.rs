// Ordered log of diagrams captured while a caller mutates its values

use crate::errors::InspectError;

/// One captured diagram, or the error that prevented it
#[derive(Debug, Clone)]
pub struct Entry {
    pub title: String,
    pub body: String,
    pub failed: bool,
}

impl Entry {
    /// Body split into display lines
    pub fn lines(&self) -> Vec<&str> {
        self.body.lines().collect()
    }
}

/// Output sink for diagrams, kept in capture order
#[derive(Debug, Clone)]
pub struct Transcript {
    pub entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            entries: Vec::new(),
        }
    }

    /// Store the result of an `inspect_*` call under a title
    pub fn record(&mut self, title: impl Into<String>, result: Result<String, InspectError>) {
        let title = title.into();
        let entry = match result {
            Ok(body) => Entry {
                title,
                body,
                failed: false,
            },
            Err(err) => {
                tracing::debug!(title = %title, error = %err, "inspection failed");
                Entry {
                    title,
                    body: format!("error: {}\n", err),
                    failed: true,
                }
            }
        };
        self.entries.push(entry);
    }

    /// Free-form note between diagrams
    pub fn note(&mut self, title: impl Into<String>, text: impl Into<String>) {
        let mut body = text.into();
        if !body.ends_with('\n') {
            body.push('\n');
        }
        self.entries.push(Entry {
            title: title.into(),
            body,
            failed: false,
        });
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that hold an error instead of a diagram
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.failed).count()
    }

    /// All entries as plain text, each under a `== title ==` heading
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&format!("== {} ==\n", entry.title));
            text.push_str(&entry.body);
            text.push('\n');
        }
        text
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_kept_as_entries() {
        let mut transcript = Transcript::new();
        transcript.record("ok", Ok("diagram\n".to_string()));
        transcript.record(
            "bad",
            Err(InspectError::NotARecord {
                type_name: "i32".to_string(),
            }),
        );

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.failures(), 1);
        assert!(transcript.entries[1].body.starts_with("error: 'i32'"));
        assert_eq!(
            transcript.to_text(),
            "== ok ==\ndiagram\n\n== bad ==\nerror: 'i32' is not a record or a pointer to one\n\n"
        );
    }

    #[test]
    fn notes_end_with_newline() {
        let mut transcript = Transcript::default();
        transcript.note("intro", "two\nlines");
        assert_eq!(transcript.get(0).map(|e| e.lines()), Some(vec!["two", "lines"]));
    }
}
