//! Structured failure records and their per-operation aggregate.
//!
//! # Design
//! An operation appends a `Diagnostic` for every independent problem it
//! finds and keeps evaluating, then checks [`Diagnostics::has_error`] once
//! before using anything produced in the same step. That way one pass can
//! report several unrelated configuration problems instead of stopping at
//! the first. The collection is append-only and keeps insertion order for
//! user-facing output.

use std::fmt;

use crate::error::{ErrorKind, StoreError};

/// A single failure: short summary plus detail, optionally tied to the
/// configuration attribute it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub summary: String,
    pub detail: String,
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: ErrorKind, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn attribute_error(
        kind: ErrorKind,
        attribute: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Self::error(kind, summary, detail)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "[{}] {} ({attribute}): {}", self.kind, self.summary, self.detail),
            None => write!(f, "[{}] {}: {}", self.kind, self.summary, self.detail),
        }
    }
}

impl From<StoreError> for Diagnostic {
    fn from(err: StoreError) -> Self {
        let endpoint = err.operation().endpoint();
        let kind = err.kind();
        match err {
            StoreError::Transport { message, .. } => {
                Diagnostic::error(kind, format!("Unable to hit the {endpoint} endpoint"), message)
            }
            StoreError::UnexpectedStatus { status, body, .. } => Diagnostic::error(
                kind,
                format!("Unexpected status from the {endpoint} endpoint"),
                format!("expected HTTP 200, got {status}: {body}"),
            ),
            StoreError::Decode { message, .. } => {
                Diagnostic::error(kind, "Unable to read/unmarshal todo list", message)
            }
            StoreError::Encode { message, .. } => {
                Diagnostic::error(kind, "Unable to marshal the items", message)
            }
        }
    }
}

/// Append-only collection of diagnostics for one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Append a diagnostic with no attribute and the given kind.
    pub fn append(&mut self, kind: ErrorKind, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(kind, summary, detail));
    }

    pub fn append_all(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// `true` iff at least one diagnostic has been appended.
    pub fn has_error(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            entries: vec![diagnostic],
        }
    }
}

impl From<StoreError> for Diagnostics {
    fn from(err: StoreError) -> Self {
        Diagnostic::from(err).into()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    #[test]
    fn empty_collection_has_no_error() {
        let diags = Diagnostics::new();
        assert!(!diags.has_error());
        assert!(diags.is_empty());
    }

    #[test]
    fn any_append_sets_has_error() {
        let mut diags = Diagnostics::new();
        diags.append(ErrorKind::Transport, "summary", "detail");
        assert!(diags.has_error());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn append_all_preserves_insertion_order() {
        let mut first = Diagnostics::new();
        first.append(ErrorKind::Configuration, "one", "");
        let mut second = Diagnostics::new();
        second.append(ErrorKind::Configuration, "two", "");
        second.append(ErrorKind::Configuration, "three", "");

        first.append_all(second);

        let summaries: Vec<_> = first.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, ["one", "two", "three"]);
    }

    #[test]
    fn append_all_of_empty_keeps_state() {
        let mut diags = Diagnostics::new();
        diags.append_all(Diagnostics::new());
        assert!(!diags.has_error());
    }

    #[test]
    fn unexpected_status_becomes_protocol_diagnostic() {
        let diag = Diagnostic::from(StoreError::UnexpectedStatus {
            operation: Operation::Create,
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(diag.kind, ErrorKind::Protocol);
        assert_eq!(diag.summary, "Unexpected status from the /create endpoint");
        assert!(diag.detail.contains("500"));
    }

    #[test]
    fn transport_failure_keeps_underlying_message() {
        let diag = Diagnostic::from(StoreError::Transport {
            operation: Operation::Fetch,
            message: "connection refused".to_string(),
        });
        assert_eq!(diag.kind, ErrorKind::Transport);
        assert_eq!(diag.summary, "Unable to hit the /get endpoint");
        assert_eq!(diag.detail, "connection refused");
    }

    #[test]
    fn display_lists_one_line_per_diagnostic() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::attribute_error(
            ErrorKind::Configuration,
            "baseurl",
            "Missing baseurl",
            "empty",
        ));
        diags.append(ErrorKind::Decode, "Unable to read/unmarshal todo list", "eof");
        let rendered = diags.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.starts_with("[configuration] Missing baseurl (baseurl)"));
    }
}
