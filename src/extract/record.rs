//! Record assembly: ordered, numbered text blocks.

use std::fmt;

/// One fully rendered documentation record: an ordered block of text
/// lines describing a single node, RPC, or notification.
///
/// Immutable once built; construct through [`RecordBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    lines: Vec<String>,
}

impl Record {
    /// The record's lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Builder owning the dense field-numbering rule.
///
/// Numbered fields count up from 1 in emission order; omitting an
/// optional field leaves no gap. Unnumbered lines (`Key:` lines,
/// structure renderings) take no number.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    lines: Vec<String>,
    next_index: usize,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_index: 1,
        }
    }

    /// Append a numbered `N.Label: value` field.
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        self.lines
            .push(format!("{}.{}: {}", self.next_index, label, value));
        self.next_index += 1;
        self
    }

    /// Append a numbered section header `N.Label:` (no value).
    pub fn section(&mut self, label: &str) -> &mut Self {
        self.lines.push(format!("{}.{}:", self.next_index, label));
        self.next_index += 1;
        self
    }

    /// Append an unnumbered line verbatim.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append several unnumbered lines verbatim.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) -> &mut Self {
        self.lines.extend(lines);
        self
    }

    pub fn finish(self) -> Record {
        Record { lines: self.lines }
    }
}

/// The three independent catalogs accumulated across a directory.
///
/// Each is append-only during a run; a file that fails to compile
/// contributes to none of them while earlier contributions stay intact.
#[derive(Debug, Default)]
pub struct CatalogSet {
    pub nodes: Vec<Record>,
    pub rpcs: Vec<Record>,
    pub notifications: Vec<Record>,
}
