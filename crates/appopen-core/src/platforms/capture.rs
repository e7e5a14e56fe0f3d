//! Structured result of a successful grammar match.

/// Content kind plus the ordered identifier groups a handler extracted.
///
/// Only the handler that produced a capture interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    kind: &'static str,
    groups: Vec<String>,
}

impl Capture {
    pub fn new(kind: &'static str, groups: Vec<String>) -> Self {
        Self { kind, groups }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(String::as_str)
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}
