//! Ordered, append-only sink for human-readable validation messages.
//!
//! Passing a [`Diagnostics`] to a validation entry point switches it from
//! fail-fast mode into accumulation mode: every problem found is appended as
//! one line, in face-index discovery order, and the scan runs to completion.

use std::fmt;

/// Collected validation messages, one per problem found.
///
/// The sink is cleared at the start of each validation call that receives it,
/// so a single instance can be reused across calls.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages recorded.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no problems have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over the recorded messages in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// All recorded messages, in discovery order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Drop all recorded messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub(crate) fn push(&mut self, msg: String) {
        self.messages.push(msg);
    }
}

/// Prints one message per line.
impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for msg in &self.messages {
            writeln!(f, "{msg}")?;
        }
        Ok(())
    }
}
