//! The card content: recipient name and message.

/// Content of one greeting card.
///
/// Both fields are free text; the message may contain newlines, which are
/// preserved verbatim all the way to the reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Greeting {
    /// Recipient name
    pub name: String,
    /// Personal message, newlines preserved
    pub message: String,
}

impl Greeting {
    /// Create a greeting from raw field values.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// True when both fields are non-empty after trimming whitespace.
    ///
    /// The surprise trigger is inert while this is false.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty()
    }

    /// True when at least one field has content (used for the form hint).
    pub fn is_partially_filled(&self) -> bool {
        !self.name.is_empty() || !self.message.is_empty()
    }
}
