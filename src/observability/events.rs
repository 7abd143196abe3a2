//! Observable descriptor events
//!
//! Events are explicit and typed. All of them are per-operation detail and
//! are logged at TRACE, so descriptors stay silent unless a caller opts in.

use std::fmt;

/// Observable events in the descriptor lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Descriptor constructed
    DescriptorCreated,
    /// Two descriptors merged into a new one
    DescriptorMerged,
    /// Construction rejected
    DescriptorRejected,
    /// Name lookup found no matching field
    FieldLookupMissed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DescriptorCreated => "DESCRIPTOR_CREATED",
            Event::DescriptorMerged => "DESCRIPTOR_MERGED",
            Event::DescriptorRejected => "DESCRIPTOR_REJECTED",
            Event::FieldLookupMissed => "FIELD_LOOKUP_MISSED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
