use serde::{Deserialize, Serialize};

/// One chat message. Immutable after creation; identity is structural
/// equality of all three fields, so duplicates by value are legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Message {
    #[serde(default)]
    pub sender: String,
    /// Message body. Stored under the field name `message` in the backend
    /// document, matching the original schema.
    #[serde(rename = "message", default)]
    pub text: String,
    /// Unix epoch milliseconds at send time.
    #[serde(default)]
    pub timestamp: i64,
}

impl Message {
    pub fn new(sender: impl Into<String>, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            timestamp,
        }
    }
}
