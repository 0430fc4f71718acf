use serde::{Deserialize, Serialize};

/// Unread state for one conversation: a read flag crossed with an unseen
/// message counter.
///
/// Invariant: `count` is reset to zero exactly when `is_read` transitions to
/// true through [`NotificationTracker::mark_as_read`]; it grows only while
/// unseen messages accumulate. The counter is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTracker {
    #[serde(rename = "isRead", default = "default_is_read")]
    pub is_read: bool,
    #[serde(default)]
    pub count: u32,
}

fn default_is_read() -> bool {
    true
}

impl Default for NotificationTracker {
    fn default() -> Self {
        Self {
            is_read: true,
            count: 0,
        }
    }
}

impl NotificationTracker {
    /// Records one more unseen message. One call per message is the
    /// caller's responsibility.
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Marks the conversation read and clears the counter. Idempotent.
    pub fn mark_as_read(&mut self) {
        self.is_read = true;
        self.count = 0;
    }

    /// Flags the conversation as having unseen activity. Leaves `count`
    /// untouched.
    pub fn reset_read_status(&mut self) {
        self.is_read = false;
    }
}
