use serde::{Deserialize, Serialize};

use super::{message::Message, notification::NotificationTracker};

/// Conversation record: the aggregate of one thread's message list and its
/// notification state. Each record exclusively owns its tracker and its
/// message sequence; nothing is shared between conversations.
///
/// Lifecycle is driven by the persistence layer: created on first write,
/// mutated through the methods below, deleted only by removal from the
/// backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MessageHistory {
    #[serde(rename = "notificationTracker", default)]
    pub notification_tracker: NotificationTracker,
    /// Messages in insertion order. Order is significant; structural
    /// duplicates are permitted.
    #[serde(rename = "messagesSent", default)]
    pub messages_sent: Vec<Message>,
}

impl MessageHistory {
    pub fn increment_notification_count(&mut self) {
        self.notification_tracker.increment();
    }

    /// Idempotent: repeated calls after the first are no-ops.
    pub fn mark_notification_as_read(&mut self) {
        self.notification_tracker.mark_as_read();
    }

    pub fn reset_notification_read_status(&mut self) {
        self.notification_tracker.reset_read_status();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages_sent.push(message);
    }

    /// Removes the first structurally-equal match, if any. Absence is not
    /// an error.
    pub fn find_and_remove_message(&mut self, message: &Message) {
        if let Some(index) = self.messages_sent.iter().position(|m| m == message) {
            self.messages_sent.remove(index);
        }
    }

    /// Most recent message of the thread, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages_sent.last()
    }
}
