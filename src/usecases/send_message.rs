//! Use case for sending a message in a two-party conversation.
//!
//! The store keeps one conversation record per participant, so a send writes
//! the same message into both records. Only the recipient's record gets its
//! notification tracker bumped.

use crate::domain::{history::MessageHistory, message::Message};

use super::contracts::{HistoryStore, StoreError};

/// Command to send a message from one user to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub sender: String,
    pub recipient: String,
    pub text: String,
    pub timestamp_ms: i64,
}

/// Domain-level errors for the send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
    /// Store is temporarily unavailable.
    TemporarilyUnavailable,
    /// A stored record failed to decode.
    DataContractViolation,
}

/// Sends a message: appends it to both participants' records (created on
/// first write) and flags the recipient's record as having unseen activity.
///
/// The sender's own copy never counts against their unread state.
pub fn send_message(
    store: &dyn HistoryStore,
    command: SendMessageCommand,
) -> Result<Message, SendMessageError> {
    let text = command.text.trim();
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    let message = Message::new(command.sender.clone(), text, command.timestamp_ms);

    deliver(store, &command.sender, &command.recipient, &message, false)?;
    deliver(store, &command.recipient, &command.sender, &message, true)?;

    tracing::debug!(
        sender = %command.sender,
        recipient = %command.recipient,
        timestamp_ms = command.timestamp_ms,
        "message written to both conversation records"
    );

    Ok(message)
}

fn deliver(
    store: &dyn HistoryStore,
    owner: &str,
    peer: &str,
    message: &Message,
    notify: bool,
) -> Result<(), SendMessageError> {
    let mut history = store
        .load(owner, peer)
        .map_err(map_store_error)?
        .unwrap_or_else(MessageHistory::default);

    history.add_message(message.clone());
    if notify {
        history.increment_notification_count();
        history.reset_notification_read_status();
    }

    store.save(owner, peer, &history).map_err(map_store_error)
}

fn map_store_error(error: StoreError) -> SendMessageError {
    match error {
        StoreError::Unavailable => SendMessageError::TemporarilyUnavailable,
        StoreError::InvalidData => SendMessageError::DataContractViolation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn command(text: &str) -> SendMessageCommand {
        SendMessageCommand {
            sender: "alice".to_owned(),
            recipient: "bob".to_owned(),
            text: text.to_owned(),
            timestamp_ms: 1000,
        }
    }

    #[test]
    fn rejects_empty_message_text() {
        let store = MemoryStore::default();

        let result = send_message(&store, command(""));

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert_eq!(store.load("alice", "bob").expect("load"), None);
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let store = MemoryStore::default();

        let result = send_message(&store, command("   \n\t  "));

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
    }

    #[test]
    fn trims_whitespace_before_writing() {
        let store = MemoryStore::default();

        let sent = send_message(&store, command("  hello world  ")).expect("send must succeed");

        assert_eq!(sent.text, "hello world");
    }

    #[test]
    fn writes_the_same_message_into_both_records() {
        let store = MemoryStore::default();

        let sent = send_message(&store, command("hello")).expect("send must succeed");

        let alice = store
            .load("alice", "bob")
            .expect("load")
            .expect("sender record must exist");
        let bob = store
            .load("bob", "alice")
            .expect("load")
            .expect("recipient record must exist");

        assert_eq!(alice.messages_sent, vec![sent.clone()]);
        assert_eq!(bob.messages_sent, vec![sent]);
    }

    #[test]
    fn bumps_only_the_recipient_tracker() {
        let store = MemoryStore::default();

        send_message(&store, command("hello")).expect("send must succeed");

        let alice = store.load("alice", "bob").expect("load").expect("record");
        let bob = store.load("bob", "alice").expect("load").expect("record");

        assert!(alice.notification_tracker.is_read);
        assert_eq!(alice.notification_tracker.count, 0);
        assert!(!bob.notification_tracker.is_read);
        assert_eq!(bob.notification_tracker.count, 1);
    }

    #[test]
    fn appends_to_existing_records_preserving_order() {
        let store = MemoryStore::default();

        send_message(&store, command("first")).expect("send must succeed");
        send_message(
            &store,
            SendMessageCommand {
                sender: "bob".to_owned(),
                recipient: "alice".to_owned(),
                text: "second".to_owned(),
                timestamp_ms: 1001,
            },
        )
        .expect("send must succeed");

        let alice = store.load("alice", "bob").expect("load").expect("record");
        assert_eq!(
            alice.messages_sent,
            vec![
                Message::new("alice", "first", 1000),
                Message::new("bob", "second", 1001),
            ]
        );
        // Alice now has unseen activity from Bob's reply.
        assert!(!alice.notification_tracker.is_read);
        assert_eq!(alice.notification_tracker.count, 1);
    }

    #[test]
    fn maps_unavailable_store_error() {
        let store = MemoryStore::failing(StoreError::Unavailable);

        let result = send_message(&store, command("hello"));

        assert_eq!(result, Err(SendMessageError::TemporarilyUnavailable));
    }

    #[test]
    fn maps_invalid_data_store_error() {
        let store = MemoryStore::failing(StoreError::InvalidData);

        let result = send_message(&store, command("hello"));

        assert_eq!(result, Err(SendMessageError::DataContractViolation));
    }
}
