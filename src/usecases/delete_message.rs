//! Use case for deleting a message from a two-party conversation.
//!
//! The same message value lives in both participants' records, so deletion
//! removes the first structural match from each side. A side with no match
//! (or no record at all) is silently skipped.

use crate::domain::message::Message;

use super::contracts::{HistoryStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessageCommand {
    pub user: String,
    pub peer: String,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteMessageError {
    TemporarilyUnavailable,
    DataContractViolation,
}

pub fn delete_message(
    store: &dyn HistoryStore,
    command: DeleteMessageCommand,
) -> Result<(), DeleteMessageError> {
    remove_from(store, &command.user, &command.peer, &command.message)?;
    remove_from(store, &command.peer, &command.user, &command.message)?;

    Ok(())
}

fn remove_from(
    store: &dyn HistoryStore,
    owner: &str,
    peer: &str,
    message: &Message,
) -> Result<(), DeleteMessageError> {
    let Some(mut history) = store.load(owner, peer).map_err(map_store_error)? else {
        return Ok(());
    };

    let before = history.messages_sent.len();
    history.find_and_remove_message(message);
    if history.messages_sent.len() == before {
        // Nothing matched; skip the write.
        return Ok(());
    }

    store.save(owner, peer, &history).map_err(map_store_error)
}

fn map_store_error(error: StoreError) -> DeleteMessageError {
    match error {
        StoreError::Unavailable => DeleteMessageError::TemporarilyUnavailable,
        StoreError::InvalidData => DeleteMessageError::DataContractViolation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::usecases::send_message::{send_message, SendMessageCommand};

    fn seed(store: &MemoryStore, text: &str, timestamp_ms: i64) -> Message {
        send_message(
            store,
            SendMessageCommand {
                sender: "alice".to_owned(),
                recipient: "bob".to_owned(),
                text: text.to_owned(),
                timestamp_ms,
            },
        )
        .expect("seed send must succeed")
    }

    #[test]
    fn removes_the_message_from_both_records() {
        let store = MemoryStore::default();
        let kept = seed(&store, "keep", 100);
        let doomed = seed(&store, "remove", 101);

        delete_message(
            &store,
            DeleteMessageCommand {
                user: "alice".to_owned(),
                peer: "bob".to_owned(),
                message: doomed,
            },
        )
        .expect("delete must succeed");

        let alice = store.load("alice", "bob").expect("load").expect("record");
        let bob = store.load("bob", "alice").expect("load").expect("record");
        assert_eq!(alice.messages_sent, vec![kept.clone()]);
        assert_eq!(bob.messages_sent, vec![kept]);
    }

    #[test]
    fn absent_message_is_a_silent_noop() {
        let store = MemoryStore::default();
        let kept = seed(&store, "keep", 100);

        delete_message(
            &store,
            DeleteMessageCommand {
                user: "alice".to_owned(),
                peer: "bob".to_owned(),
                message: Message::new("carol", "x", 5),
            },
        )
        .expect("delete must succeed");

        let alice = store.load("alice", "bob").expect("load").expect("record");
        assert_eq!(alice.messages_sent, vec![kept]);
    }

    #[test]
    fn missing_records_are_skipped_without_creating_them() {
        let store = MemoryStore::default();

        delete_message(
            &store,
            DeleteMessageCommand {
                user: "alice".to_owned(),
                peer: "bob".to_owned(),
                message: Message::new("carol", "x", 5),
            },
        )
        .expect("delete must succeed");

        assert_eq!(store.load("alice", "bob").expect("load"), None);
        assert_eq!(store.load("bob", "alice").expect("load"), None);
    }

    #[test]
    fn leaves_notification_state_untouched() {
        let store = MemoryStore::default();
        let doomed = seed(&store, "remove", 100);

        delete_message(
            &store,
            DeleteMessageCommand {
                user: "alice".to_owned(),
                peer: "bob".to_owned(),
                message: doomed,
            },
        )
        .expect("delete must succeed");

        let bob = store.load("bob", "alice").expect("load").expect("record");
        assert!(!bob.notification_tracker.is_read);
        assert_eq!(bob.notification_tracker.count, 1);
    }

    #[test]
    fn maps_store_errors_to_domain_errors() {
        let store = MemoryStore::failing(StoreError::Unavailable);
        let result = delete_message(
            &store,
            DeleteMessageCommand {
                user: "alice".to_owned(),
                peer: "bob".to_owned(),
                message: Message::new("alice", "hi", 100),
            },
        );

        assert_eq!(result, Err(DeleteMessageError::TemporarilyUnavailable));
    }
}
