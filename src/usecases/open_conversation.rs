//! Use case for opening a conversation: returns the thread in insertion
//! order and marks its notification state as read, persisting the cleared
//! tracker.

use crate::domain::message::Message;

use super::contracts::{HistoryStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenConversationQuery {
    pub user: String,
    pub peer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenConversationOutput {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenConversationError {
    TemporarilyUnavailable,
    DataContractViolation,
}

/// Loads the user's record for the conversation, marks it read, and writes
/// the record back. A conversation with no record yet yields an empty
/// message list without creating one.
pub fn open_conversation(
    store: &dyn HistoryStore,
    query: OpenConversationQuery,
) -> Result<OpenConversationOutput, OpenConversationError> {
    let Some(mut history) = store
        .load(&query.user, &query.peer)
        .map_err(map_store_error)?
    else {
        return Ok(OpenConversationOutput {
            messages: Vec::new(),
        });
    };

    history.mark_notification_as_read();
    store
        .save(&query.user, &query.peer, &history)
        .map_err(map_store_error)?;

    Ok(OpenConversationOutput {
        messages: history.messages_sent,
    })
}

fn map_store_error(error: StoreError) -> OpenConversationError {
    match error {
        StoreError::Unavailable => OpenConversationError::TemporarilyUnavailable,
        StoreError::InvalidData => OpenConversationError::DataContractViolation,
    }
}
