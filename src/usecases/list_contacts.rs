//! Use case for the contacts overview: every conversation partner recorded
//! for a user, with unread badge state and a preview of the latest message,
//! most recent conversation first.

use crate::domain::contact::ContactSummary;

use super::contracts::{HistoryStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContactsQuery {
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContactsOutput {
    pub contacts: Vec<ContactSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContactsError {
    TemporarilyUnavailable,
    DataContractViolation,
}

pub fn list_contacts(
    store: &dyn HistoryStore,
    query: ListContactsQuery,
) -> Result<ListContactsOutput, ListContactsError> {
    let peers = store.peers(&query.user).map_err(map_store_error)?;

    let mut contacts = Vec::with_capacity(peers.len());
    for peer in peers {
        let history = store
            .load(&query.user, &peer)
            .map_err(map_store_error)?
            .unwrap_or_default();

        let last = history.last_message();
        contacts.push(ContactSummary {
            name: peer,
            unread_count: history.notification_tracker.count,
            is_read: history.notification_tracker.is_read,
            last_message_preview: last.map(|m| m.text.clone()),
            last_message_unix_ms: last.map(|m| m.timestamp),
        });
    }

    // Most recent conversation first; threads with no messages trail,
    // ordered by name for a stable listing.
    contacts.sort_by(|a, b| {
        b.last_message_unix_ms
            .cmp(&a.last_message_unix_ms)
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(ListContactsOutput { contacts })
}

fn map_store_error(error: StoreError) -> ListContactsError {
    match error {
        StoreError::Unavailable => ListContactsError::TemporarilyUnavailable,
        StoreError::InvalidData => ListContactsError::DataContractViolation,
    }
}
