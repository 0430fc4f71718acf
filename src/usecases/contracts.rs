use crate::domain::history::MessageHistory;

/// Failure modes at the persistence boundary. The backing store owns
/// transport and durability; workflows only distinguish "try again later"
/// from "the document is broken".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store is temporarily unreachable or failed to persist.
    Unavailable,
    /// Stored document does not decode into the expected shape.
    InvalidData,
}

/// Seam to the external document store holding conversation records, keyed
/// by `(owner, peer)`. Each owner carries their own copy of a conversation,
/// so a thread between two users occupies two records.
pub trait HistoryStore {
    /// Loads the record `owner` keeps for the conversation with `peer`.
    /// `Ok(None)` means no record exists yet.
    fn load(&self, owner: &str, peer: &str) -> Result<Option<MessageHistory>, StoreError>;

    /// Writes the record back, creating it on first write.
    fn save(&self, owner: &str, peer: &str, history: &MessageHistory) -> Result<(), StoreError>;

    /// Conversation partners with a record under `owner`.
    fn peers(&self, owner: &str) -> Result<Vec<String>, StoreError>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for &T {
    fn load(&self, owner: &str, peer: &str) -> Result<Option<MessageHistory>, StoreError> {
        (*self).load(owner, peer)
    }

    fn save(&self, owner: &str, peer: &str, history: &MessageHistory) -> Result<(), StoreError> {
        (*self).save(owner, peer, history)
    }

    fn peers(&self, owner: &str) -> Result<Vec<String>, StoreError> {
        (*self).peers(owner)
    }
}
