use std::{collections::BTreeMap, sync::Mutex};

use crate::{
    domain::history::MessageHistory,
    usecases::contracts::{HistoryStore, StoreError},
};

/// In-memory history store. Stands in for the hosted backend in tests and
/// anywhere a throwaway store is enough.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, BTreeMap<String, MessageHistory>>>,
    fail_with: Option<StoreError>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl MemoryStore {
    /// A store whose every operation fails with `error`, for exercising
    /// error mapping in workflows.
    pub fn failing(error: StoreError) -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            fail_with: Some(error),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, owner: &str, peer: &str) -> Result<Option<MessageHistory>, StoreError> {
        self.check()?;
        let records = self.records.lock().expect("memory store lock");
        Ok(records
            .get(owner)
            .and_then(|threads| threads.get(peer))
            .cloned())
    }

    fn save(&self, owner: &str, peer: &str, history: &MessageHistory) -> Result<(), StoreError> {
        self.check()?;
        let mut records = self.records.lock().expect("memory store lock");
        records
            .entry(owner.to_owned())
            .or_default()
            .insert(peer.to_owned(), history.clone());
        Ok(())
    }

    fn peers(&self, owner: &str) -> Result<Vec<String>, StoreError> {
        self.check()?;
        let records = self.records.lock().expect("memory store lock");
        Ok(records
            .get(owner)
            .map(|threads| threads.keys().cloned().collect())
            .unwrap_or_default())
    }
}
