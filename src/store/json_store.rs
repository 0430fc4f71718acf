//! File-backed document store. The whole history tree lives in one JSON
//! document under a configurable root key, mirroring the hosted backend's
//! `root/<owner>/<peer>` reference layout. Every operation is a full
//! read-modify-write round trip, the way the original client talked to its
//! backend.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde_json::Value;

use crate::{
    domain::history::MessageHistory,
    usecases::contracts::{HistoryStore, StoreError},
};

type HistoryTree = BTreeMap<String, BTreeMap<String, MessageHistory>>;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    root: String,
    // Serializes read-modify-write cycles; the domain types carry no
    // synchronization of their own.
    guard: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, root: &str) -> Self {
        Self {
            path: path.into(),
            root: root.to_owned(),
            guard: Mutex::new(()),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_tree(&self) -> Result<HistoryTree, StoreError> {
        if !self.path.exists() {
            return Ok(HistoryTree::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|error| {
            tracing::error!(path = %self.path.display(), %error, "history document read failed");
            StoreError::Unavailable
        })?;

        let mut document: BTreeMap<String, Value> =
            serde_json::from_str(&raw).map_err(|error| {
                tracing::error!(path = %self.path.display(), %error, "history document is not valid JSON");
                StoreError::InvalidData
            })?;

        match document.remove(&self.root) {
            Some(tree) => serde_json::from_value(tree).map_err(|error| {
                tracing::error!(
                    root = %self.root,
                    %error,
                    "history tree does not match the record schema"
                );
                StoreError::InvalidData
            }),
            None => Ok(HistoryTree::new()),
        }
    }

    fn write_tree(&self, tree: &HistoryTree) -> Result<(), StoreError> {
        let mut document = BTreeMap::new();
        document.insert(
            self.root.clone(),
            serde_json::to_value(tree).map_err(|error| {
                tracing::error!(%error, "history tree failed to encode");
                StoreError::InvalidData
            })?,
        );

        let raw = serde_json::to_string_pretty(&document).map_err(|error| {
            tracing::error!(%error, "history document failed to encode");
            StoreError::InvalidData
        })?;

        fs::write(&self.path, raw).map_err(|error| {
            tracing::error!(path = %self.path.display(), %error, "history document write failed");
            StoreError::Unavailable
        })
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self, owner: &str, peer: &str) -> Result<Option<MessageHistory>, StoreError> {
        let _lock = self.guard.lock().expect("store guard");
        let tree = self.read_tree()?;
        Ok(tree
            .get(owner)
            .and_then(|threads| threads.get(peer))
            .cloned())
    }

    fn save(&self, owner: &str, peer: &str, history: &MessageHistory) -> Result<(), StoreError> {
        let _lock = self.guard.lock().expect("store guard");
        let mut tree = self.read_tree()?;
        tree.entry(owner.to_owned())
            .or_default()
            .insert(peer.to_owned(), history.clone());
        self.write_tree(&tree)
    }

    fn peers(&self, owner: &str) -> Result<Vec<String>, StoreError> {
        let _lock = self.guard.lock().expect("store guard");
        let tree = self.read_tree()?;
        Ok(tree
            .get(owner)
            .map(|threads| threads.keys().cloned().collect())
            .unwrap_or_default())
    }
}
