//! JSON file persistence for review states.
//!
//! States are keyed by `packId/itemId` so one file can hold a learner's
//! progress across packs.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use learnpack_core::ReviewState;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewStore {
    states: BTreeMap<String, ReviewState>,
}

fn key(pack_id: &str, item_id: &str) -> String {
    format!("{pack_id}/{item_id}")
}

impl ReviewStore {
    /// Load a store, or start an empty one if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read review states from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse review states: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize review states")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write review states to {}", path.display()))?;
        Ok(())
    }

    pub fn get(&self, pack_id: &str, item_id: &str) -> Option<&ReviewState> {
        self.states.get(&key(pack_id, item_id))
    }

    pub fn insert(&mut self, pack_id: &str, state: ReviewState) {
        self.states.insert(key(pack_id, &state.item_id), state);
    }

    /// States belonging to one pack, keyed by item id.
    pub fn for_pack(&self, pack_id: &str) -> HashMap<String, ReviewState> {
        let prefix = format!("{pack_id}/");
        self.states
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, state)| (state.item_id.clone(), state.clone()))
            .collect()
    }
}
