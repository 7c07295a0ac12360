//! Session composition.
//!
//! A practice session mixes items that are due for review with items the
//! learner has never seen. Due items get at least `ceil(target * ratio)`
//! slots when enough exist; new items fill what is left, then any remaining
//! due items backfill. Ids are never repeated and never padded.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{SchedulerConfig, DEFAULT_DUE_RATIO};
use crate::error::ConfigError;
use crate::review::ReviewState;

/// Candidate pools and target size for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    /// Due items, most urgent first.
    pub due_item_ids: Vec<String>,
    /// Never-seen items in introduction order.
    pub new_item_ids: Vec<String>,
    pub target_count: usize,
}

/// Composes sessions with a fixed due ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionComposer {
    due_ratio: f64,
}

impl Default for SessionComposer {
    fn default() -> Self {
        Self {
            due_ratio: DEFAULT_DUE_RATIO,
        }
    }
}

impl SessionComposer {
    pub fn new(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            due_ratio: config.due_ratio,
        })
    }

    /// Number of slots reserved for due items in a session of `target`.
    pub fn due_slots(&self, target: usize) -> usize {
        ((target as f64 * self.due_ratio).ceil() as usize).min(target)
    }

    /// Pick the ordered, duplicate-free item ids for one session.
    pub fn compose(&self, request: &SessionRequest) -> Vec<String> {
        let target = request.target_count;
        let due_slots = self.due_slots(target);

        let pool = request.due_item_ids.len() + request.new_item_ids.len();
        let mut picked = Picker::with_capacity(target.min(pool));
        picked.take_from(&request.due_item_ids, due_slots);
        picked.take_from(&request.new_item_ids, target);
        picked.take_from(&request.due_item_ids, target);

        tracing::debug!(
            target,
            due_slots,
            due_pool = request.due_item_ids.len(),
            new_pool = request.new_item_ids.len(),
            selected = picked.ids.len(),
            "session composed"
        );

        picked.ids
    }
}

/// Ordered selection with set semantics.
struct Picker<'a> {
    ids: Vec<String>,
    seen: HashSet<&'a str>,
}

impl<'a> Picker<'a> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Append unseen ids from `pool` in order until `limit` ids are picked.
    fn take_from(&mut self, pool: &'a [String], limit: usize) {
        for id in pool {
            if self.ids.len() >= limit {
                break;
            }
            if self.seen.insert(id.as_str()) {
                self.ids.push(id.clone());
            }
        }
    }
}

/// Compose a fact card session with the default due ratio.
pub fn select_fact_card_session_items(request: &SessionRequest) -> Vec<String> {
    SessionComposer::default().compose(request)
}

/// Split a pack's items into due and new pools.
///
/// `item_ids` is the pack's item order. Due ids come back ordered by
/// `due_at`, oldest first, with ties kept in pack order. Items without a
/// state are new. Items scheduled after `now` are in neither pool.
pub fn partition_due_and_new<'a, I>(
    item_ids: I,
    states: &HashMap<String, ReviewState>,
    now: DateTime<Utc>,
) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut due: Vec<&ReviewState> = Vec::new();
    let mut new = Vec::new();

    for id in item_ids {
        match states.get(id) {
            Some(state) if state.is_due(now) => due.push(state),
            Some(_) => {}
            None => new.push(id.to_string()),
        }
    }

    due.sort_by_key(|state| state.due_at);
    let due = due.into_iter().map(|s| s.item_id.clone()).collect();
    (due, new)
}
