//! The `learnpack review` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};

use learnpack_core::config::load_config_from;
use learnpack_core::{ReviewOutcome, ReviewScheduler};

use crate::store::ReviewStore;

pub fn execute(
    state_path: PathBuf,
    pack_id: String,
    item_id: String,
    correct: bool,
    hints_used: u32,
    now: DateTime<Utc>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let scheduler = ReviewScheduler::new(&config)?;
    let mut store = ReviewStore::load(&state_path)?;

    let current = match store.get(&pack_id, &item_id) {
        Some(state) => state.clone(),
        None => {
            tracing::info!("first review of {pack_id}/{item_id}");
            scheduler.initial_state(item_id.as_str(), now)
        }
    };

    let outcome = ReviewOutcome {
        correct,
        hints_used,
    };
    let next = scheduler.next_state(&current, outcome, now);

    println!(
        "{}: {} (hints: {})",
        next.item_id,
        if correct { "correct" } else { "incorrect" },
        hints_used
    );
    println!("  streak:        {}", next.streak);
    println!("  interval:      {} day(s)", next.interval_days);
    println!("  next review:   {}", next.due_at.to_rfc3339());
    println!(
        "  support level: {} -> {}",
        current.support_level, next.support_level
    );

    store.insert(&pack_id, next);
    store.save(&state_path)?;

    Ok(())
}
