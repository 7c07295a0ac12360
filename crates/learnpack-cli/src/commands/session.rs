//! The `learnpack session` command.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};

use learnpack_core::config::load_config_from;
use learnpack_core::loader::load_pack_file;
use learnpack_core::{partition_due_and_new, ReviewState, SessionComposer, SessionRequest};

use crate::store::ReviewStore;

pub fn execute(
    pack_path: PathBuf,
    state_path: PathBuf,
    count: usize,
    now: DateTime<Utc>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let composer = SessionComposer::new(&config)?;

    let pack = match load_pack_file(&pack_path)?.into_result() {
        Ok(pack) => pack,
        Err(issues) => anyhow::bail!(
            "pack {} is invalid ({} issue(s)); run `learnpack validate` for details",
            pack_path.display(),
            issues.len()
        ),
    };

    let store = ReviewStore::load(&state_path)?;
    let states = store.for_pack(&pack.id);
    let (due, new) = partition_due_and_new(pack.item_ids(), &states, now);

    let request = SessionRequest {
        due_item_ids: due,
        new_item_ids: new,
        target_count: count,
    };
    let selected = composer.compose(&request);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No items available for {} at {}.", pack.title, now.to_rfc3339());
        return Ok(());
    }

    print_session(&pack.title, &selected, &request, &states);
    Ok(())
}

fn print_session(
    title: &str,
    selected: &[String],
    request: &SessionRequest,
    states: &HashMap<String, ReviewState>,
) {
    use comfy_table::{Cell, Table};

    let due: HashSet<&str> = request.due_item_ids.iter().map(String::as_str).collect();

    let mut table = Table::new();
    table.set_header(vec!["#", "Item", "Pool", "Due At", "Support"]);

    for (i, id) in selected.iter().enumerate() {
        let state = states.get(id);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(id),
            Cell::new(if due.contains(id.as_str()) { "due" } else { "new" }),
            Cell::new(
                state
                    .map(|s| s.due_at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
            Cell::new(
                state
                    .map(|s| s.support_level.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
        ]);
    }

    println!(
        "Session: {title} ({} of {} requested, {} due / {} new available)",
        selected.len(),
        request.target_count,
        request.due_item_ids.len(),
        request.new_item_ids.len()
    );
    println!("{table}");
}
