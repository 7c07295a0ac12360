//! The `learnpack validate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnpack_core::loader::{load_pack_directory, load_pack_file};
use learnpack_core::ModuleType;

pub fn execute(pack_path: PathBuf, module: Option<ModuleType>, format: String) -> Result<()> {
    let mut results = if pack_path.is_dir() {
        load_pack_directory(&pack_path)?
    } else {
        vec![(pack_path.clone(), load_pack_file(&pack_path)?)]
    };

    if let Some(module) = module {
        results.retain(|(_, result)| {
            result
                .pack()
                .map_or(true, |pack| pack.module_type() == module)
        });
        tracing::debug!(%module, packs = results.len(), "filtered packs by module type");
    }

    let total_issues: usize = results.iter().map(|(_, r)| r.issues().len()).sum();

    match format.as_str() {
        "json" => {
            let report: Vec<_> = results
                .iter()
                .map(|(path, result)| {
                    serde_json::json!({
                        "file": path.display().to_string(),
                        "valid": result.is_valid(),
                        "packId": result.pack().map(|p| p.id.as_str()),
                        "issues": result.issues(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            for (path, result) in &results {
                match result.pack() {
                    Some(pack) => println!(
                        "Pack: {} ({} {} items)",
                        pack.title,
                        pack.items.len(),
                        pack.module_type()
                    ),
                    None => println!("Pack: {}", path.display()),
                }

                for issue in result.issues() {
                    let prefix = if issue.path.is_empty() {
                        "  ".to_string()
                    } else {
                        format!("  [{}]", issue.path)
                    };
                    println!("{prefix} ERROR: {}", issue.message);
                }
            }

            if total_issues == 0 {
                println!("All packs valid.");
            } else {
                println!("\n{total_issues} issue(s) found.");
            }
        }
    }

    if total_issues > 0 {
        anyhow::bail!("validation failed with {total_issues} issue(s)");
    }

    Ok(())
}
