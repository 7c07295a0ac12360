//! The `learnpack check` command.

use anyhow::Result;

use learnpack_core::{matches_any_sentence, normalize_sentence};

pub fn execute(sentence: String, acceptable: Vec<String>) -> Result<()> {
    let normalized = normalize_sentence(&sentence);

    if matches_any_sentence(&sentence, &acceptable) {
        println!("MATCH: \"{normalized}\"");
    } else {
        println!("NO MATCH: \"{normalized}\"");
        println!("Accepted:");
        for candidate in &acceptable {
            println!("  \"{}\"", normalize_sentence(candidate));
        }
    }

    Ok(())
}
