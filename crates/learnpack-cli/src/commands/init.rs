//! The `learnpack init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create learnpack.toml
    if std::path::Path::new("learnpack.toml").exists() {
        println!("learnpack.toml already exists, skipping.");
    } else {
        std::fs::write("learnpack.toml", SAMPLE_CONFIG)?;
        println!("Created learnpack.toml");
    }

    // Create example pack
    std::fs::create_dir_all("packs")?;
    let example_path = std::path::Path::new("packs/example.json");
    if example_path.exists() {
        println!("packs/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_PACK)?;
        println!("Created packs/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit packs/example.json or add your own packs");
    println!("  2. Run: learnpack validate --pack packs");
    println!("  3. Run: learnpack session --pack packs/example.json --state progress.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# learnpack scheduler configuration

# Days until the next review after 1, 2, 3, ... correct answers in a row.
# The last interval repeats.
interval_ladder_days = [1, 3, 7, 14, 30, 45, 60]

# Share of each session reserved for items that are due.
due_ratio = 0.6
"#;

const EXAMPLE_PACK: &str = r#"{
  "schemaVersion": 1,
  "id": "example-animals",
  "title": "Example: Animal Facts",
  "description": "A small fact card pack to get started",
  "contentVersion": "1.0.0",
  "language": "en",
  "ageBand": "5-7",
  "topics": ["animals"],
  "settings": {
    "defaultSupportLevel": 3,
    "audioOnByDefault": true,
    "packThumbnailImageRef": "img-cow"
  },
  "assets": [
    { "id": "img-cow", "kind": "image", "path": "images/cow.png", "alt": "A cow standing in a green field" },
    { "id": "aud-moo", "kind": "audio", "path": "audio/moo.mp3", "transcript": "Moo!", "durationMs": 1200 }
  ],
  "moduleType": "factcards",
  "items": [
    {
      "id": "cow-sound",
      "topic": "animals",
      "prompt": "What sound does a cow make?",
      "answer": "Moo",
      "distractors": ["Woof", "Quack"],
      "hints": ["It rhymes with 'zoo'"],
      "media": { "imageRef": "img-cow", "answerAudioRef": "aud-moo" }
    },
    {
      "id": "spider-legs",
      "topic": "animals",
      "prompt": "How many legs does a spider have?",
      "answer": "Eight",
      "variants": ["8"],
      "hints": ["More than an insect"]
    },
    {
      "id": "biggest-animal",
      "topic": "animals",
      "prompt": "What is the biggest animal on Earth?",
      "answer": "The blue whale",
      "variants": ["blue whale"]
    }
  ]
}
"#;
