//! learnpack CLI — validate content packs and simulate practice sessions.

use std::path::PathBuf;
use std::process;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use learnpack_core::ModuleType;

mod commands;
mod store;

#[derive(Parser)]
#[command(
    name = "learnpack",
    version,
    about = "Content pack validator and adaptive review scheduler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate pack JSON files
    Validate {
        /// Path to a pack .json file or a directory of packs
        #[arg(long)]
        pack: PathBuf,

        /// Only show valid packs of this module type (invalid packs are always shown)
        #[arg(long)]
        module: Option<ModuleType>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Record one graded attempt at an item
    Review {
        /// Review state file (created if missing)
        #[arg(long)]
        state: PathBuf,

        /// Pack the item belongs to
        #[arg(long)]
        pack_id: String,

        /// Item that was attempted
        #[arg(long)]
        item: String,

        /// The attempt was correct
        #[arg(long, conflicts_with = "incorrect", required_unless_present = "incorrect")]
        correct: bool,

        /// The attempt was incorrect
        #[arg(long)]
        incorrect: bool,

        /// Number of hints used during the attempt
        #[arg(long, default_value = "0")]
        hints: u32,

        /// Review time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compose a practice session from a pack and its review states
    Session {
        /// Pack .json file
        #[arg(long)]
        pack: PathBuf,

        /// Review state file
        #[arg(long)]
        state: PathBuf,

        /// Number of items in the session
        #[arg(long, default_value = "10")]
        count: usize,

        /// Session time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a sentence against acceptable answers
    Check {
        /// The learner's sentence
        #[arg(long)]
        sentence: String,

        /// Acceptable sentences (repeatable)
        #[arg(long = "accept", required = true)]
        accept: Vec<String>,
    },

    /// Create starter config and example pack
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learnpack=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            pack,
            module,
            format,
        } => commands::validate::execute(pack, module, format),
        Commands::Review {
            state,
            pack_id,
            item,
            correct,
            incorrect: _,
            hints,
            now,
            config,
        } => commands::review::execute(
            state,
            pack_id,
            item,
            correct,
            hints,
            now.unwrap_or_else(Utc::now),
            config,
        ),
        Commands::Session {
            pack,
            state,
            count,
            now,
            format,
            config,
        } => commands::session::execute(
            pack,
            state,
            count,
            now.unwrap_or_else(Utc::now),
            format,
            config,
        ),
        Commands::Check { sentence, accept } => commands::check::execute(sentence, accept),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
