//! learnpack-core — Content pack validation and adaptive review scheduling.
//!
//! This crate defines the content pack data model, the referential-integrity
//! validator that guards it, and the pure scheduling logic (review state
//! transitions, session composition, sentence matching) that runs on
//! validated packs. Nothing here reads the clock: callers pass `now`.

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod review;
pub mod sentence;
pub mod session;
pub mod validate;

pub use config::{load_config, load_config_from, SchedulerConfig};
pub use error::{ConfigError, SupportLevelError};
pub use model::{ModuleType, Pack, PackItems, SupportLevel};
pub use review::{
    adjust_support_level, compute_next_review_state, create_initial_review_state, ReviewOutcome,
    ReviewScheduler, ReviewState,
};
pub use sentence::{matches_any_sentence, normalize_sentence};
pub use session::{
    partition_due_and_new, select_fact_card_session_items, SessionComposer, SessionRequest,
};
pub use validate::{validate_pack, ValidationIssue, ValidationResult};
