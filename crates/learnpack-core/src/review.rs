//! Review state machine.
//!
//! Each item a learner has seen carries a [`ReviewState`]. A graded attempt
//! moves the state along two independent axes:
//!
//! - **Spacing**: a correct answer climbs a fixed interval ladder
//!   (1, 3, 7, 14, 30, 45, 60 days by default), a miss drops back to the
//!   first rung and resets the streak.
//! - **Support**: an unaided correct answer removes one level of
//!   scaffolding, a miss adds one, a correct answer that needed hints
//!   leaves it alone.
//!
//! Transitions are pure: they take `now` from the caller and return a new
//! state without touching the old one.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::ConfigError;
use crate::model::SupportLevel;

/// Scheduling state of one item for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub item_id: String,
    /// When the item should next be shown.
    pub due_at: DateTime<Utc>,
    /// Length of the current interval in days.
    pub interval_days: u32,
    /// Consecutive correct answers.
    pub streak: u32,
    pub support_level: SupportLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_result: Option<LastResult>,
}

impl ReviewState {
    /// Whether the item is eligible for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }
}

/// The most recent graded attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastResult {
    pub correct: bool,
    pub hints_used: u32,
    pub reviewed_at: DateTime<Utc>,
}

/// Grade of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub correct: bool,
    pub hints_used: u32,
}

impl ReviewOutcome {
    pub fn correct(hints_used: u32) -> Self {
        Self {
            correct: true,
            hints_used,
        }
    }

    pub fn incorrect(hints_used: u32) -> Self {
        Self {
            correct: false,
            hints_used,
        }
    }
}

/// Move the support level one step based on a graded attempt.
pub fn adjust_support_level(level: SupportLevel, correct: bool, hints_used: u32) -> SupportLevel {
    if correct && hints_used == 0 {
        level.decrease()
    } else if !correct {
        level.increase()
    } else {
        level
    }
}

/// Review scheduler over a validated [`SchedulerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewScheduler {
    ladder: Vec<u32>,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self {
            ladder: SchedulerConfig::default().interval_ladder_days,
        }
    }
}

impl ReviewScheduler {
    pub fn new(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ladder: config.interval_ladder_days.clone(),
        })
    }

    /// State for an item the learner is about to see for the first time.
    pub fn initial_state(&self, item_id: impl Into<String>, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            item_id: item_id.into(),
            due_at: now,
            interval_days: 0,
            streak: 0,
            support_level: SupportLevel::MAX,
            last_result: None,
        }
    }

    /// Interval after `streak` consecutive correct answers. The last rung
    /// repeats once the streak outgrows the ladder.
    fn interval_for_streak(&self, streak: u32) -> u32 {
        let rung = (streak.saturating_sub(1) as usize).min(self.ladder.len() - 1);
        self.ladder[rung]
    }

    /// State after one graded attempt at `now`.
    pub fn next_state(
        &self,
        current: &ReviewState,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> ReviewState {
        let (streak, interval_days) = if outcome.correct {
            let streak = current.streak.saturating_add(1);
            (streak, self.interval_for_streak(streak))
        } else {
            (0, self.ladder[0])
        };

        let support_level =
            adjust_support_level(current.support_level, outcome.correct, outcome.hints_used);

        tracing::debug!(
            item = %current.item_id,
            correct = outcome.correct,
            hints = outcome.hints_used,
            streak,
            interval_days,
            support = %support_level,
            "review state updated"
        );

        ReviewState {
            item_id: current.item_id.clone(),
            due_at: due_after(now, interval_days),
            interval_days,
            streak,
            support_level,
            last_result: Some(LastResult {
                correct: outcome.correct,
                hints_used: outcome.hints_used,
                reviewed_at: now,
            }),
        }
    }
}

/// `now` plus `days`, clamped to the latest representable instant.
fn due_after(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|interval| now.checked_add_signed(interval))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Initial state with the default scheduler.
pub fn create_initial_review_state(item_id: impl Into<String>, now: DateTime<Utc>) -> ReviewState {
    ReviewScheduler::default().initial_state(item_id, now)
}

/// Next state with the default interval ladder.
pub fn compute_next_review_state(
    current: &ReviewState,
    outcome: ReviewOutcome,
    now: DateTime<Utc>,
) -> ReviewState {
    ReviewScheduler::default().next_state(current, outcome, now)
}
