//! Engine Facade
//!
//! [`SrsEngine`] bundles the scheduler and adapter configuration behind
//! one stateless service object. The host constructs it once and passes
//! it by reference to call sites; every method delegates to the pure
//! functions in the other modules, so the engine itself holds no mutable
//! state and is safe to share across threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adaptive::{self, AdaptiveConfig};
use crate::queue;
use crate::scheduler::{self, SchedulerConfig};
use crate::stats;
use crate::types::{AggregateStatistics, DifficultyLevel, PerformanceSample, ReviewState};

/// Stateless scheduling engine: configuration plus pure computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SrsEngine {
    pub scheduler: SchedulerConfig,
    pub adaptive: AdaptiveConfig,
}

impl SrsEngine {
    pub fn new(scheduler: SchedulerConfig, adaptive: AdaptiveConfig) -> Self {
        Self { scheduler, adaptive }
    }

    /// Schedule the next review for one answer event.
    pub fn compute_next(
        &self,
        previous: Option<&ReviewState>,
        sample: &PerformanceSample,
        item_id: &str,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> ReviewState {
        let next = scheduler::compute_next(previous, sample, item_id, owner_id, now, &self.scheduler);
        tracing::debug!(
            item_id = %next.item_id,
            was_correct = sample.was_correct,
            interval_days = next.interval_days,
            ease_factor = next.ease_factor,
            repetition_count = next.repetition_count,
            "scheduled next review"
        );
        next
    }

    /// Derive a 0-100 confidence score from raw answer signals.
    pub fn score_confidence(
        &self,
        was_correct: bool,
        response_time_seconds: f64,
        average_response_time_seconds: f64,
        historical_accuracy: f64,
    ) -> u8 {
        adaptive::score_confidence(
            was_correct,
            response_time_seconds,
            average_response_time_seconds,
            historical_accuracy,
        )
    }

    /// Propose the difficulty tier for the next served item.
    pub fn suggest_next_level(
        &self,
        current: DifficultyLevel,
        correct_rate: f64,
        confidence_percent: u8,
    ) -> DifficultyLevel {
        let next =
            adaptive::suggest_next_level(current, correct_rate, confidence_percent, &self.adaptive);
        if next != current {
            tracing::debug!(
                from = current.as_str(),
                to = next.as_str(),
                correct_rate,
                confidence_percent,
                "difficulty tier adjusted"
            );
        }
        next
    }

    /// Guidance strings for the owner's current workload.
    pub fn build_recommendations(&self, stats: &AggregateStatistics) -> Vec<String> {
        adaptive::build_recommendations(stats, &self.adaptive)
    }

    /// Due states, most overdue first.
    pub fn due_items<'a>(
        &self,
        states: &'a [ReviewState],
        now: DateTime<Utc>,
    ) -> Vec<&'a ReviewState> {
        stats::due_items(states, now)
    }

    /// Aggregate statistics over one owner's states.
    pub fn summarize(&self, states: &[ReviewState], now: DateTime<Utc>) -> AggregateStatistics {
        stats::summarize(states, now)
    }

    /// Shuffled session of at most `limit` due items.
    pub fn session_queue<'a>(
        &self,
        states: &'a [ReviewState],
        now: DateTime<Utc>,
        limit: usize,
        seed: u64,
    ) -> Vec<&'a ReviewState> {
        queue::session_queue(states, now, limit, seed)
    }
}
