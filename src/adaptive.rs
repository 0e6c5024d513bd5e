//! Adaptive Difficulty
//!
//! Derives a confidence score from raw answer signals, proposes the next
//! difficulty tier from recent aggregate performance, and turns aggregate
//! statistics into short guidance strings.

use serde::{Deserialize, Serialize};

use crate::sanitize::{clamp01, clamp_percent, safe_ratio};
use crate::types::{AggregateStatistics, DifficultyLevel};

/// Thresholds driving tier moves and recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveConfig {
    /// Performance score above which the tier moves one step up
    pub step_up_threshold: f64,
    /// Performance score below which the tier moves one step down
    pub step_down_threshold: f64,
    /// Due reviews above this count trigger a backlog recommendation
    pub due_backlog_threshold: usize,
    /// Items in the learning phase above this count trigger a load warning
    pub learning_load_threshold: usize,
    /// Average ease factor below this hints the content is too hard
    pub low_ease_threshold: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            step_up_threshold: 0.8,
            step_down_threshold: 0.4,
            due_backlog_threshold: 5,
            learning_load_threshold: 10,
            low_ease_threshold: 1.5,
        }
    }
}

/// Score a single answer's confidence on a 0-100 scale.
///
/// Additive components: correctness contributes up to 40 points, answer
/// speed relative to the learner's average up to 30, and historical
/// accuracy up to 30. A non-positive average response time disables the
/// speed comparison (treated as a neutral ratio of 1).
pub fn score_confidence(
    was_correct: bool,
    response_time_seconds: f64,
    average_response_time_seconds: f64,
    historical_accuracy: f64,
) -> u8 {
    let correctness: u32 = if was_correct { 40 } else { 10 };

    let ratio = safe_ratio(response_time_seconds, average_response_time_seconds);
    let speed: u32 = if ratio < 0.5 {
        30
    } else if ratio < 1.0 {
        20
    } else if ratio < 2.0 {
        10
    } else {
        0
    };

    let history = (clamp01(historical_accuracy) * 30.0).round() as u32;

    clamp_percent((correctness + speed + history) as u8)
}

/// Propose the next difficulty tier from recent performance.
///
/// `performance = correct_rate * confidence`; above the step-up threshold
/// the tier moves one step harder, below the step-down threshold one step
/// easier, otherwise it stays put. Never moves more than one step per
/// call, so a single outlier session cannot whiplash the difficulty.
pub fn suggest_next_level(
    current: DifficultyLevel,
    correct_rate: f64,
    confidence_percent: u8,
    config: &AdaptiveConfig,
) -> DifficultyLevel {
    let confidence = f64::from(clamp_percent(confidence_percent)) / 100.0;
    let performance = clamp01(correct_rate) * confidence;

    if performance > config.step_up_threshold {
        current.harder()
    } else if performance < config.step_down_threshold {
        current.easier()
    } else {
        current
    }
}

/// Build guidance strings from aggregate statistics, in priority order.
///
/// Always returns at least one entry; when no check fires, a single
/// encouragement message stands in for the empty list.
pub fn build_recommendations(stats: &AggregateStatistics, config: &AdaptiveConfig) -> Vec<String> {
    let mut recommendations = Vec::new();

    if stats.due_count > config.due_backlog_threshold {
        recommendations.push(format!(
            "You have {} reviews waiting. Clear the backlog before taking on new material.",
            stats.due_count
        ));
    }

    if stats.learning_count > config.learning_load_threshold {
        recommendations.push(format!(
            "{} items are still in the learning phase. Ease off new items until they stabilize.",
            stats.learning_count
        ));
    }

    if stats.new_count > 0 {
        recommendations.push(format!(
            "{} new items are ready to start learning.",
            stats.new_count
        ));
    }

    if stats
        .average_ease_factor
        .is_some_and(|ease| ease < config.low_ease_threshold)
    {
        recommendations.push(
            "Reviews have been rough lately. Consider revisiting the fundamentals before raising difficulty.".to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push("You're doing great. Keep up the steady reviews!".to_string());
    }

    recommendations
}
