//! Common Types and Constants
//!
//! Shared data structures used across all scheduling modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Ease factor assigned to an item that has never been reviewed
pub const INITIAL_EASE: f64 = 2.5;

/// Lower bound for the ease factor
pub const MIN_EASE: f64 = 1.3;

/// Interval served on the first repetition and after a failed review, in days
pub const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval served on the second consecutive passing repetition, in days
pub const SECOND_INTERVAL_DAYS: u32 = 3;

/// Minimum quality score that counts as a passing review
pub const PASS_QUALITY: u8 = 3;

/// Consecutive passing repetitions after which an item counts as mature
pub const MATURE_REPETITIONS: u32 = 3;

// ==================== Difficulty ====================

/// Ordered difficulty tier for served exercises.
///
/// The adapter moves at most one tier per call, so the order of the
/// variants is load-bearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// One step up, clamped at `Expert`.
    pub fn harder(&self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// One step down, clamped at `Easy`.
    pub fn easier(&self) -> Self {
        match self {
            Self::Expert => Self::Hard,
            Self::Hard => Self::Medium,
            _ => Self::Easy,
        }
    }

    /// Lenient parse; unknown labels fall back to `Medium`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            "expert" => Self::Expert,
            _ => Self::Medium,
        }
    }
}

// ==================== Review state ====================

/// Mutable scheduling state for one (owner, item) pair.
///
/// Produced exclusively by [`crate::scheduler::compute_next`], once per
/// answer event. Timestamps serialize as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub item_id: String,
    pub owner_id: String,
    /// When this item should next be shown
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub next_review_at: DateTime<Utc>,
    /// Days until the next review as of the last update, always >= 1
    pub interval_days: u32,
    /// SM-2 ease factor, always >= [`MIN_EASE`]
    pub ease_factor: f64,
    /// Consecutive passing reviews; resets to 1 on failure
    pub repetition_count: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_reviewed_at: DateTime<Utc>,
}

impl ReviewState {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }

    pub fn is_new(&self) -> bool {
        self.repetition_count == 0
    }

    pub fn is_mature(&self) -> bool {
        self.repetition_count >= MATURE_REPETITIONS
    }
}

// ==================== Performance sample ====================

/// One observed answer event. Ephemeral input, never persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    pub was_correct: bool,
    /// Self-rated or derived confidence, 0-100; out-of-range values are clamped
    pub confidence_percent: u8,
    pub response_time_seconds: f64,
}

// ==================== Aggregate statistics ====================

/// Summary of one owner's review states, computed on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatistics {
    pub total: usize,
    /// States whose next review instant has passed
    pub due_count: usize,
    /// States with no passing review yet (repetition count 0)
    pub new_count: usize,
    /// States mid-cycle (0 < repetitions < mature) and not yet due
    pub learning_count: usize,
    /// States at or past the mature repetition count and not yet due
    pub mature_count: usize,
    /// `None` when there are no states; never NaN
    pub average_ease_factor: Option<f64>,
}
