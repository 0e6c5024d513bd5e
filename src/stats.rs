//! Review Statistics
//!
//! Pure folds over one owner's review states: due-item filtering and
//! aggregate bucket counts. Callers load the states, this module only
//! summarizes them.

use chrono::{DateTime, Utc};

use crate::types::{AggregateStatistics, ReviewState};

/// All states whose next review instant has passed, most overdue first.
///
/// Sorted ascending by `next_review_at` so hosts and tests see a
/// deterministic order.
pub fn due_items<'a>(states: &'a [ReviewState], now: DateTime<Utc>) -> Vec<&'a ReviewState> {
    let mut due: Vec<&ReviewState> = states.iter().filter(|s| s.is_due(now)).collect();
    due.sort_by_key(|s| s.next_review_at);
    due
}

/// Fold a collection of review states into aggregate statistics.
///
/// Bucket rules: `new` counts zero-repetition states regardless of
/// due-ness; `learning` and `mature` split the not-yet-due remainder by
/// repetition count. The average ease factor is `None` for an empty
/// collection, never NaN.
pub fn summarize(states: &[ReviewState], now: DateTime<Utc>) -> AggregateStatistics {
    let mut stats = AggregateStatistics {
        total: states.len(),
        ..Default::default()
    };

    let mut ease_sum = 0.0;
    for state in states {
        ease_sum += state.ease_factor;

        if state.is_due(now) {
            stats.due_count += 1;
        }
        if state.is_new() {
            stats.new_count += 1;
        } else if !state.is_due(now) {
            if state.is_mature() {
                stats.mature_count += 1;
            } else {
                stats.learning_count += 1;
            }
        }
    }

    stats.average_ease_factor = if states.is_empty() {
        None
    } else {
        Some(ease_sum / states.len() as f64)
    };

    stats
}
