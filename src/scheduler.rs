//! SM-2 Review Scheduler
//!
//! Converts one performance observation into the next review schedule
//! using a quality-scored variant of the SM-2 algorithm: correctness and
//! self-rated confidence map to a 0-5 quality score, which drives the
//! ease-factor update and interval selection.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::sanitize::clamp_percent;
use crate::types::{
    PerformanceSample, ReviewState, FIRST_INTERVAL_DAYS, INITIAL_EASE, MIN_EASE, PASS_QUALITY,
    SECOND_INTERVAL_DAYS,
};

/// Tunable scheduler bounds. The SM-2 update formulas themselves are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Ease factor assumed for an item with no prior state
    pub initial_ease: f64,
    /// Floor for the ease factor
    pub min_ease: f64,
    /// Interval for the first repetition and for any failed review, in days
    pub first_interval_days: u32,
    /// Interval for the second consecutive passing repetition, in days
    pub second_interval_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_ease: INITIAL_EASE,
            min_ease: MIN_EASE,
            first_interval_days: FIRST_INTERVAL_DAYS,
            second_interval_days: SECOND_INTERVAL_DAYS,
        }
    }
}

/// Map correctness plus confidence to an SM-2 quality score in 0..=5.
///
/// A wrong answer given with high confidence still earns 2 (the learner
/// engaged with the item), while a low-confidence miss earns 0.
pub fn quality_score(was_correct: bool, confidence_percent: u8) -> u8 {
    let confidence = clamp_percent(confidence_percent);
    if !was_correct {
        return if confidence < 30 { 0 } else { 2 };
    }
    if confidence >= 90 {
        5
    } else if confidence >= 75 {
        4
    } else if confidence >= 50 {
        3
    } else {
        2
    }
}

/// Standard SM-2 ease update, applied on pass and fail alike.
fn next_ease(ease: f64, quality: u8, min_ease: f64) -> f64 {
    let miss = f64::from(5 - quality.min(5));
    let updated = ease + (0.1 - miss * (0.08 + miss * 0.02));
    updated.max(min_ease)
}

/// Compute the next review schedule for one answer event.
///
/// `previous` is `None` on the first-ever review of an item, which is
/// treated identically to a state with zero repetitions, a zero-day
/// interval and the initial ease factor. `now` is the wall-clock instant
/// of the review, injected by the caller. `item_id`/`owner_id` identify
/// the pair when no prior state exists; an existing state carries its own.
///
/// The result always satisfies `interval_days >= 1` and
/// `ease_factor >= config.min_ease`; a failed review snaps the interval
/// back to `first_interval_days` regardless of how long it had grown.
pub fn compute_next(
    previous: Option<&ReviewState>,
    sample: &PerformanceSample,
    item_id: &str,
    owner_id: &str,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> ReviewState {
    let (prev_repetitions, prev_interval, prev_ease) = match previous {
        Some(state) => (
            state.repetition_count,
            state.interval_days,
            if state.ease_factor.is_finite() {
                state.ease_factor
            } else {
                config.initial_ease
            },
        ),
        None => (0, 0, config.initial_ease),
    };

    let quality = quality_score(sample.was_correct, sample.confidence_percent);
    let ease = next_ease(prev_ease, quality, config.min_ease);

    let (interval_days, repetition_count) = if quality < PASS_QUALITY {
        // Forgot: restart the learning cycle. The failed review itself
        // counts as repetition 1 of the new cycle.
        (config.first_interval_days.max(1), 1)
    } else {
        let interval = match prev_repetitions {
            0 => config.first_interval_days,
            1 => config.second_interval_days,
            _ => (f64::from(prev_interval) * ease).round() as u32,
        };
        (interval.max(1), prev_repetitions + 1)
    };

    let (item_id, owner_id) = match previous {
        Some(state) => (state.item_id.clone(), state.owner_id.clone()),
        None => (item_id.to_string(), owner_id.to_string()),
    };

    ReviewState {
        item_id,
        owner_id,
        next_review_at: now + Duration::days(i64::from(interval_days)),
        interval_days,
        ease_factor: ease,
        repetition_count,
        last_reviewed_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn sample(was_correct: bool, confidence_percent: u8) -> PerformanceSample {
        PerformanceSample {
            was_correct,
            confidence_percent,
            response_time_seconds: 5.0,
        }
    }

    fn state(interval_days: u32, ease_factor: f64, repetition_count: u32) -> ReviewState {
        ReviewState {
            item_id: "item-1".to_string(),
            owner_id: "owner-1".to_string(),
            next_review_at: at(0),
            interval_days,
            ease_factor,
            repetition_count,
            last_reviewed_at: at(0),
        }
    }

    #[test]
    fn test_quality_mapping() {
        assert_eq!(quality_score(false, 10), 0);
        assert_eq!(quality_score(false, 29), 0);
        assert_eq!(quality_score(false, 30), 2);
        assert_eq!(quality_score(true, 95), 5);
        assert_eq!(quality_score(true, 90), 5);
        assert_eq!(quality_score(true, 80), 4);
        assert_eq!(quality_score(true, 50), 3);
        assert_eq!(quality_score(true, 49), 2);
        // Out-of-range confidence clamps instead of erroring
        assert_eq!(quality_score(true, 255), 5);
    }

    #[test]
    fn test_first_review_confident_pass() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let next = compute_next(None, &sample(true, 95), "item-1", "owner-1", now, &config);

        assert_eq!(next.interval_days, 1);
        assert_eq!(next.repetition_count, 1);
        assert!((next.ease_factor - 2.6).abs() < 1e-9);
        assert_eq!(next.next_review_at, now + Duration::days(1));
        assert_eq!(next.last_reviewed_at, now);
        assert_eq!(next.item_id, "item-1");
        assert_eq!(next.owner_id, "owner-1");
    }

    #[test]
    fn test_first_review_equivalence() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let explicit_fresh = state(0, INITIAL_EASE, 0);

        for s in [
            sample(true, 95),
            sample(true, 60),
            sample(false, 10),
            sample(false, 80),
        ] {
            let from_none = compute_next(None, &s, "item-1", "owner-1", now, &config);
            let from_fresh =
                compute_next(Some(&explicit_fresh), &s, "item-1", "owner-1", now, &config);
            assert_eq!(from_none, from_fresh);
        }
    }

    #[test]
    fn test_third_repetition_scales_by_ease() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let previous = state(3, 2.5, 2);

        let next = compute_next(Some(&previous), &sample(true, 80), "x", "y", now, &config);

        // q = 4 leaves the ease factor unchanged; round(3 * 2.5) = 8
        assert!((next.ease_factor - 2.5).abs() < 1e-9);
        assert_eq!(next.interval_days, 8);
        assert_eq!(next.repetition_count, 3);
    }

    #[test]
    fn test_second_repetition_fixed_interval() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let previous = state(1, 2.6, 1);

        let next = compute_next(Some(&previous), &sample(true, 92), "x", "y", now, &config);
        assert_eq!(next.interval_days, 3);
        assert_eq!(next.repetition_count, 2);
    }

    #[test]
    fn test_failure_snaps_interval_to_one_day() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let previous = state(10, 2.5, 4);

        let next = compute_next(Some(&previous), &sample(false, 10), "x", "y", now, &config);

        // q = 0: ease drops by 0.8 but stays above the floor
        assert_eq!(next.interval_days, 1);
        assert_eq!(next.repetition_count, 1);
        assert!((next.ease_factor - 1.7).abs() < 1e-9);
        assert_eq!(next.next_review_at, now + Duration::days(1));
    }

    #[test]
    fn test_ease_never_below_floor() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let mut current = state(1, MIN_EASE, 1);

        for _ in 0..10 {
            current = compute_next(Some(&current), &sample(false, 5), "x", "y", now, &config);
            assert!(current.ease_factor >= MIN_EASE);
            assert_eq!(current.interval_days, 1);
        }
    }

    #[test]
    fn test_confident_failure_keeps_restarting_cycle() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let previous = state(30, 2.8, 6);

        // Wrong but confident: q = 2, still a failed review
        let next = compute_next(Some(&previous), &sample(false, 85), "x", "y", now, &config);
        assert_eq!(next.interval_days, 1);
        assert_eq!(next.repetition_count, 1);
    }

    #[test]
    fn test_identity_carried_from_previous() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let previous = state(3, 2.5, 2);

        let next = compute_next(
            Some(&previous),
            &sample(true, 70),
            "ignored",
            "ignored",
            now,
            &config,
        );
        assert_eq!(next.item_id, "item-1");
        assert_eq!(next.owner_id, "owner-1");
    }

    #[test]
    fn test_next_review_matches_interval_invariant() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        let next = compute_next(None, &sample(true, 75), "a", "b", now, &config);
        assert_eq!(
            next.next_review_at,
            next.last_reviewed_at + Duration::days(i64::from(next.interval_days))
        );
    }

    #[test]
    fn test_degenerate_previous_interval_still_positive() {
        let now = at(1_700_000_000_000);
        let config = SchedulerConfig::default();
        // A hand-crafted state with a zero interval at high repetitions
        let previous = state(0, 2.5, 5);

        let next = compute_next(Some(&previous), &sample(true, 95), "x", "y", now, &config);
        assert!(next.interval_days >= 1);
    }
}
