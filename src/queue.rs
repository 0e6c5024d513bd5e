//! Review Queue
//!
//! Session-queue helpers: pick the most urgent due items, then shuffle
//! the batch for presentation. Shuffling is Fisher-Yates over a seeded
//! ChaCha generator so hosts and tests get reproducible orderings.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::stats::due_items;
use crate::types::ReviewState;

/// Deterministic generator for a caller-supplied seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fisher-Yates shuffle with an injectable random source.
pub fn shuffled<T, R: Rng>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Build a review session of at most `limit` items.
///
/// Selection is by urgency (most overdue first); the selected batch is
/// then shuffled so the learner does not see items in the same order
/// every session.
pub fn session_queue<'a>(
    states: &'a [ReviewState],
    now: DateTime<Utc>,
    limit: usize,
    seed: u64,
) -> Vec<&'a ReviewState> {
    let mut queue = due_items(states, now);
    queue.truncate(limit);

    let mut rng = seeded_rng(seed);
    queue.shuffle(&mut rng);
    queue
}
