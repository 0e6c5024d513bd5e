//! # srs-core - spaced-repetition scheduling engine
//!
//! Pure computational core for an adaptive learning application:
//!
//! - **Review scheduling** - a quality-scored SM-2 variant that turns one
//!   answer observation into the next review date, interval, ease factor
//!   and repetition count.
//! - **Difficulty adaptation** - confidence scoring from raw answer
//!   signals and one-step difficulty tier suggestions.
//! - **Review statistics** - due filtering and aggregate bucket counts
//!   over one owner's states, plus guidance strings.
//!
//! Everything here is a total, side-effect-free function over explicit
//! arguments: no I/O, no global clock, no shared mutable state. The host
//! application owns persistence and concurrency control; it reads a
//! [`ReviewState`], calls [`scheduler::compute_next`] (or the
//! [`SrsEngine`] facade), and writes the result back.
//!
//! ## Module structure
//!
//! - [`types`] - shared types and constants
//! - [`scheduler`] - SM-2 review scheduling
//! - [`adaptive`] - confidence scoring, tier suggestion, recommendations
//! - [`stats`] - due filtering and aggregate statistics
//! - [`queue`] - deterministic session-queue building
//! - [`sanitize`] - numeric input guards
//! - [`engine`] - stateless service facade bundling the configs
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use srs_core::{PerformanceSample, SrsEngine};
//!
//! let engine = SrsEngine::default();
//! let sample = PerformanceSample {
//!     was_correct: true,
//!     confidence_percent: 92,
//!     response_time_seconds: 4.5,
//! };
//! let state = engine.compute_next(None, &sample, "item-1", "owner-1", Utc::now());
//! assert_eq!(state.interval_days, 1);
//! assert_eq!(state.repetition_count, 1);
//! ```

pub mod adaptive;
pub mod engine;
pub mod queue;
pub mod sanitize;
pub mod scheduler;
pub mod stats;
pub mod types;

pub use types::*;

pub use scheduler::{compute_next, quality_score, SchedulerConfig};

pub use adaptive::{build_recommendations, score_confidence, suggest_next_level, AdaptiveConfig};

pub use stats::{due_items, summarize};

pub use queue::{seeded_rng, session_queue, shuffled};

pub use engine::SrsEngine;
