//! Bounded mood history
//!
//! Holds the current mood plus a chronological, capacity-bounded log of
//! recorded classifications. Oldest entries are evicted first.

pub mod timeline;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::MoodConfig;
use crate::intelligence::MoodClassifier;
use crate::types::{MoodData, DEFAULT_HISTORY_CAPACITY};

pub use timeline::{
    recent_emotions, summarize, timeline, EmotionCount, MoodSummary, RecentEmotion, TimelinePoint,
};

/// Sample entries used to pre-populate a new session, most recent first.
/// Entry `i` is dated `i + 1` days before session start.
pub const SAMPLE_ENTRIES: [&str; 5] = [
    "Feeling grateful for this beautiful morning",
    "Missing my childhood friends today",
    "Excited about the upcoming adventure",
    "Reflecting on peaceful moments by the lake",
    "Worried about tomorrow's presentation",
];

/// Single-owner mood state for one session
#[derive(Debug, Clone)]
pub struct MoodHistory {
    current: MoodData,
    entries: Vec<MoodData>,
    capacity: usize,
}

impl MoodHistory {
    /// Empty history with the default initial mood
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY, now)
    }

    /// Empty history bounded to `capacity` entries (at least one)
    pub fn with_capacity(capacity: usize, now: DateTime<Utc>) -> Self {
        Self {
            current: MoodData::initial(now),
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// History pre-populated with [`SAMPLE_ENTRIES`]
    pub fn seeded(classifier: &MoodClassifier, now: DateTime<Utc>) -> Self {
        let mut history = Self::new(now);
        history.seed(classifier, now);
        history
    }

    /// History built from session configuration
    pub fn with_config(
        classifier: &MoodClassifier,
        config: &MoodConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let mut history = Self::with_capacity(config.history_capacity, now);
        if config.seed_history {
            history.seed(classifier, now);
        }
        history
    }

    fn seed(&mut self, classifier: &MoodClassifier, now: DateTime<Utc>) {
        let mut samples: Vec<MoodData> = SAMPLE_ENTRIES
            .iter()
            .enumerate()
            .map(|(i, text)| classifier.classify(text, now - Duration::days(i as i64 + 1)))
            .collect();
        samples.reverse();

        // Seeding fills the log only; the current mood stays at its initial value.
        self.entries.extend(samples);
        self.evict();
        debug!(entries = self.entries.len(), "seeded mood history");
    }

    /// Make `mood` current and append it to the log
    pub fn record(&mut self, mood: MoodData) {
        self.entries.push(mood.clone());
        self.current = mood;
        self.evict();
    }

    /// Classify `text`, record the result and return it
    pub fn analyze(
        &mut self,
        classifier: &MoodClassifier,
        text: &str,
        now: DateTime<Utc>,
    ) -> MoodData {
        let mood = classifier.classify(text, now);
        self.record(mood.clone());
        mood
    }

    fn evict(&mut self) {
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
            trace!(evicted = excess, "evicted oldest mood entries");
        }
    }

    pub fn current(&self) -> &MoodData {
        &self.current
    }

    /// Recorded moods, oldest first
    pub fn history(&self) -> &[MoodData] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Cloneable handle that serializes access to one [`MoodHistory`]
#[derive(Debug, Clone)]
pub struct SharedMoodHistory {
    inner: Arc<Mutex<MoodHistory>>,
}

impl SharedMoodHistory {
    pub fn new(history: MoodHistory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(history)),
        }
    }

    pub fn record(&self, mood: MoodData) {
        self.inner.lock().record(mood);
    }

    pub fn analyze(
        &self,
        classifier: &MoodClassifier,
        text: &str,
        now: DateTime<Utc>,
    ) -> MoodData {
        // Classify outside the lock; only the append needs serializing.
        let mood = classifier.classify(text, now);
        self.record(mood.clone());
        mood
    }

    pub fn current(&self) -> MoodData {
        self.inner.lock().current().clone()
    }

    pub fn history(&self) -> Vec<MoodData> {
        self.inner.lock().history().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
