//! Keyword-based mood classification
//!
//! Maps free-form text onto the emotion whose keywords it mentions most.
//! The mapping is total: empty or unrecognized text falls back to the
//! lexicon's first emotion.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::lexicon::Lexicon;
use crate::types::{EmotionDefinition, MoodData};

/// Base intensity before any keyword or length contribution
pub const BASE_INTENSITY: f64 = 0.3;
/// Intensity added per distinct matched keyword
pub const KEYWORD_WEIGHT: f64 = 0.2;
/// Characters of input that add a full 1.0 of intensity
pub const LENGTH_SCALE: f64 = 500.0;

/// Mood classifier over a fixed lexicon
#[derive(Debug, Clone, Default)]
pub struct MoodClassifier {
    lexicon: Lexicon,
}

impl MoodClassifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify `text` as of `now`
    pub fn classify(&self, text: &str, now: DateTime<Utc>) -> MoodData {
        let normalized = text.to_lowercase();

        // Strictly-greater scan: ties stay with the earlier emotion.
        let mut best: &EmotionDefinition = self.lexicon.default_emotion();
        let mut best_matches: Vec<&str> = Vec::new();
        for emotion in self.lexicon.lookup_all() {
            let matches = emotion.matching_keywords(&normalized);
            if matches.len() > best_matches.len() {
                best = emotion;
                best_matches = matches;
            }
        }

        let intensity = compute_intensity(best_matches.len(), text.chars().count());
        let keywords = best_matches.into_iter().map(str::to_string).collect();
        let mood = MoodData::new(
            best.name.clone(),
            intensity,
            now,
            keywords,
            best.color.clone(),
        );

        debug!(
            emotion = %mood.emotion,
            intensity = mood.intensity,
            keywords = ?mood.keywords,
            "classified mood"
        );

        mood
    }

    /// Classify `text` with the current wall-clock time
    pub fn classify_now(&self, text: &str) -> MoodData {
        self.classify(text, Utc::now())
    }
}

/// `min(1, 0.3 + 0.2 * matches + chars / 500)`
pub fn compute_intensity(match_count: usize, char_count: usize) -> f64 {
    (BASE_INTENSITY + KEYWORD_WEIGHT * match_count as f64 + char_count as f64 / LENGTH_SCALE)
        .min(1.0)
}
