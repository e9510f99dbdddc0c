//! Core types for EchoVault mood analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of classifications retained in a mood history
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Number of keywords the live meter shows for the current mood
pub const HEADLINE_KEYWORDS: usize = 3;

/// A recognizable emotion: name, trigger keywords and display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionDefinition {
    /// Unique identifier (e.g. "joy")
    pub name: String,
    /// Lowercase trigger words, matched as substrings
    pub keywords: Vec<String>,
    /// Hex display color
    pub color: String,
}

impl EmotionDefinition {
    pub fn new(name: impl Into<String>, keywords: &[&str], color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            color: color.into(),
        }
    }

    /// Keywords occurring in already-lowercased text, in lexicon order.
    /// Each keyword is counted once regardless of repetition.
    pub fn matching_keywords(&self, normalized: &str) -> Vec<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(|kw| normalized.contains(kw))
            .collect()
    }
}

/// A single mood classification
///
/// Color is copied from the lexicon at classification time, so later
/// lexicon changes never rewrite recorded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodData {
    pub emotion: String,
    /// Strength in [0.0, 1.0]
    pub intensity: f64,
    pub timestamp: DateTime<Utc>,
    /// Matched keywords; never empty
    pub keywords: Vec<String>,
    pub color: String,
}

impl MoodData {
    /// Build a record, clamping intensity and filling empty keywords
    /// with the emotion name.
    pub fn new(
        emotion: impl Into<String>,
        intensity: f64,
        timestamp: DateTime<Utc>,
        keywords: Vec<String>,
        color: impl Into<String>,
    ) -> Self {
        let emotion = emotion.into();
        let keywords = if keywords.is_empty() {
            vec![emotion.clone()]
        } else {
            keywords
        };
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };

        Self {
            emotion,
            intensity,
            timestamp,
            keywords,
            color: color.into(),
        }
    }

    /// Mood a fresh session starts in before anything is recorded
    pub fn initial(timestamp: DateTime<Utc>) -> Self {
        Self::new("calm", 0.5, timestamp, vec!["serene".to_string()], "#06b6d4")
    }

    /// Intensity as a whole percentage, clamped to 0..=100
    pub fn intensity_percent(&self) -> u8 {
        (self.intensity.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// The first `n` matched keywords
    pub fn headline_keywords(&self, n: usize) -> &[String] {
        &self.keywords[..n.min(self.keywords.len())]
    }
}
