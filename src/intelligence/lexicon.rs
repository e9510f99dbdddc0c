//! Emotion lexicon
//!
//! Static table of recognizable emotions with their trigger keywords and
//! display colors. Table order matters: the first entry is the fallback
//! emotion and earlier entries win classification ties.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EchoVaultError, Result};
use crate::types::EmotionDefinition;

static STANDARD: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    emotions: vec![
        EmotionDefinition::new(
            "joy",
            &["happy", "excited", "great", "amazing", "wonderful"],
            "#f59e0b",
        ),
        EmotionDefinition::new(
            "sadness",
            &["sad", "down", "depressed", "cry", "upset"],
            "#3b82f6",
        ),
        EmotionDefinition::new(
            "anger",
            &["angry", "mad", "furious", "hate", "annoyed"],
            "#ef4444",
        ),
        EmotionDefinition::new(
            "fear",
            &["scared", "afraid", "worried", "anxious", "nervous"],
            "#8b5cf6",
        ),
        EmotionDefinition::new(
            "love",
            &["love", "adore", "cherish", "romance", "heart"],
            "#ec4899",
        ),
        EmotionDefinition::new(
            "hope",
            &["hope", "optimistic", "future", "dream", "wish"],
            "#10b981",
        ),
        EmotionDefinition::new(
            "nostalgia",
            &["remember", "past", "miss", "memories", "childhood"],
            "#f97316",
        ),
        EmotionDefinition::new(
            "calm",
            &["peaceful", "serene", "quiet", "meditation", "zen"],
            "#06b6d4",
        ),
    ],
});

/// Ordered, non-empty set of emotions with unique names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLexicon")]
pub struct Lexicon {
    emotions: Vec<EmotionDefinition>,
}

/// Unvalidated wire form; deserialization goes through [`Lexicon::new`]
#[derive(Deserialize)]
struct RawLexicon {
    emotions: Vec<EmotionDefinition>,
}

impl TryFrom<RawLexicon> for Lexicon {
    type Error = EchoVaultError;

    fn try_from(raw: RawLexicon) -> Result<Self> {
        Self::new(raw.emotions)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

impl Lexicon {
    /// The built-in eight-emotion table, with `joy` as the fallback
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Build a custom lexicon. The first entry becomes the fallback.
    /// Keywords are lowercased so matching stays case-insensitive.
    pub fn new(mut emotions: Vec<EmotionDefinition>) -> Result<Self> {
        if emotions.is_empty() {
            return Err(EchoVaultError::InvalidInput(
                "lexicon must contain at least one emotion".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for emotion in &emotions {
            if !seen.insert(emotion.name.as_str()) {
                return Err(EchoVaultError::InvalidInput(format!(
                    "duplicate emotion name: {}",
                    emotion.name
                )));
            }
        }

        for emotion in &mut emotions {
            for keyword in &mut emotion.keywords {
                *keyword = keyword.to_lowercase();
            }
        }

        Ok(Self { emotions })
    }

    /// All emotions in lexicon order
    pub fn lookup_all(&self) -> &[EmotionDefinition] {
        &self.emotions
    }

    /// Fallback emotion used when nothing matches
    pub fn default_emotion(&self) -> &EmotionDefinition {
        &self.emotions[0]
    }

    pub fn get(&self, name: &str) -> Option<&EmotionDefinition> {
        self.emotions.iter().find(|e| e.name == name)
    }

    /// Like [`Lexicon::get`], but unknown names are an error
    pub fn require(&self, name: &str) -> Result<&EmotionDefinition> {
        self.get(name)
            .ok_or_else(|| EchoVaultError::UnknownEmotion(name.to_string()))
    }

    /// Position of an emotion in lexicon order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.emotions.iter().position(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.emotions.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }
}
