//! Derived views over a mood history
//!
//! Timeline chart points, the recent-emotions strip and per-emotion
//! statistics. All functions take history oldest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intelligence::Lexicon;
use crate::types::MoodData;

/// Label format for timeline points, e.g. "Mar 14"
pub const TIMELINE_LABEL_FORMAT: &str = "%b %d";

/// One point on the mood timeline chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub emotion: String,
    pub intensity: f64,
    pub intensity_percent: u8,
    pub color: String,
}

impl From<&MoodData> for TimelinePoint {
    fn from(mood: &MoodData) -> Self {
        Self {
            label: mood.timestamp.format(TIMELINE_LABEL_FORMAT).to_string(),
            timestamp: mood.timestamp,
            emotion: mood.emotion.clone(),
            intensity: mood.intensity,
            intensity_percent: mood.intensity_percent(),
            color: mood.color.clone(),
        }
    }
}

/// Entry in the recent-emotions strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEmotion {
    pub emotion: String,
    pub color: String,
}

/// How often one emotion appears in a history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub color: String,
    pub count: usize,
}

/// Aggregate statistics over a history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub total: usize,
    /// Non-zero counts in lexicon order, then unknown emotions by first appearance
    pub counts: Vec<EmotionCount>,
    /// Most frequent emotion; ties go to the earlier entry in `counts`
    pub dominant: Option<String>,
    pub average_intensity: Option<f64>,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

fn last_n(history: &[MoodData], n: usize) -> &[MoodData] {
    &history[history.len().saturating_sub(n)..]
}

/// The last `window` entries as chart points, oldest first
pub fn timeline(history: &[MoodData], window: usize) -> Vec<TimelinePoint> {
    last_n(history, window).iter().map(TimelinePoint::from).collect()
}

/// The last `window` emotions, newest first
pub fn recent_emotions(history: &[MoodData], window: usize) -> Vec<RecentEmotion> {
    last_n(history, window)
        .iter()
        .rev()
        .map(|mood| RecentEmotion {
            emotion: mood.emotion.clone(),
            color: mood.color.clone(),
        })
        .collect()
}

/// Count emotions and intensity over the whole history
pub fn summarize(history: &[MoodData], lexicon: &Lexicon) -> MoodSummary {
    let mut counts: Vec<EmotionCount> = lexicon
        .lookup_all()
        .iter()
        .map(|def| EmotionCount {
            emotion: def.name.clone(),
            color: def.color.clone(),
            count: 0,
        })
        .collect();

    // Records may predate a lexicon change, so unknown names get their own slot.
    for mood in history {
        match counts.iter_mut().find(|c| c.emotion == mood.emotion) {
            Some(slot) => slot.count += 1,
            None => counts.push(EmotionCount {
                emotion: mood.emotion.clone(),
                color: mood.color.clone(),
                count: 1,
            }),
        }
    }
    counts.retain(|c| c.count > 0);

    let mut dominant: Option<&EmotionCount> = None;
    for count in &counts {
        if dominant.map_or(true, |d| count.count > d.count) {
            dominant = Some(count);
        }
    }

    let average_intensity = if history.is_empty() {
        None
    } else {
        Some(history.iter().map(|m| m.intensity).sum::<f64>() / history.len() as f64)
    };

    MoodSummary {
        total: history.len(),
        dominant: dominant.map(|d| d.emotion.clone()),
        counts,
        average_intensity,
        oldest: history.iter().map(|m| m.timestamp).min(),
        newest: history.iter().map(|m| m.timestamp).max(),
    }
}
