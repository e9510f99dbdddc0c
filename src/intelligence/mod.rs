//! Mood analysis engine
//!
//! Provides:
//! - The emotion lexicon (keywords and colors per emotion)
//! - Keyword-based mood classification

pub mod classifier;
pub mod lexicon;

pub use classifier::{compute_intensity, MoodClassifier};
pub use lexicon::Lexicon;
