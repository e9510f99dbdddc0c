//! EchoVault - mood analysis for an emotion journal
//!
//! Classifies free-form journal text into an emotion with an intensity,
//! matched keywords and a display color, and keeps a bounded history of
//! classifications for timeline and summary views.

pub mod config;
pub mod error;
pub mod history;
pub mod intelligence;
pub mod types;

pub use config::MoodConfig;
pub use error::{EchoVaultError, Result};
pub use history::{MoodHistory, SharedMoodHistory};
pub use intelligence::{Lexicon, MoodClassifier};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
