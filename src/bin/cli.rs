//! EchoVault CLI
//!
//! Command-line front end for mood classification and session history.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echovault::config::{
    ENV_HISTORY_CAPACITY, ENV_RECENT_WINDOW, ENV_SEED_HISTORY, ENV_TIMELINE_WINDOW,
};
use echovault::error::{EchoVaultError, Result};
use echovault::history::{recent_emotions, summarize, timeline, MoodHistory};
use echovault::{MoodClassifier, MoodConfig, MoodData, HEADLINE_KEYWORDS};

#[derive(Parser)]
#[command(name = "echovault")]
#[command(about = "EchoVault mood analysis CLI")]
#[command(version)]
struct Cli {
    /// Maximum number of moods kept in a session history
    #[arg(long, env = ENV_HISTORY_CAPACITY, default_value_t = MoodConfig::default().history_capacity)]
    history_capacity: usize,

    /// Pre-populate session history with sample entries
    #[arg(
        long,
        env = ENV_SEED_HISTORY,
        default_value_t = MoodConfig::default().seed_history,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    seed_history: bool,

    /// Entries shown on the timeline
    #[arg(long, env = ENV_TIMELINE_WINDOW, default_value_t = MoodConfig::default().timeline_window)]
    timeline_window: usize,

    /// Entries shown in the recent-emotions strip
    #[arg(long, env = ENV_RECENT_WINDOW, default_value_t = MoodConfig::default().recent_window)]
    recent_window: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a piece of text
    Classify {
        /// Text to analyze
        text: String,
        /// Classification time (RFC 3339), defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// List the emotion lexicon
    Lexicon {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze entries into a session and show the timeline
    Timeline {
        /// Journal entries, analyzed in order
        entries: Vec<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive mode
    Interactive,
}

impl Cli {
    fn mood_config(&self) -> Result<MoodConfig> {
        let config = MoodConfig {
            history_capacity: self.history_capacity,
            seed_history: self.seed_history,
            timeline_window: self.timeline_window,
            recent_window: self.recent_window,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.mood_config()?;
    let classifier = MoodClassifier::default();

    match cli.command {
        Commands::Classify { text, at, json } => {
            let now = match at {
                Some(raw) => parse_timestamp(&raw)?,
                None => Utc::now(),
            };
            let mood = classifier.classify(&text, now);
            if json {
                println!("{}", serde_json::to_string_pretty(&mood)?);
            } else {
                println!("{}", meter_line(&mood));
                println!("Keywords: {}", mood.keywords.join(", "));
            }
        }

        Commands::Lexicon { json } => {
            let lexicon = classifier.lexicon();
            if json {
                println!("{}", serde_json::to_string_pretty(lexicon.lookup_all())?);
            } else {
                for emotion in lexicon.lookup_all() {
                    println!(
                        "{:<10} {}  {}",
                        emotion.name,
                        emotion.color,
                        emotion.keywords.join(", ")
                    );
                }
            }
        }

        Commands::Timeline { entries, json } => {
            let now = Utc::now();
            let mut history = MoodHistory::with_config(&classifier, &config, now);
            for entry in &entries {
                history.analyze(&classifier, entry, now);
            }

            let points = timeline(history.history(), config.timeline_window);
            let recent = recent_emotions(history.history(), config.recent_window);
            let summary = summarize(history.history(), classifier.lexicon());

            if json {
                let report = serde_json::json!({
                    "current": history.current(),
                    "timeline": points,
                    "recent": recent,
                    "summary": summary,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Currently feeling {}", meter_line(history.current()));
                println!();
                println!("Mood Timeline");
                for point in &points {
                    println!(
                        "  {}  {:<10} {:>3}%  {}",
                        point.label, point.emotion, point.intensity_percent, point.color
                    );
                }
                println!();
                let names: Vec<_> = recent.iter().map(|r| r.emotion.as_str()).collect();
                println!("Recent Emotions: {}", names.join(", "));
                println!(
                    "Entries: {}, dominant: {}, average intensity: {}",
                    summary.total,
                    summary.dominant.as_deref().unwrap_or("-"),
                    summary
                        .average_intensity
                        .map(|v| format!("{:.0}%", v * 100.0))
                        .unwrap_or_else(|| "-".to_string())
                );
            }
        }

        Commands::Interactive => {
            println!("EchoVault Interactive Mode");
            println!("Describe how you feel; 'history' shows the timeline, 'quit' exits\n");

            let mut history = MoodHistory::with_config(&classifier, &config, Utc::now());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let mut lines = stdin.lock().lines();

            loop {
                print!("mood> ");
                stdout.flush()?;

                let line = match lines.next() {
                    Some(line) => line?,
                    None => break,
                };
                let line = line.trim();

                match line {
                    "" => continue,
                    "quit" | "exit" => break,
                    "history" => {
                        for point in timeline(history.history(), config.timeline_window) {
                            println!(
                                "  {}  {} ({}%)",
                                point.label, point.emotion, point.intensity_percent
                            );
                        }
                    }
                    text => {
                        let mood = history.analyze(&classifier, text, Utc::now());
                        println!("{}", meter_line(&mood));
                    }
                }
            }

            println!("Goodbye!");
        }
    }

    Ok(())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EchoVaultError::InvalidInput(format!("invalid timestamp {:?}: {}", raw, e)))
}

fn meter_line(mood: &MoodData) -> String {
    format!(
        "{} {}% [{}]",
        mood.emotion,
        mood.intensity_percent(),
        mood.headline_keywords(HEADLINE_KEYWORDS).join(", ")
    )
}
