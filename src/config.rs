use crate::core::Pacing;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub persona_name: String,
    pub tagline: String,
    pub window_width: f32,
    pub window_height: f32,
    pub thinking_min_ms: u64,
    pub thinking_max_ms: u64,
    pub emotion_reset_ms: u64,
    /// Optional JSON file replacing the built-in replies
    pub responses_path: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    /// Builds the config from any key lookup; `Default` reads the environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let mut thinking_min_ms = millis("AI_HUMAN_THINK_MIN_MS", 1000);
        let mut thinking_max_ms = millis("AI_HUMAN_THINK_MAX_MS", 2500);
        if thinking_min_ms > thinking_max_ms {
            std::mem::swap(&mut thinking_min_ms, &mut thinking_max_ms);
        }

        Self {
            persona_name: lookup("AI_HUMAN_NAME").unwrap_or_else(|| "AI Human".to_string()),
            tagline: lookup("AI_HUMAN_TAGLINE")
                .unwrap_or_else(|| "A conscious presence in digital form".to_string()),
            window_width: 720.0,
            window_height: 640.0,
            thinking_min_ms,
            thinking_max_ms,
            emotion_reset_ms: millis("AI_HUMAN_EMOTION_RESET_MS", 3000),
            responses_path: lookup("AI_HUMAN_RESPONSES")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_file: lookup("AI_HUMAN_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs/ai_human.log")),
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            thinking_min: Duration::from_millis(self.thinking_min_ms),
            thinking_max: Duration::from_millis(self.thinking_max_ms),
            emotion_reset: Duration::from_millis(self.emotion_reset_ms),
        }
    }
}
