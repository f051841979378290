//! Sub-configuration structs with their defaults.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Default maximum decoded image size in bytes (1 MB).
pub const DEFAULT_MAX_SIZE: u64 = 1_000_000;

/// Default HEAD probe timeout in milliseconds.
pub const DEFAULT_HEAD_TIMEOUT_MS: u64 = 2000;

/// Default POST probe timeout in milliseconds.
pub const DEFAULT_POST_TIMEOUT_MS: u64 = 5000;

/// Limits applied to every validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum decoded image size in bytes.
    ///
    /// Accepts an integer or a numeric string; anything else falls back to
    /// [`DEFAULT_MAX_SIZE`].
    #[serde(deserialize_with = "deserialize_max_size")]
    pub max_size: u64,

    /// HEAD probe timeout in milliseconds
    pub head_timeout_ms: u64,

    /// POST probe timeout in milliseconds
    pub post_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            head_timeout_ms: DEFAULT_HEAD_TIMEOUT_MS,
            post_timeout_ms: DEFAULT_POST_TIMEOUT_MS,
        }
    }
}

impl LimitsConfig {
    /// Limits with a custom maximum image size and default timeouts.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            max_size: if max_size == 0 {
                DEFAULT_MAX_SIZE
            } else {
                max_size
            },
            ..Self::default()
        }
    }
}

/// Parse a user-supplied maximum size.
///
/// Reads the leading integer from `raw` (surrounding whitespace and trailing
/// junk are ignored, so `"2048 bytes"` is 2048). Returns [`DEFAULT_MAX_SIZE`]
/// when there is no leading integer or it is not positive.
pub fn parse_max_size(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    match digits.parse::<u64>() {
        Ok(value) if value > 0 && !negative => value,
        _ => DEFAULT_MAX_SIZE,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMaxSize {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_max_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let size = match RawMaxSize::deserialize(deserializer)? {
        RawMaxSize::Int(value) if value > 0 => value as u64,
        RawMaxSize::Float(value) if value.is_finite() && value >= 1.0 => value.trunc() as u64,
        RawMaxSize::Text(text) => parse_max_size(&text),
        _ => DEFAULT_MAX_SIZE,
    };
    Ok(size)
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
