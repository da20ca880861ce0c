//! Configuration options for the banner and its text rotator

use crate::error::{BannerError, Result};
use crate::phrases::PhraseList;
use crate::timing::{millis, DurationRange};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Pause held once a phrase is fully typed
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2000);

/// Typing delay after a phrase has been fully deleted
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(500);

/// Window the first typing delay is drawn from (300ms minus up to 100ms of jitter)
pub const DEFAULT_TYPING_DELAY: DurationRange = DurationRange::from_millis(200, 300);

const CONFIG_FILE_NAME: &str = "banner.json";

/// Timing and content of the typewriter rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    /// Phrases to type and delete, in order
    pub phrases: PhraseList,

    /// Pause after a phrase is fully typed, before deletion begins
    #[serde(rename = "period_ms", with = "millis")]
    pub period: Duration,

    /// Range the initial typing delay is drawn from
    #[serde(rename = "typing_delay_ms")]
    pub typing_delay: DurationRange,

    /// Delay applied after a phrase has been fully deleted
    #[serde(rename = "reset_delay_ms", with = "millis")]
    pub reset_delay: Duration,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            phrases: PhraseList::default(),
            period: DEFAULT_PERIOD,
            typing_delay: DEFAULT_TYPING_DELAY,
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}

impl RotatorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phrases
    pub fn with_phrases(mut self, phrases: PhraseList) -> Self {
        self.phrases = phrases;
        self
    }

    /// Set the pause period
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Set the range of the initial typing delay
    pub fn with_typing_delay(mut self, range: DurationRange) -> Self {
        self.typing_delay = range;
        self
    }

    /// Use the same initial typing delay every time, without jitter
    pub fn with_fixed_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = DurationRange::fixed(delay);
        self
    }

    /// Set the delay used after a full delete
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.period.is_zero() {
            return Err(BannerError::Configuration(
                "Pause period must be greater than zero".to_string(),
            ));
        }
        if self.typing_delay.is_inverted() {
            return Err(BannerError::Configuration(format!(
                "Typing delay range is inverted: {:?} > {:?}",
                self.typing_delay.min(),
                self.typing_delay.max()
            )));
        }
        Ok(())
    }
}

/// Everything the banner section displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Small label above the heading
    pub tagline: String,

    /// Heading text shown before the rotating phrase
    pub greeting: String,

    /// Paragraph under the heading
    pub blurb: String,

    /// Label of the call-to-action button
    pub cta_label: String,

    /// Alt text of the header image
    pub header_image_alt: String,

    pub rotator: RotatorConfig,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            tagline: "Welcome to my Portfolio".to_string(),
            greeting: "Hi! I'm Shubham Rana".to_string(),
            blurb: "Lorem Ipsum is simply dummy text of the printing and typesetting industry."
                .to_string(),
            cta_label: "Let’s Connect".to_string(),
            header_image_alt: "Header Img".to_string(),
            rotator: RotatorConfig::default(),
        }
    }
}

impl BannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rotator configuration
    pub fn with_rotator(mut self, rotator: RotatorConfig) -> Self {
        self.rotator = rotator;
        self
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BannerConfig = serde_json::from_str(json)?;
        config.rotator.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!("Loaded banner config from {}", path.display());
        Ok(config)
    }

    /// Load an explicit file, or the default file if it exists, or the defaults.
    ///
    /// An explicit path must exist; a missing default file is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = Self::default_path()?;
        if default_path.exists() {
            Self::load(default_path)
        } else {
            debug!(
                "No config at {}, using defaults",
                default_path.display()
            );
            Ok(Self::default())
        }
    }

    /// XDG location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev.portfolio", "", "banner").ok_or_else(|| {
            BannerError::Configuration("Failed to get XDG directories".to_string())
        })?;

        Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_rotator_defaults() {
        let config = RotatorConfig::default();

        assert_eq!(config.phrases.len(), 3);
        assert_eq!(config.period, Duration::from_millis(2000));
        assert_eq!(config.reset_delay, Duration::from_millis(500));
        assert_eq!(config.typing_delay, DurationRange::from_millis(200, 300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RotatorConfig::new()
            .with_phrases(PhraseList::new(["Go"]).unwrap())
            .with_period(Duration::from_millis(10))
            .with_fixed_typing_delay(Duration::from_millis(3))
            .with_reset_delay(Duration::from_millis(5));

        assert_eq!(config.phrases.get(0), "Go");
        assert_eq!(config.period, Duration::from_millis(10));
        assert_eq!(config.typing_delay, DurationRange::fixed(Duration::from_millis(3)));
        assert_eq!(config.reset_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let config = RotatorConfig::new().with_period(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(BannerError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = RotatorConfig::new().with_typing_delay(DurationRange::from_millis(300, 200));
        assert!(matches!(
            config.validate(),
            Err(BannerError::Configuration(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BannerConfig::from_json(
            r#"{ "greeting": "Hello", "rotator": { "phrases": ["Go"], "period_ms": 1500 } }"#,
        )
        .unwrap();

        assert_eq!(config.greeting, "Hello");
        assert_eq!(config.tagline, "Welcome to my Portfolio");
        assert_eq!(config.rotator.phrases.get(0), "Go");
        assert_eq!(config.rotator.period, Duration::from_millis(1500));
        assert_eq!(config.rotator.reset_delay, DEFAULT_RESET_DELAY);
    }

    #[test]
    fn test_json_rejects_invalid_rotator() {
        let result = BannerConfig::from_json(r#"{ "rotator": { "period_ms": 0 } }"#);
        assert!(matches!(result, Err(BannerError::Configuration(_))));

        let result = BannerConfig::from_json(r#"{ "rotator": { "phrases": [] } }"#);
        assert!(matches!(result, Err(BannerError::Json(_))));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(RotatorConfig::default()).unwrap();
        assert_eq!(json["period_ms"], 2000);
        assert_eq!(json["reset_delay_ms"], 500);
        assert_eq!(json["typing_delay_ms"], serde_json::json!([200, 300]));
    }
}
