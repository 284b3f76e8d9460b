use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            presenter: PresenterConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Timing and pacing of the presentation sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Debounce window before a newly set text is acted upon (ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Reveal duration for short texts (ms)
    #[serde(default = "default_short_reveal_ms")]
    pub short_reveal_ms: u64,
    /// Reveal duration for texts longer than `short_text_limit` (ms)
    #[serde(default = "default_long_reveal_ms")]
    pub long_reveal_ms: u64,
    /// Largest character count that still counts as a short text
    #[serde(default = "default_short_text_limit")]
    pub short_text_limit: usize,
    /// Pause between reveal completion and the overflow check (ms)
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Auto-scroll speed in offset units per second
    #[serde(default = "default_scroll_rate")]
    pub scroll_rate: f32,
    /// Minimum auto-scroll duration (seconds)
    #[serde(default = "default_min_scroll_secs")]
    pub min_scroll_secs: f32,
    /// Frame rate for the auto-scroll animation
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Easing curve for the auto-scroll
    #[serde(default)]
    pub easing: EasingType,
    /// Placeholder text that never triggers an overflow scroll
    #[serde(default)]
    pub default_text: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            short_reveal_ms: default_short_reveal_ms(),
            long_reveal_ms: default_long_reveal_ms(),
            short_text_limit: default_short_text_limit(),
            settle_ms: default_settle_ms(),
            scroll_rate: default_scroll_rate(),
            min_scroll_secs: default_min_scroll_secs(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
            default_text: String::new(),
        }
    }
}

impl PresenterConfig {
    /// Debounce window as a Duration
    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Settle pause as a Duration
    #[inline]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Reveal duration for `text`, by character count
    pub fn reveal_duration(&self, text: &str) -> Duration {
        if text.chars().count() <= self.short_text_limit {
            Duration::from_millis(self.short_reveal_ms)
        } else {
            Duration::from_millis(self.long_reveal_ms)
        }
    }

    /// Auto-scroll duration for `distance` offset units, floored at
    /// `min_scroll_secs`
    pub fn scroll_duration(&self, distance: f32) -> Duration {
        let secs = (distance / self.scroll_rate).max(self.min_scroll_secs);
        Duration::from_secs_f32(secs)
    }
}

/// Easing curve selection for the auto-scroll animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    Linear,
    #[default]
    CubicInOut,
    CubicOut,
    QuinticOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    50
}

fn default_short_reveal_ms() -> u64 {
    100
}

fn default_long_reveal_ms() -> u64 {
    300
}

fn default_short_text_limit() -> usize {
    50
}

fn default_settle_ms() -> u64 {
    2000
}

fn default_scroll_rate() -> f32 {
    20.0
}

fn default_min_scroll_secs() -> f32 {
    2.0
}

fn default_animation_fps() -> u16 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/prompter/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("prompter")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PresenterConfig::default();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.short_reveal_ms, 100);
        assert_eq!(config.long_reveal_ms, 300);
        assert_eq!(config.short_text_limit, 50);
        assert_eq!(config.settle_ms, 2000);
        assert_eq!(config.easing, EasingType::CubicInOut);
    }

    #[test]
    fn test_reveal_duration_boundary() {
        let config = PresenterConfig::default();
        let short = "x".repeat(50);
        let long = "x".repeat(51);
        assert_eq!(config.reveal_duration(&short), Duration::from_millis(100));
        assert_eq!(config.reveal_duration(&long), Duration::from_millis(300));
    }

    #[test]
    fn test_scroll_duration_floor() {
        let config = PresenterConfig::default();
        // 20 units at 20 units/s would be 1s, floored to 2s
        assert_eq!(config.scroll_duration(20.0), Duration::from_secs_f32(2.0));
        // 100 units at 20 units/s is 5s
        assert_eq!(config.scroll_duration(100.0), Duration::from_secs_f32(5.0));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.presenter.debounce_ms, config.presenter.debounce_ms);
        assert_eq!(parsed.presenter.easing, config.presenter.easing);
        assert_eq!(parsed.ui.tick_rate_ms, config.ui.tick_rate_ms);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[presenter]\ndebounce_ms = 75\n").unwrap();
        assert_eq!(parsed.presenter.debounce_ms, 75);
        assert_eq!(parsed.presenter.settle_ms, 2000);
        assert_eq!(parsed.ui.tick_rate_ms, 100);
    }
}
