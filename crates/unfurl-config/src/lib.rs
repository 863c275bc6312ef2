//! Configuration loading for the unfurl page viewer.
//!
//! Settings live in a `config.toml` under the platform config directory
//! (e.g. `~/.config/unfurl/` on Linux). A missing or malformed file
//! falls back to the built-in defaults; the viewer never refuses to
//! start over configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use unfurl_core::{AnimationSpeed, ColorTheme, RevealStyle, WatchOptions};

/// Viewer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accent color theme name.
    pub theme: String,
    /// Animation speed name.
    pub speed: String,
    /// Default reveal style name for sections without their own.
    pub reveal_style: String,
    /// Frame tick in milliseconds.
    pub tick_ms: u64,
    /// Counter tween duration override in milliseconds.
    pub counter_duration_ms: Option<u64>,
    /// Path to a page content document (JSON). Falls back to the
    /// built-in demo page when unset.
    pub content: Option<PathBuf>,
    /// Generic reveal watcher settings.
    pub reveal: RevealSection,
    /// Metric watcher settings.
    pub metrics: MetricsSection,
}

/// `[reveal]` table: the generic panel watcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealSection {
    /// Visible fraction required to trigger.
    pub threshold: f32,
    /// Rows shaved off the bottom of the viewport.
    pub bottom_inset: u16,
}

/// `[metrics]` table: the metric panel watcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsSection {
    /// Visible fraction required to trigger.
    pub threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "gold".to_string(),
            speed: "medium".to_string(),
            reveal_style: "fade".to_string(),
            tick_ms: 33,
            counter_duration_ms: None,
            content: None,
            reveal: RevealSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_inset: 2,
        }
    }
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when the file is
    /// absent or malformed.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load from an explicit path. `None` when the file cannot be read
    /// or parsed.
    pub fn load_from(path: &Path) -> Option<Self> {
        let text = fs::read_to_string(path).ok()?;
        toml::from_str(&text).ok()
    }

    /// The platform config file path, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "unfurl", "unfurl")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The configured theme, defaulting on unknown names.
    pub fn theme(&self) -> ColorTheme {
        self.theme.parse().unwrap_or_default()
    }

    /// The configured animation speed, defaulting on unknown names.
    pub fn speed(&self) -> AnimationSpeed {
        self.speed.parse().unwrap_or_default()
    }

    /// The configured default reveal style, defaulting on unknown names.
    pub fn reveal_style(&self) -> RevealStyle {
        self.reveal_style.parse().unwrap_or_default()
    }

    /// Frame tick as a duration.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Counter tween duration: the override, or the speed's default.
    pub fn counter_duration(&self) -> Duration {
        let ms = self
            .counter_duration_ms
            .unwrap_or_else(|| self.speed().counter_duration_ms());
        Duration::from_millis(ms)
    }

    /// Watch options for the generic reveal watcher.
    pub fn reveal_options(&self) -> WatchOptions {
        WatchOptions::new(self.reveal.threshold).bottom_inset(self.reveal.bottom_inset)
    }

    /// Watch options for the metric watcher.
    pub fn metric_options(&self) -> WatchOptions {
        WatchOptions::new(self.metrics.threshold)
    }
}
