use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::services::page_signals::DEFAULT_KEYWORDS;
use crate::application::services::report::DEFAULT_REPORT_WINDOW;
use crate::application::services::vitals::DEFAULT_MEASURE_TIMEOUT;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// General settings: polling interval for `watch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

/// Alert thresholds for page metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_lcp")]
    pub lcp_ms: f64,
    #[serde(default = "default_fid")]
    pub fid_ms: f64,
    #[serde(default = "default_cls")]
    pub cls: f64,
    #[serde(default = "default_fcp")]
    pub fcp_ms: f64,
    #[serde(default = "default_ttfb")]
    pub ttfb_ms: f64,
    #[serde(default = "default_seo_score")]
    pub seo_score: f64,
    /// Set to `false` to turn off the low SEO score rule.
    #[serde(default = "default_true")]
    pub seo_score_enabled: bool,
    #[serde(default = "default_performance_score")]
    pub performance_score: f64,
}

/// Vitals measurement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Keyword vocabulary tracked for density.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

/// Report window size, in snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_window")]
    pub window: usize,
}

// --- Defaults ---

const fn default_interval() -> u64 {
    30
}

const fn default_lcp() -> f64 {
    2500.0
}

const fn default_fid() -> f64 {
    100.0
}

const fn default_cls() -> f64 {
    0.1
}

const fn default_fcp() -> f64 {
    1800.0
}

const fn default_ttfb() -> f64 {
    800.0
}

const fn default_seo_score() -> f64 {
    70.0
}

const fn default_true() -> bool {
    true
}

const fn default_performance_score() -> f64 {
    90.0
}

#[allow(clippy::cast_possible_truncation)]
const fn default_timeout_ms() -> u64 {
    DEFAULT_MEASURE_TIMEOUT.as_millis() as u64
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect()
}

const fn default_window() -> usize {
    DEFAULT_REPORT_WINDOW
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            lcp_ms: default_lcp(),
            fid_ms: default_fid(),
            cls: default_cls(),
            fcp_ms: default_fcp(),
            ttfb_ms: default_ttfb(),
            seo_score: default_seo_score(),
            seo_score_enabled: default_true(),
            performance_score: default_performance_score(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to default path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("sitepulse").join("config.toml"))
    }

    /// Measurement bound, at least one millisecond.
    #[must_use]
    pub fn measure_timeout(&self) -> Duration {
        Duration::from_millis(self.collector.timeout_ms.max(1))
    }

    /// Report window, at least one snapshot.
    #[must_use]
    pub fn report_window(&self) -> usize {
        self.report.window.max(1)
    }
}

/// Non-negative and finite, otherwise `fallback`.
fn non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { fallback }
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        let defaults = Self::default();

        // Scores live on a 0-100 scale
        let seo_score = if !config.seo_score_enabled {
            None
        } else if config.seo_score.is_finite() {
            Some(config.seo_score.clamp(0.0, 100.0))
        } else {
            defaults.seo_score
        };
        let performance_score = if config.performance_score.is_finite() {
            config.performance_score.clamp(0.0, 100.0)
        } else {
            defaults.performance_score
        };

        Self {
            lcp_ms: non_negative(config.lcp_ms, defaults.lcp_ms),
            fid_ms: non_negative(config.fid_ms, defaults.fid_ms),
            cls: non_negative(config.cls, defaults.cls),
            fcp_ms: non_negative(config.fcp_ms, defaults.fcp_ms),
            ttfb_ms: non_negative(config.ttfb_ms, defaults.ttfb_ms),
            seo_score,
            performance_score,
        }
    }
}
