//! Configuration system for the page replacement simulator.
//!
//! This module defines the configuration structures and enums used to
//! parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants (CFLRU window ratio, tuning period, sizing ratios).
//! 2. **Structures:** Hierarchical config for the policy, capacity sizing, trace and report.
//! 3. **Enums:** Replacement policy kind and CFLRU window mode.
//!
//! Configuration is supplied as JSON or built with `Config::default()`; the CLI
//! overrides individual fields from its flags.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MIN_CAPACITY, DEFAULT_PAGE_SIZE_KB};
use crate::common::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    /// Fraction of the capacity scanned for clean victims by CFLRU.
    pub const WINDOW_RATIO: f64 = 0.25;

    /// Accesses between two window adjustments in dynamic CFLRU.
    pub const DYNAMIC_PERIOD: u64 = 1000;

    /// Capacities tried per run, as fractions of the working-set size.
    ///
    /// Modern traces have strong locality, so the sweep stays well below the
    /// working set to keep the miss rate above zero.
    pub const SIZING_RATIOS: [f64; 3] = [0.001, 0.01, 0.1];

    /// Largest capacity for which the verbose log prints the cache contents.
    pub const SHOW_CACHE_LIMIT: usize = 20;
}

/// Replacement policy algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PolicyKind {
    /// Plain least-recently-used replacement.
    #[serde(alias = "LRU", alias = "lru")]
    Lru,
    /// Clean-first LRU: prefers clean victims within a window at the LRU end.
    #[default]
    #[serde(alias = "CFLRU", alias = "cflru")]
    Cflru,
    /// Belady's offline-optimal MIN; needs the full trace in advance.
    #[serde(alias = "MIN", alias = "OPT", alias = "belady")]
    BeladyMin,
}

/// How the CFLRU window evolves during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum WindowMode {
    /// The window keeps its initial size.
    #[serde(alias = "static")]
    Static,
    /// The window is tuned online by hill climbing on windowed I/O cost.
    #[default]
    #[serde(alias = "dynamic")]
    Dynamic,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Config, PolicyKind, WindowMode};
///
/// let config = Config::default();
/// assert_eq!(config.policy.kind, PolicyKind::Cflru);
/// assert_eq!(config.policy.cflru.mode, WindowMode::Dynamic);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use pagesim_core::config::{Config, PolicyKind, WindowMode};
///
/// let json = r#"{
///     "policy": {
///         "kind": "Cflru",
///         "cflru": { "window_ratio": 0.5, "mode": "Static" }
///     },
///     "sizing": { "capacity": 64 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.policy.cflru.window_ratio, 0.5);
/// assert_eq!(config.policy.cflru.mode, WindowMode::Static);
/// assert_eq!(config.policy.cflru.dynamic_period, 1000);
/// assert_eq!(config.sizing.capacity, Some(64));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Policy selection and policy parameters.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Capacity selection.
    #[serde(default)]
    pub sizing: SizingConfig,
    /// Trace interpretation.
    #[serde(default)]
    pub trace: TraceConfig,
    /// Report output.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a JSON configuration document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigParse`] for malformed JSON and
    /// [`SimError::InvalidConfig`] for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        self.policy.cflru.validate()?;
        self.sizing.validate()?;
        if self.trace.page_size_kb == 0 {
            return Err(SimError::InvalidConfig(
                "trace.page_size_kb must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Policy selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    /// Which replacement policy to run.
    #[serde(default)]
    pub kind: PolicyKind,
    /// CFLRU parameters; ignored by the other policies.
    #[serde(default)]
    pub cflru: CflruConfig,
}

/// Clean-first LRU parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CflruConfig {
    /// Initial window as a fraction of the capacity, in `[0, 1]`.
    #[serde(default = "CflruConfig::default_window_ratio")]
    pub window_ratio: f64,
    /// Static or dynamically tuned window.
    #[serde(default)]
    pub mode: WindowMode,
    /// Accesses per tuning period in dynamic mode.
    #[serde(default = "CflruConfig::default_dynamic_period")]
    pub dynamic_period: u64,
}

impl CflruConfig {
    fn default_window_ratio() -> f64 {
        defaults::WINDOW_RATIO
    }

    fn default_dynamic_period() -> u64 {
        defaults::DYNAMIC_PERIOD
    }

    /// Checks the window ratio and tuning period.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if `window_ratio` is not a finite
    /// value in `[0, 1]` or `dynamic_period` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.window_ratio.is_finite() || !(0.0..=1.0).contains(&self.window_ratio) {
            return Err(SimError::InvalidConfig(format!(
                "cflru.window_ratio must be within [0, 1], got {}",
                self.window_ratio
            )));
        }
        if self.dynamic_period == 0 {
            return Err(SimError::InvalidConfig(
                "cflru.dynamic_period must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CflruConfig {
    fn default() -> Self {
        Self {
            window_ratio: defaults::WINDOW_RATIO,
            mode: WindowMode::default(),
            dynamic_period: defaults::DYNAMIC_PERIOD,
        }
    }
}

/// How capacities are chosen for a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizingConfig {
    /// Explicit capacity in pages; when set, `ratios` is ignored.
    #[serde(default)]
    pub capacity: Option<usize>,
    /// Capacities as fractions of the trace's working-set size.
    #[serde(default = "SizingConfig::default_ratios")]
    pub ratios: Vec<f64>,
    /// Lower bound applied to ratio-derived capacities.
    #[serde(default = "SizingConfig::default_min_capacity")]
    pub min_capacity: usize,
}

impl SizingConfig {
    fn default_ratios() -> Vec<f64> {
        defaults::SIZING_RATIOS.to_vec()
    }

    fn default_min_capacity() -> usize {
        DEFAULT_MIN_CAPACITY
    }

    /// Checks the explicit capacity and the ratio list.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] for a zero capacity, a zero
    /// minimum, an empty ratio list or a ratio that is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == Some(0) {
            return Err(SimError::InvalidConfig(
                "sizing.capacity must be at least 1".to_string(),
            ));
        }
        if self.min_capacity == 0 {
            return Err(SimError::InvalidConfig(
                "sizing.min_capacity must be at least 1".to_string(),
            ));
        }
        if self.capacity.is_none() && self.ratios.is_empty() {
            return Err(SimError::InvalidConfig(
                "sizing.ratios must not be empty when no capacity is given".to_string(),
            ));
        }
        if let Some(bad) = self.ratios.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "sizing ratios must be positive, got {bad}"
            )));
        }
        Ok(())
    }

    /// Capacities to run for a trace with `working_set_size` distinct pages.
    ///
    /// An explicit capacity yields a single entry; otherwise one entry per
    /// ratio, each `max(min_capacity, floor(working_set_size * ratio))`.
    pub fn capacities(&self, working_set_size: usize) -> Vec<usize> {
        if let Some(capacity) = self.capacity {
            return vec![capacity];
        }
        self.ratios
            .iter()
            .map(|ratio| {
                let scaled = (working_set_size as f64 * ratio).floor() as usize;
                scaled.max(self.min_capacity)
            })
            .collect()
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            ratios: Self::default_ratios(),
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

/// Trace interpretation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Page size in KiB, used for footprint estimates only.
    #[serde(default = "TraceConfig::default_page_size_kb")]
    pub page_size_kb: u64,
}

impl TraceConfig {
    fn default_page_size_kb() -> u64 {
        DEFAULT_PAGE_SIZE_KB
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            page_size_kb: DEFAULT_PAGE_SIZE_KB,
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Emit one log line per access.
    #[serde(default)]
    pub verbose: bool,
    /// Print the resident pages in the verbose log while capacity is at most this.
    #[serde(default = "ReportConfig::default_show_cache_limit")]
    pub show_cache_limit: usize,
}

impl ReportConfig {
    fn default_show_cache_limit() -> usize {
        defaults::SHOW_CACHE_LIMIT
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            show_cache_limit: defaults::SHOW_CACHE_LIMIT,
        }
    }
}
