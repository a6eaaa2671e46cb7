use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Term extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// EN->ZH alignment settings
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Consistency detection settings
    #[serde(default)]
    pub consistency: ConsistencyConfig,

    /// Patching settings
    #[serde(default)]
    pub patching: PatchingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for English term extraction (TF-IDF over word n-grams)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// Minimum word n-gram length
    #[serde(default = "default_ngram_min")]
    pub ngram_min: usize,

    /// Maximum word n-gram length
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,

    /// Number of top-scored terms to keep
    #[serde(default = "default_top_k_terms")]
    pub top_k_terms: usize,

    /// Minimum character length for a term candidate
    #[serde(default = "default_min_term_chars")]
    pub min_term_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ngram_min: default_ngram_min(),
            ngram_max: default_ngram_max(),
            top_k_terms: default_top_k_terms(),
            min_term_chars: default_min_term_chars(),
        }
    }
}

/// Configuration for aligning English terms to Chinese candidates
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlignmentConfig {
    /// Maximum Chinese n-gram length (in segmented tokens)
    #[serde(default = "default_zh_ngram_max")]
    pub zh_ngram_max: usize,

    /// Maximum number of Chinese candidates kept per English term
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            zh_ngram_max: default_zh_ngram_max(),
            max_candidates: default_max_candidates(),
        }
    }
}

/// Configuration for inconsistency detection
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConsistencyConfig {
    /// Minimum summed candidate count before a term is considered at all
    #[serde(default = "default_min_total_occurrences")]
    pub min_total_occurrences: u32,

    /// Entropy threshold above which a term is flagged (higher => more inconsistent)
    #[serde(default = "default_entropy_threshold")]
    pub entropy_threshold: f64,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            min_total_occurrences: default_min_total_occurrences(),
            entropy_threshold: default_entropy_threshold(),
        }
    }
}

/// Configuration for patching the Chinese translation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PatchingConfig {
    /// Whether patched output is produced at all
    #[serde(default = "default_true")]
    pub enable_patching: bool,
}

impl Default for PatchingConfig {
    fn default() -> Self {
        Self {
            enable_patching: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_ngram_min() -> usize {
    1
}

fn default_ngram_max() -> usize {
    3
}

fn default_top_k_terms() -> usize {
    30
}

fn default_min_term_chars() -> usize {
    3
}

fn default_zh_ngram_max() -> usize {
    4
}

fn default_max_candidates() -> usize {
    5
}

fn default_min_total_occurrences() -> u32 {
    2
}

fn default_entropy_threshold() -> f64 {
    0.65
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path.as_ref(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path.as_ref(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, creating a default one if it doesn't exist
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save_to_file(&path)?;
            Ok(config)
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.extraction.ngram_min == 0 {
            return Err(anyhow!("extraction.ngram_min must be at least 1"));
        }
        if self.extraction.ngram_max < self.extraction.ngram_min {
            return Err(anyhow!(
                "extraction.ngram_max ({}) must be >= extraction.ngram_min ({})",
                self.extraction.ngram_max,
                self.extraction.ngram_min
            ));
        }
        if self.alignment.zh_ngram_max == 0 {
            return Err(anyhow!("alignment.zh_ngram_max must be at least 1"));
        }
        if self.alignment.max_candidates == 0 {
            return Err(anyhow!("alignment.max_candidates must be at least 1"));
        }
        if self.consistency.min_total_occurrences == 0 {
            return Err(anyhow!("consistency.min_total_occurrences must be at least 1"));
        }
        if self.consistency.entropy_threshold < 0.0 {
            return Err(anyhow!("consistency.entropy_threshold must be >= 0"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            extraction: ExtractionConfig::default(),
            alignment: AlignmentConfig::default(),
            consistency: ConsistencyConfig::default(),
            patching: PatchingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
