/*!
 * Tests for application configuration functionality
 */

use termguard::app_config::{Config, LogLevel};

use crate::common::create_temp_dir;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.extraction.ngram_min, 1);
    assert_eq!(config.extraction.ngram_max, 3);
    assert_eq!(config.extraction.top_k_terms, 30);
    assert_eq!(config.extraction.min_term_chars, 3);

    assert_eq!(config.alignment.zh_ngram_max, 4);
    assert_eq!(config.alignment.max_candidates, 5);

    assert_eq!(config.consistency.min_total_occurrences, 2);
    assert!((config.consistency.entropy_threshold - 0.65).abs() < 1e-9);

    assert!(config.patching.enable_patching);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.extraction.ngram_min = 0;
    assert!(config.validate().is_err());
    config.extraction.ngram_min = 1;

    config.extraction.ngram_max = 0;
    assert!(config.validate().is_err());
    config.extraction.ngram_max = 3;

    config.alignment.max_candidates = 0;
    assert!(config.validate().is_err());
    config.alignment.max_candidates = 5;

    config.consistency.entropy_threshold = -0.1;
    assert!(config.validate().is_err());
    config.consistency.entropy_threshold = 0.65;

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_saveAndLoad_shouldRoundTrip() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.alignment.max_candidates = 7;
    config.log_level = LogLevel::Debug;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.alignment.max_candidates, 7);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_config_fromFileOrDefault_withMissingFile_shouldCreateDefault() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");
    assert!(!path.exists());

    let config = Config::from_file_or_default(&path).unwrap();
    assert_eq!(config.alignment.max_candidates, 5);
    assert!(path.exists());
}

#[test]
fn test_config_fromFile_withPartialJson_shouldFillDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{"alignment": {"zh_ngram_max": 6}}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.alignment.zh_ngram_max, 6);
    assert_eq!(config.alignment.max_candidates, 5);
    assert_eq!(config.extraction.top_k_terms, 30);
}

#[test]
fn test_config_fromFile_withInvalidJson_shouldError() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(Config::from_file(&path).is_err());
}
