/*!
 * Common test utilities for the termguard test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample English source text with a recurring multi-word term
pub fn sample_en_text() -> &'static str {
    "The drone program improves safety. The drone program patrols daily. The drone program expanded."
}

/// Sample Chinese translation mixing two spellings of the same term
pub fn sample_zh_text() -> &'static str {
    "无人机项目提升了安全。无人飞行器项目每天巡逻。无人飞行器项目扩大了。"
}

/// Sample glossary CSV preferring the 无人机 spelling
pub fn sample_glossary_csv() -> &'static str {
    "en_term,zh_term\ndrone program,无人机项目\n"
}
