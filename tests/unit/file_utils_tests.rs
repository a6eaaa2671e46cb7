/*!
 * Tests for file utility functionality
 */

use termguard::file_utils::FileManager;

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_fileExists_withExistingFile_shouldReturnTrue() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "a.txt", "content").unwrap();

    assert!(FileManager::file_exists(&path));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.txt")));
}

#[test]
fn test_ensureDir_withNestedPath_shouldCreateAllParents() {
    let temp_dir = create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested).unwrap();
    assert!(FileManager::dir_exists(&nested));
}

#[test]
fn test_writeToFile_shouldCreateParentDirectories() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("out").join("report.txt");

    FileManager::write_to_file(&path, "无人机项目").unwrap();
    assert_eq!(FileManager::read_to_string(&path).unwrap(), "无人机项目");
}

#[test]
fn test_readToString_withMissingFile_shouldError() {
    let temp_dir = create_temp_dir().unwrap();
    assert!(FileManager::read_to_string(temp_dir.path().join("nope.txt")).is_err());
}

#[test]
fn test_outputPath_shouldJoinDirAndFilename() {
    let path = FileManager::output_path("outputs/run", "report.csv");
    assert_eq!(path, std::path::PathBuf::from("outputs/run/report.csv"));
}
