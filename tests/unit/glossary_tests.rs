/*!
 * Tests for glossary file loading
 */

use termguard::glossary::Glossary;

use crate::common::{create_temp_dir, create_test_file, sample_glossary_csv};

#[test]
fn test_glossary_fromCsvFile_shouldLoadEntries() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "glossary.csv", sample_glossary_csv()).unwrap();

    let glossary = Glossary::from_csv_file(&path).unwrap();
    assert_eq!(glossary.len(), 1);
    assert_eq!(glossary.get("drone program"), Some("无人机项目"));
}

#[test]
fn test_glossary_fromCsvFile_withBom_shouldLoadEntries() {
    let temp_dir = create_temp_dir().unwrap();
    let content = format!("\u{feff}{}", sample_glossary_csv());
    let path = create_test_file(temp_dir.path(), "glossary.csv", &content).unwrap();

    let glossary = Glossary::from_csv_file(&path).unwrap();
    assert_eq!(glossary.get("drone program"), Some("无人机项目"));
}

#[test]
fn test_glossary_fromCsvFile_withMissingFile_shouldError() {
    let temp_dir = create_temp_dir().unwrap();
    assert!(Glossary::from_csv_file(temp_dir.path().join("missing.csv")).is_err());
}
