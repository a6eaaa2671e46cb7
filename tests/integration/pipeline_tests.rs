/*!
 * End-to-end pipeline tests: files in, reports and patched text out.
 */

use termguard::alignment::{AlignedCorpus, TermAligner};
use termguard::app_config::{AlignmentConfig, Config, ConsistencyConfig};
use termguard::app_controller::Controller;
use termguard::consistency::{Flag, detect_inconsistencies};
use termguard::glossary::Glossary;
use termguard::preprocess::SentencePair;
use termguard::segmentation::JiebaSegmenter;

use crate::common::{
    create_temp_dir, create_test_file, sample_en_text, sample_glossary_csv, sample_zh_text,
};

#[test]
fn test_pipeline_runFromFiles_shouldFlagAndPatchMixedSpellings() {
    let temp_dir = create_temp_dir().unwrap();
    let en_path = create_test_file(temp_dir.path(), "en.txt", sample_en_text()).unwrap();
    let zh_path = create_test_file(temp_dir.path(), "zh.txt", sample_zh_text()).unwrap();
    let glossary_path =
        create_test_file(temp_dir.path(), "glossary.csv", sample_glossary_csv()).unwrap();
    let out_dir = temp_dir.path().join("out");

    let controller = Controller::new_for_test().unwrap();
    let summary = controller
        .run_from_files(&en_path, &zh_path, Some(&glossary_path), &out_dir)
        .unwrap();

    assert_eq!(summary.aligned_pairs, 3);
    assert_eq!(summary.terms, vec!["drone program".to_string()]);

    // The glossary term leads its mapping
    let mapping = &summary.mappings[0];
    assert_eq!(mapping.candidates[0].zh_term, "无人机项目");

    // Mixed spellings across sentences produce a flag
    assert_eq!(summary.flags.len(), 1);
    assert_eq!(summary.flags[0].en_term, "drone program");
    assert_eq!(summary.flags[0].preferred_zh, "无人机项目");

    // Patched text uses only the preferred spelling
    let patched = std::fs::read_to_string(&summary.patched_path).unwrap();
    assert!(patched.contains("无人机项目"));
    assert!(!patched.contains("无人飞行器"));
    assert!(!patched.contains("无人机项目无人机项目"));
}

#[test]
fn test_pipeline_reports_shouldBeWrittenAndParseable() {
    let temp_dir = create_temp_dir().unwrap();
    let en_path = create_test_file(temp_dir.path(), "en.txt", sample_en_text()).unwrap();
    let zh_path = create_test_file(temp_dir.path(), "zh.txt", sample_zh_text()).unwrap();
    let glossary_path =
        create_test_file(temp_dir.path(), "glossary.csv", sample_glossary_csv()).unwrap();
    let out_dir = temp_dir.path().join("out");

    let controller = Controller::new_for_test().unwrap();
    let summary = controller
        .run_from_files(&en_path, &zh_path, Some(&glossary_path), &out_dir)
        .unwrap();

    // CSV: BOM, header, one row per flag
    let csv = std::fs::read_to_string(&summary.report_csv).unwrap();
    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("en_term,preferred_zh"));
    assert_eq!(csv.lines().count(), 1 + summary.flags.len());

    // JSON: structured flags round-trip
    let json = std::fs::read_to_string(&summary.report_json).unwrap();
    let parsed: Vec<Flag> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary.flags);

    // Extracted terms listing exists
    assert!(out_dir.join("extracted_terms.txt").exists());
}

#[test]
fn test_pipeline_run_shouldBeDeterministic() {
    let controller = Controller::new_for_test().unwrap();
    let glossary = Glossary::from_csv_str(sample_glossary_csv()).unwrap();

    let temp_a = create_temp_dir().unwrap();
    let temp_b = create_temp_dir().unwrap();
    let a = controller
        .run(sample_en_text(), sample_zh_text(), &glossary, temp_a.path())
        .unwrap();
    let b = controller
        .run(sample_en_text(), sample_zh_text(), &glossary, temp_b.path())
        .unwrap();

    assert_eq!(a.flags, b.flags);
    assert_eq!(a.mappings, b.mappings);

    let patched_a = std::fs::read_to_string(&a.patched_path).unwrap();
    let patched_b = std::fs::read_to_string(&b.patched_path).unwrap();
    assert_eq!(patched_a, patched_b);
}

#[test]
fn test_pipeline_run_withEmptyInputs_shouldDegradeGracefully() {
    let temp_dir = create_temp_dir().unwrap();
    let controller = Controller::new_for_test().unwrap();

    let summary = controller
        .run("", "", &Glossary::new(), temp_dir.path())
        .unwrap();

    assert_eq!(summary.aligned_pairs, 0);
    assert!(summary.flags.is_empty());
    assert!(summary.report_csv.exists());
    assert!(summary.report_json.exists());
}

#[test]
fn test_pipeline_patchingDisabledWithoutGlossary_shouldKeepTranslationUnchanged() {
    let temp_dir = create_temp_dir().unwrap();
    let controller = Controller::new_for_test().unwrap();

    let summary = controller
        .run(sample_en_text(), sample_zh_text(), &Glossary::new(), temp_dir.path())
        .unwrap();

    let patched = std::fs::read_to_string(&summary.patched_path).unwrap();
    assert_eq!(patched, sample_zh_text());
}

/// Glossary-anchored mapping over a mixed-spelling corpus feeds the
/// detector, which flags the term.
#[test]
fn test_alignAndDetect_droneCorpus_shouldFlagDrone() {
    let pairs = vec![
        SentencePair::new("The drone program improves safety.", "无人机项目提升了安全。"),
        SentencePair::new("Drones patrol the campus.", "无人飞行器在校园巡逻。"),
        SentencePair::new("The drone project expanded.", "无人机项目扩大了。"),
    ];
    let corpus = AlignedCorpus::new(pairs);
    let mut glossary = Glossary::new();
    glossary.insert("drone", "无人机");

    let segmenter = JiebaSegmenter::new();
    let aligner = TermAligner::new(AlignmentConfig::default(), &segmenter);
    let mappings = aligner.align_terms(&corpus, &["drone".to_string()], &glossary);

    assert_eq!(mappings[0].candidates[0].zh_term, "无人机");
    assert!(mappings[0].candidates[0].count >= 2);

    let flags = detect_inconsistencies(&mappings, &glossary, &ConsistencyConfig::default());
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].en_term, "drone");
}

/// A term absent from every English sentence yields an empty mapping and
/// never reaches the flag list.
#[test]
fn test_alignAndDetect_unmatchedTerm_shouldProduceNoFlag() {
    let pairs = vec![SentencePair::new("Hello world.", "你好世界。")];
    let corpus = AlignedCorpus::new(pairs);
    let glossary = Glossary::new();

    let segmenter = JiebaSegmenter::new();
    let aligner = TermAligner::new(AlignmentConfig::default(), &segmenter);
    let mappings = aligner.align_terms(&corpus, &["drone".to_string()], &glossary);

    assert!(mappings[0].candidates.is_empty());

    let flags = detect_inconsistencies(&mappings, &glossary, &ConsistencyConfig::default());
    assert!(flags.is_empty());
}

#[test]
fn test_controller_withInvalidConfig_shouldRejectConstruction() {
    let mut config = Config::default();
    config.alignment.max_candidates = 0;
    assert!(Controller::with_config(config).is_err());
}
