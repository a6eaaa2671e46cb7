use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::alignment::{AlignedCorpus, TermAligner, TermMapping};
use crate::app_config::Config;
use crate::consistency::{Flag, detect_inconsistencies};
use crate::file_utils::FileManager;
use crate::glossary::Glossary;
use crate::patch::patch_zh_text;
use crate::preprocess::align_sentence_pairs;
use crate::report::write_report;
use crate::segmentation::{JiebaSegmenter, Segmenter};
use crate::terms::{extract_en_terms, select_terms};

// @module: Application controller for terminology checking

/// Result of one full pipeline run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of aligned sentence pairs
    pub aligned_pairs: usize,
    /// TF-IDF extracted term candidates with scores
    pub extracted_terms: Vec<(String, f64)>,
    /// Terms actually scanned (glossary-driven when a glossary is present)
    pub terms: Vec<String>,
    /// Per-term candidate mappings
    pub mappings: Vec<TermMapping>,
    /// Flags, sorted by severity descending
    pub flags: Vec<Flag>,
    /// Path to the tabular report
    pub report_csv: PathBuf,
    /// Path to the structured report
    pub report_json: PathBuf,
    /// Path to the patched Chinese text
    pub patched_path: PathBuf,
}

/// Main application controller for terminology consistency checking
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Run the pipeline reading inputs from files.
    pub fn run_from_files(
        &self,
        en_path: &Path,
        zh_path: &Path,
        glossary_path: Option<&Path>,
        out_dir: &Path,
    ) -> Result<RunSummary> {
        let en_text = FileManager::read_to_string(en_path)?;
        let zh_text = FileManager::read_to_string(zh_path)?;
        let glossary = match glossary_path {
            Some(path) => Glossary::from_csv_file(path)?,
            None => Glossary::new(),
        };
        self.run(&en_text, &zh_text, &glossary, out_dir)
    }

    /// Run the full pipeline: preprocess, term selection, alignment,
    /// detection, optional patching, report writing.
    pub fn run(
        &self,
        en_text: &str,
        zh_text: &str,
        glossary: &Glossary,
        out_dir: &Path,
    ) -> Result<RunSummary> {
        FileManager::ensure_dir(out_dir)?;

        // 1) align sentence pairs
        let start = Instant::now();
        let pairs = align_sentence_pairs(en_text, zh_text);
        info!(
            "[preprocess] aligned_pairs={} time={:.3}s",
            pairs.len(),
            start.elapsed().as_secs_f64()
        );
        if pairs.is_empty() {
            warn!("[preprocess] no aligned sentence pairs; downstream stages will be empty");
        }

        // 2) extract EN terms, then pick the scan list
        let start = Instant::now();
        let en_sents: Vec<String> = pairs.iter().map(|p| p.en.clone()).collect();
        let extracted = extract_en_terms(
            &en_sents,
            self.config.extraction.top_k_terms,
            self.config.extraction.ngram_min,
            self.config.extraction.ngram_max,
            self.config.extraction.min_term_chars,
        );
        let terms = select_terms(&extracted, &glossary.keys(), en_text);
        info!(
            "[terms] extracted_terms={} scanned_terms={} time={:.3}s",
            extracted.len(),
            terms.len(),
            start.elapsed().as_secs_f64()
        );

        // 3) align terms EN->ZH
        let start = Instant::now();
        let segmenter = JiebaSegmenter::new();
        let corpus = AlignedCorpus::new(pairs.clone());
        let mappings = self.align_with_progress(&corpus, &terms, glossary, &segmenter);
        info!(
            "[align] mapped_terms={} time={:.3}s",
            mappings.len(),
            start.elapsed().as_secs_f64()
        );

        // 4) detect inconsistencies
        let start = Instant::now();
        let flags = detect_inconsistencies(&mappings, glossary, &self.config.consistency);
        info!(
            "[consistency] flags={} time={:.3}s",
            flags.len(),
            start.elapsed().as_secs_f64()
        );

        // 5) patch zh text (optional)
        let start = Instant::now();
        let patching_enabled = self.config.patching.enable_patching && !glossary.is_empty();
        let patched_zh = if patching_enabled {
            patch_zh_text(zh_text, &flags)
        } else {
            zh_text.to_string()
        };
        info!(
            "[patch] enabled={} time={:.3}s",
            patching_enabled,
            start.elapsed().as_secs_f64()
        );

        // 6) write outputs
        let (report_csv, report_json) = write_report(out_dir, &flags)?;
        let patched_path = FileManager::output_path(out_dir, "zh_patched.txt");
        FileManager::write_to_file(&patched_path, &patched_zh)?;

        // also save top terms for transparency
        let terms_listing: String = extracted
            .iter()
            .map(|(term, score)| format!("{}\t{:.4}", term, score))
            .collect::<Vec<_>>()
            .join("\n");
        let terms_path = FileManager::output_path(out_dir, "extracted_terms.txt");
        FileManager::write_to_file(&terms_path, &terms_listing)?;

        info!("[output] report_csv={:?}", report_csv);
        info!("[output] report_json={:?}", report_json);
        info!("[output] zh_patched={:?}", patched_path);

        Ok(RunSummary {
            aligned_pairs: pairs.len(),
            extracted_terms: extracted,
            terms,
            mappings,
            flags,
            report_csv,
            report_json,
            patched_path,
        })
    }

    /// Align each term with a progress bar on stderr.
    fn align_with_progress(
        &self,
        corpus: &AlignedCorpus,
        terms: &[String],
        glossary: &Glossary,
        segmenter: &dyn Segmenter,
    ) -> Vec<TermMapping> {
        let aligner = TermAligner::new(self.config.alignment.clone(), segmenter);

        let progress = ProgressBar::new(terms.len() as u64);
        progress.set_style(ProgressStyle::default_bar());

        let mut mappings = Vec::with_capacity(terms.len());
        for term in terms {
            progress.set_message(term.clone());
            mappings.push(aligner.align_term(corpus, term, glossary));
            progress.inc(1);
        }
        progress.finish_and_clear();
        mappings
    }
}
