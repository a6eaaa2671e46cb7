/*!
 * # TermGuard - Terminology consistency checker for EN -> ZH translations
 *
 * A Rust library for flagging terminology inconsistencies between an English
 * source text and its Chinese translation, and proposing patched text using
 * a preferred glossary term.
 *
 * ## Features
 *
 * - Index-order sentence pair alignment of EN/ZH texts
 * - TF-IDF based English term candidate extraction
 * - EN->ZH term alignment over segmented Chinese n-grams
 * - Entropy-based inconsistency detection with glossary compliance checks
 * - Safe best-effort patching of the translated text
 * - CSV and JSON report writing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `preprocess`: Sentence splitting and pair alignment
 * - `terms`: English term extraction and selection
 * - `segmentation`: Chinese word segmentation behind the `Segmenter` trait
 * - `alignment`: EN->ZH term alignment and candidate ranking
 * - `consistency`: Inconsistency detection and flag records
 * - `patch`: Translation patching
 * - `report`: CSV/JSON report writers
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod consistency;
pub mod errors;
pub mod file_utils;
pub mod glossary;
pub mod patch;
pub mod preprocess;
pub mod report;
pub mod segmentation;
pub mod terms;

// Re-export main types for easier usage
pub use alignment::{AlignedCorpus, Candidate, TermAligner, TermMapping, zh_ngrams};
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use consistency::{Flag, FlagReason, detect_inconsistencies};
pub use errors::{AppError, GlossaryError, ReportError};
pub use glossary::Glossary;
pub use patch::patch_zh_text;
pub use preprocess::{SentencePair, align_sentence_pairs};
pub use segmentation::{JiebaSegmenter, Segmenter};
