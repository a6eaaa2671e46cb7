/*!
 * Report writers.
 *
 * Flags are written twice from the same in-memory objects: a tabular CSV
 * (one row per flag, candidates joined into a summary string) for
 * spreadsheet review, and a structured JSON file preserving the nested
 * candidate lists for downstream tooling. The CSV carries a UTF-8 BOM so
 * spreadsheet applications pick up the Chinese text correctly.
 */

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::consistency::Flag;
use crate::file_utils::FileManager;

const CSV_HEADER: &str =
    "en_term,preferred_zh,candidate_zh_terms,total_occurrences,entropy,top_prob,severity";

/// Quote a CSV field if it contains a delimiter, quote or newline.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render flags as CSV text (UTF-8 BOM included).
pub fn flags_to_csv(flags: &[Flag]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(CSV_HEADER);
    out.push('\n');

    for flag in flags {
        let row = [
            csv_escape(&flag.en_term),
            csv_escape(&flag.preferred_zh),
            csv_escape(&flag.candidate_summary()),
            flag.total_occurrences.to_string(),
            format!("{:.6}", flag.entropy),
            format!("{:.6}", flag.top_prob),
            format!("{:.6}", flag.severity),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Write `report.csv` and `report.json` into the output directory.
///
/// Returns the two file paths.
pub fn write_report<P: AsRef<Path>>(out_dir: P, flags: &[Flag]) -> Result<(PathBuf, PathBuf)> {
    let out_dir = out_dir.as_ref();
    FileManager::ensure_dir(out_dir)?;

    let csv_path = out_dir.join("report.csv");
    let json_path = out_dir.join("report.json");

    FileManager::write_to_file(&csv_path, &flags_to_csv(flags))?;

    let json = serde_json::to_string_pretty(flags).context("Failed to serialize flags")?;
    FileManager::write_to_file(&json_path, &json)?;

    Ok((csv_path, json_path))
}
