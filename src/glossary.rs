/*!
 * Glossary of preferred translations.
 *
 * A glossary maps an English term (case-sensitive, as authored) to the
 * preferred Chinese rendering. Absence of a key means "no preference".
 * Glossaries are immutable for the duration of a pipeline run.
 */

use std::collections::HashMap;
use std::path::Path;

use crate::errors::GlossaryError;

/// English term -> preferred Chinese term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glossary {
    terms: HashMap<String, String>,
}

/// Accepted header spellings for the English column.
const EN_HEADERS: [&str; 3] = ["en_term", "en", "term"];
/// Accepted header spellings for the Chinese column.
const ZH_HEADERS: [&str; 3] = ["zh_term", "preferred_zh", "zh"];

impl Glossary {
    /// Create an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the glossary has no entries.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, en: impl Into<String>, zh: impl Into<String>) {
        self.terms.insert(en.into(), zh.into());
    }

    /// Preferred Chinese term for an English term, if any.
    pub fn get(&self, en: &str) -> Option<&str> {
        self.terms.get(en).map(String::as_str)
    }

    /// English keys in stable (sorted) order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.terms.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Load a glossary from a CSV file.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, GlossaryError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| GlossaryError::ReadFailed(format!("{:?}: {}", path.as_ref(), e)))?;
        Self::from_csv_str(&content)
    }

    /// Parse a glossary from CSV content.
    ///
    /// Accepts multiple header conventions (`en_term|en|term` and
    /// `zh_term|preferred_zh|zh`), tolerates a UTF-8 BOM and padded header
    /// cells. Rows with an empty term on either side are skipped.
    pub fn from_csv_str(content: &str) -> Result<Self, GlossaryError> {
        let mut lines = content.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| GlossaryError::MissingHeader("empty file".to_string()))?;

        let headers: Vec<String> = split_csv_record(header_line)
            .into_iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let en_col = headers
            .iter()
            .position(|h| EN_HEADERS.contains(&h.as_str()))
            .ok_or_else(|| GlossaryError::MissingHeader(header_line.to_string()))?;
        let zh_col = headers
            .iter()
            .position(|h| ZH_HEADERS.contains(&h.as_str()))
            .ok_or_else(|| GlossaryError::MissingHeader(header_line.to_string()))?;

        let mut glossary = Glossary::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_record(line);
            let en = fields.get(en_col).map(|s| s.trim()).unwrap_or("");
            let zh = fields.get(zh_col).map(|s| s.trim()).unwrap_or("");
            if !en.is_empty() && !zh.is_empty() {
                glossary.insert(en, zh);
            }
        }
        Ok(glossary)
    }
}

/// Split one CSV record into fields, honoring double-quoted fields with
/// `""` escapes. Good enough for glossary files; multi-line fields are not
/// supported.
fn split_csv_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}
