/*!
 * English term candidate extraction.
 *
 * Terms are scored with TF-IDF over word n-grams of the sentence corpus
 * (tf = raw n-gram count per sentence, idf smoothed as ln((1+N)/(1+df)) + 1),
 * then lightly boosted by raw unigram frequency so recurring single words
 * survive against longer n-grams.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static EN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9\-']*").unwrap());

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "to", "of", "in", "on", "for", "with", "as", "at", "by",
        "is", "are", "was", "were", "be", "been", "being", "it", "this", "that", "these", "those",
        "from", "into", "over", "after", "before", "about", "we", "you", "they", "i", "he", "she",
        "them", "his", "her", "our", "their", "your",
    ]
    .into_iter()
    .collect()
});

/// Tokenize an English sentence: lowercase words, stopwords removed.
fn tokenize_en(s: &str) -> Vec<String> {
    EN_WORD
        .find_iter(s)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect()
}

/// Word n-grams (space-joined) of a token sequence.
fn word_ngrams(tokens: &[String], ngram_min: usize, ngram_max: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for k in ngram_min..=ngram_max {
        if k == 0 || k > tokens.len() {
            continue;
        }
        for window in tokens.windows(k) {
            grams.push(window.join(" "));
        }
    }
    grams
}

/// Extract scored English term candidates from a sentence corpus.
///
/// Returns `(term, score)` sorted by score descending, at most `top_k`
/// entries. Ties are broken alphabetically so the ordering is stable.
pub fn extract_en_terms(
    sentences: &[String],
    top_k: usize,
    ngram_min: usize,
    ngram_max: usize,
    min_chars: usize,
) -> Vec<(String, f64)> {
    if sentences.is_empty() {
        return Vec::new();
    }

    // Tokenized corpus, dropping sentences with no content words
    let docs: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| tokenize_en(s))
        .filter(|toks| !toks.is_empty())
        .collect();
    if docs.is_empty() {
        return Vec::new();
    }

    // Document frequency and summed term frequency per n-gram
    let mut doc_freq: HashMap<String, u32> = HashMap::new();
    let mut total_tf: HashMap<String, u32> = HashMap::new();
    for doc in &docs {
        let grams = word_ngrams(doc, ngram_min, ngram_max);
        let mut seen: HashSet<&String> = HashSet::new();
        for g in &grams {
            *total_tf.entry(g.clone()).or_insert(0) += 1;
        }
        for g in &grams {
            if seen.insert(g) {
                *doc_freq.entry(g.clone()).or_insert(0) += 1;
            }
        }
    }

    // Raw unigram frequency across the whole corpus, for the boost below
    let mut unigram_freq: HashMap<&str, u32> = HashMap::new();
    for doc in &docs {
        for tok in doc {
            *unigram_freq.entry(tok.as_str()).or_insert(0) += 1;
        }
    }

    let n_docs = docs.len() as f64;
    let mut scored: Vec<(String, f64)> = Vec::new();
    for (term, tf) in &total_tf {
        if term.chars().count() < min_chars {
            continue;
        }
        // Drop n-grams made entirely of stopwords
        if term.split(' ').all(|p| STOPWORDS.contains(p)) {
            continue;
        }

        let df = *doc_freq.get(term).unwrap_or(&1) as f64;
        let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        let mut score = *tf as f64 * idf;

        // Encourage recurring unigrams
        if !term.contains(' ') {
            let freq = *unigram_freq.get(term.as_str()).unwrap_or(&0) as f64;
            score *= 1.0 + (0.1 * freq).min(1.5);
        }

        scored.push((term.clone(), score));
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(top_k);
    scored
}

/// Pick the term list for a run: glossary-driven when a glossary is present,
/// otherwise the extracted candidates.
///
/// With a glossary, multi-word glossary keys that occur (case-insensitively)
/// in the English text are checked directly; this keeps the scan focused on
/// the terminology the reviewer actually cares about.
pub fn select_terms(
    extracted: &[(String, f64)],
    glossary_keys: &[String],
    en_text: &str,
) -> Vec<String> {
    if glossary_keys.is_empty() {
        return extracted.iter().map(|(t, _)| t.clone()).collect();
    }

    let en_lower = en_text.to_lowercase();
    glossary_keys
        .iter()
        .filter(|k| k.contains(' ') && en_lower.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}
