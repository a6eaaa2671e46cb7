/*!
 * Sentence splitting and index-order pair alignment.
 *
 * Alignment here is deliberately naive: EN and ZH texts are split into
 * sentences independently and zipped by index, truncated to the shorter
 * side. True statistical sentence alignment is out of scope; downstream
 * components only assume that pair order equals document order.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One aligned English/Chinese sentence pair, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    /// English source sentence
    pub en: String,
    /// Chinese translated sentence
    pub zh: String,
}

impl SentencePair {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }
}

static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\n").unwrap());
static LEADING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]+").unwrap());

/// Normalize whitespace: full-width spaces to ASCII, collapse runs of
/// horizontal whitespace, strip whitespace hugging newlines, trim.
pub fn normalize_whitespace(s: &str) -> String {
    let s = s.replace('\u{3000}', " ");
    let s = HORIZONTAL_WS.replace_all(&s, " ");
    let s = TRAILING_WS.replace_all(&s, "\n");
    let s = LEADING_WS.replace_all(&s, "\n");
    s.trim().to_string()
}

/// Split English text into sentences.
///
/// Lines are kept as hard boundaries; within a line, a sentence ends at
/// `.`, `?` or `!` followed by whitespace.
pub fn split_en_sentences(text: &str) -> Vec<String> {
    let text = normalize_whitespace(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut sents = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for part in split_after_terminator(line) {
            let part = part.trim();
            if !part.is_empty() {
                sents.push(part.to_string());
            }
        }
    }
    sents
}

/// Split a line after each `. ? !` that is followed by whitespace.
fn split_after_terminator(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut buf = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        buf.push(ch);
        if matches!(ch, '.' | '?' | '!') {
            if chars.peek().is_some_and(|next| next.is_whitespace()) {
                parts.push(std::mem::take(&mut buf));
            }
        }
    }
    if !buf.is_empty() {
        parts.push(buf);
    }
    parts
}

/// Split Chinese text into sentences, keeping the terminal punctuation.
///
/// Sentences end at 。！？; a trailing fragment without terminal
/// punctuation is kept as its own sentence.
pub fn split_zh_sentences(text: &str) -> Vec<String> {
    let text = normalize_whitespace(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut sents = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut buf = String::new();
        for ch in line.chars() {
            buf.push(ch);
            if matches!(ch, '。' | '！' | '？') {
                let sent = buf.trim();
                if !sent.is_empty() {
                    sents.push(sent.to_string());
                }
                buf.clear();
            }
        }
        let rest = buf.trim();
        if !rest.is_empty() {
            sents.push(rest.to_string());
        }
    }
    sents
}

/// Align EN/ZH texts into sentence pairs by index, truncating to the
/// shorter side.
pub fn align_sentence_pairs(en_text: &str, zh_text: &str) -> Vec<SentencePair> {
    let en_sents = split_en_sentences(en_text);
    let zh_sents = split_zh_sentences(zh_text);

    en_sents
        .into_iter()
        .zip(zh_sents)
        .map(|(en, zh)| SentencePair::new(en, zh))
        .collect()
}
