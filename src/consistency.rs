/*!
 * Inconsistency detection over term mappings.
 *
 * Turns ranked candidate lists into entropy/severity scores and decides,
 * per English term, whether the observed Chinese renderings disagree enough
 * to surface to a reviewer. Two independent causes produce a flag:
 *
 * - the candidate distribution is spread out (high Shannon entropy), or
 * - the glossary preference differs from the naturally top-ranked candidate
 *   (translators are consistent, but consistently off-glossary).
 *
 * Both causes are recorded on the flag so reports can tell them apart.
 */

use serde::{Deserialize, Serialize};

use crate::alignment::{Candidate, TermMapping};
use crate::app_config::ConsistencyConfig;
use crate::glossary::Glossary;

/// Why a term was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagReason {
    /// Candidate distribution entropy is at or above the threshold
    HighEntropy,
    /// Glossary preference differs from the natural top candidate
    GlossaryMismatch,
}

/// One flagged term. Read-only once created.
///
/// Flags carry the candidate list in two forms: the structured `candidates`
/// vector and the legacy joined summary string (`"term(count); ..."`). Flags
/// deserialized from older reports may carry only the summary string; the
/// patcher falls back to parsing it when the structured fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    /// The English term
    pub en_term: String,
    /// Preferred Chinese rendering (glossary value, or natural top candidate)
    pub preferred_zh: String,
    /// Candidate Chinese terms, ranked (may be absent on legacy records)
    #[serde(default)]
    pub candidate_terms: Option<Vec<String>>,
    /// Legacy joined summary form: "term(count); term(count); ..."
    #[serde(default)]
    pub candidate_zh_terms: Option<String>,
    /// Full structured candidate list
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Sum of candidate counts
    #[serde(default)]
    pub total_occurrences: u32,
    /// Shannon entropy of the candidate count distribution
    #[serde(default)]
    pub entropy: f64,
    /// Highest probability in the distribution
    #[serde(default)]
    pub top_prob: f64,
    /// entropy + (1 - top_prob); used for relative ranking within one run
    #[serde(default)]
    pub severity: f64,
    /// All candidate terms other than the preferred one
    #[serde(default)]
    pub alternates: Vec<String>,
    /// Why this term was flagged
    #[serde(default)]
    pub reasons: Vec<FlagReason>,
}

impl Flag {
    /// Joined candidate summary, rebuilt from the structured list when
    /// available, otherwise the stored legacy string.
    pub fn candidate_summary(&self) -> String {
        if !self.candidates.is_empty() {
            return join_candidate_summary(&self.candidates);
        }
        self.candidate_zh_terms.clone().unwrap_or_default()
    }
}

/// Render candidates as `"term(count); term(count); ..."`.
fn join_candidate_summary(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("{}({})", c.zh_term, c.count))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Shannon entropy of a probability distribution, in nats.
///
/// The epsilon inside the log avoids the singularity at p -> 0 without
/// materially changing values for probabilities bounded away from zero.
fn entropy(probs: &[f64]) -> f64 {
    let mut e = 0.0;
    for &p in probs {
        if p > 0.0 {
            e -= p * (p + 1e-12).ln();
        }
    }
    e
}

/// Decide which terms to flag.
///
/// Mappings with no candidates or with a summed count below
/// `min_total_occurrences` are skipped silently. Output is sorted by
/// severity descending; ties keep mapping order, so the result is
/// deterministic for identical inputs.
pub fn detect_inconsistencies(
    mappings: &[TermMapping],
    glossary: &Glossary,
    config: &ConsistencyConfig,
) -> Vec<Flag> {
    let mut flags: Vec<Flag> = Vec::new();

    for mapping in mappings {
        let candidates = &mapping.candidates;
        if candidates.is_empty() {
            continue;
        }

        let total: u32 = candidates.iter().map(|c| c.count).sum();
        if total < config.min_total_occurrences {
            continue;
        }

        let probs: Vec<f64> = candidates
            .iter()
            .map(|c| c.count as f64 / total as f64)
            .collect();
        let ent = entropy(&probs);
        let top_prob = probs.iter().cloned().fold(0.0, f64::max);

        let preferred = glossary
            .get(&mapping.en_term)
            .unwrap_or(&candidates[0].zh_term)
            .to_string();

        let mut reasons = Vec::new();
        if candidates.len() >= 2 && ent >= config.entropy_threshold {
            reasons.push(FlagReason::HighEntropy);
        }
        if preferred != candidates[0].zh_term {
            reasons.push(FlagReason::GlossaryMismatch);
        }
        if reasons.is_empty() {
            continue;
        }

        let severity = ent + (1.0 - top_prob);
        let alternates: Vec<String> = candidates
            .iter()
            .filter(|c| c.zh_term != preferred)
            .map(|c| c.zh_term.clone())
            .collect();

        flags.push(Flag {
            en_term: mapping.en_term.clone(),
            preferred_zh: preferred,
            candidate_terms: Some(candidates.iter().map(|c| c.zh_term.clone()).collect()),
            candidate_zh_terms: Some(join_candidate_summary(candidates)),
            candidates: candidates.clone(),
            total_occurrences: total,
            entropy: ent,
            top_prob,
            severity,
            alternates,
            reasons,
        });
    }

    // Stable sort keeps mapping order for equal severities
    flags.sort_by(|a, b| {
        b.severity
            .partial_cmp(&a.severity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    flags
}
